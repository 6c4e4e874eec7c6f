use domain_categories::Category;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::IntoParams;

pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub code: String,
    pub price: Decimal,
    pub category: Option<Category>,
    pub variants: Vec<Variant>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    pub id: i32,
    pub product_id: i32,
    pub name: String,
    pub sku: String,
    /// Price override. `None` inherits the product price.
    pub price: Option<Decimal>,
}

impl Variant {
    /// Own price when an override is set, otherwise `product_price`.
    pub fn effective_price(&self, product_price: Decimal) -> Decimal {
        self.price
            .filter(|price| !price.is_zero())
            .unwrap_or(product_price)
    }
}

/// One window of the listing plus the number of products matching the filters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPage {
    pub items: Vec<Product>,
    pub total: u64,
}

/// Listing window and predicates, already clamped by [`ListProductsQuery::into_filter`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFilter {
    pub offset: u64,
    pub limit: u64,
    /// Exact category code
    pub category: Option<String>,
    /// Strict upper bound on the product price
    pub price_less_than: Option<Decimal>,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIMIT,
            category: None,
            price_less_than: None,
        }
    }
}

/// Raw query string of `GET /catalog`.
///
/// Every field is kept as text so bad values fall back to defaults instead of
/// rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListProductsQuery {
    /// Products to skip (default 0, negative values count as 0)
    #[param(value_type = Option<i64>, example = 0)]
    pub offset: Option<String>,
    /// Page size (default 10, clamped to 1..=100)
    #[param(value_type = Option<i64>, example = 10)]
    pub limit: Option<String>,
    /// Category code to filter by
    #[param(example = "CLOTHING")]
    pub category: Option<String>,
    /// Only products cheaper than this; ignored unless positive
    #[serde(rename = "priceLessThan")]
    #[param(value_type = Option<f64>, example = 20.0)]
    pub price_less_than: Option<String>,
}

impl ListProductsQuery {
    pub fn into_filter(self) -> ProductFilter {
        let offset = parse_int(self.offset.as_deref()).unwrap_or(0).max(0);
        let limit = parse_int(self.limit.as_deref())
            .unwrap_or(DEFAULT_LIMIT as i64)
            .clamp(1, MAX_LIMIT as i64);

        let price_less_than = self
            .price_less_than
            .as_deref()
            .and_then(|raw| raw.trim().parse::<Decimal>().ok())
            .filter(|price| price.is_sign_positive() && !price.is_zero());

        ProductFilter {
            offset: offset.unsigned_abs(),
            limit: limit.unsigned_abs(),
            category: self.category.filter(|code| !code.is_empty()),
            price_less_than,
        }
    }
}

fn parse_int(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.trim().parse().ok())
}
