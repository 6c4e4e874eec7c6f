//! Wire shapes for the catalog endpoints. Prices leave the domain as JSON numbers.

use domain_categories::CategoryResponse;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Product, ProductPage, Variant};

/// Listing entry. `category` is absent for uncategorized products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductSummary {
    #[schema(example = "PROD001")]
    pub code: String,
    #[schema(example = 10.99)]
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductListResponse {
    pub products: Vec<ProductSummary>,
    /// Products matching the filters, regardless of the window
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductDetail {
    #[schema(example = "PROD001")]
    pub code: String,
    #[schema(example = 10.99)]
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryResponse>,
    pub variants: Vec<VariantDetail>,
}

/// Variant with its effective price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VariantDetail {
    #[schema(example = "Red")]
    pub name: String,
    #[schema(example = "SKU001-R")]
    pub sku: String,
    #[schema(example = 11.99)]
    pub price: f64,
}

impl From<&Product> for ProductSummary {
    fn from(product: &Product) -> Self {
        Self {
            code: product.code.clone(),
            price: to_f64(product.price),
            category: product.category.as_ref().map(Into::into),
        }
    }
}

impl From<&Product> for ProductDetail {
    fn from(product: &Product) -> Self {
        Self {
            code: product.code.clone(),
            price: to_f64(product.price),
            category: product.category.as_ref().map(Into::into),
            variants: product
                .variants
                .iter()
                .map(|variant| variant_detail(variant, product.price))
                .collect(),
        }
    }
}

pub fn variant_detail(variant: &Variant, product_price: Decimal) -> VariantDetail {
    VariantDetail {
        name: variant.name.clone(),
        sku: variant.sku.clone(),
        price: to_f64(variant.effective_price(product_price)),
    }
}

/// Echoes the window the page was fetched with.
pub fn list_response(page: ProductPage, offset: u64, limit: u64) -> ProductListResponse {
    ProductListResponse {
        products: page.items.iter().map(ProductSummary::from).collect(),
        total: page.total,
        offset,
        limit,
    }
}

fn to_f64(price: Decimal) -> f64 {
    price.to_f64().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_categories::Category;
    use serde_json::json;

    fn prod001() -> Product {
        let variant = |id, name: &str, sku: &str, price| Variant {
            id,
            product_id: 1,
            name: name.into(),
            sku: sku.into(),
            price,
        };

        Product {
            id: 1,
            code: "PROD001".into(),
            price: Decimal::new(1099, 2),
            category: Some(Category {
                id: 1,
                code: "CLOTHING".into(),
                name: "Clothing".into(),
            }),
            variants: vec![
                variant(1, "Red", "SKU001-R", Some(Decimal::new(1199, 2))),
                variant(2, "Blue", "SKU001-B", None),
                variant(3, "Green", "SKU001-G", None),
            ],
        }
    }

    #[test]
    fn test_detail_applies_price_inheritance() {
        let detail = ProductDetail::from(&prod001());

        let prices: Vec<f64> = detail.variants.iter().map(|v| v.price).collect();
        assert_eq!(prices, vec![11.99, 10.99, 10.99]);
        assert_eq!(detail.price, 10.99);
    }

    #[test]
    fn test_detail_json_shape() {
        let json = serde_json::to_value(ProductDetail::from(&prod001())).unwrap();

        assert_eq!(
            json,
            json!({
                "code": "PROD001",
                "price": 10.99,
                "category": { "code": "CLOTHING", "name": "Clothing" },
                "variants": [
                    { "name": "Red", "sku": "SKU001-R", "price": 11.99 },
                    { "name": "Blue", "sku": "SKU001-B", "price": 10.99 },
                    { "name": "Green", "sku": "SKU001-G", "price": 10.99 }
                ]
            })
        );
    }

    #[test]
    fn test_uncategorized_product_has_no_category_key() {
        let mut product = prod001();
        product.category = None;
        product.variants.clear();

        let summary = serde_json::to_value(ProductSummary::from(&product)).unwrap();
        assert!(summary.get("category").is_none());

        let detail = serde_json::to_value(ProductDetail::from(&product)).unwrap();
        assert!(detail.get("category").is_none());
        assert_eq!(detail["variants"], json!([]));
    }

    #[test]
    fn test_list_response_echoes_window() {
        let page = ProductPage {
            items: vec![prod001()],
            total: 8,
        };

        let response = list_response(page, 3, 1);

        assert_eq!(response.total, 8);
        assert_eq!(response.offset, 3);
        assert_eq!(response.limit, 1);
        assert_eq!(response.products[0].code, "PROD001");
        assert_eq!(response.products[0].price, 10.99);
    }
}
