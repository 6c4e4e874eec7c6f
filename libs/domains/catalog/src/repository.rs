use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::CatalogResult;
use crate::models::{Product, ProductFilter, ProductPage};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Products matching `filter` in ascending id order, windowed by offset/limit.
    /// `total` counts every match.
    async fn list(&self, filter: ProductFilter) -> CatalogResult<ProductPage>;

    /// Product with its category and variants
    async fn get_by_code(&self, code: &str) -> CatalogResult<Option<Product>>;
}

/// In-memory implementation (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(mut products: Vec<Product>) -> Self {
        products.sort_by_key(|p| p.id);
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }
}

fn matches(product: &Product, filter: &ProductFilter) -> bool {
    let category_ok = filter.category.as_deref().is_none_or(|code| {
        product
            .category
            .as_ref()
            .is_some_and(|category| category.code == code)
    });
    let price_ok = filter
        .price_less_than
        .is_none_or(|bound| product.price < bound);

    category_ok && price_ok
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self, filter: ProductFilter) -> CatalogResult<ProductPage> {
        let products = self.products.read().await;

        let matching: Vec<&Product> = products.iter().filter(|p| matches(p, &filter)).collect();
        let total = matching.len() as u64;

        let items = matching
            .into_iter()
            .skip(usize::try_from(filter.offset).unwrap_or(usize::MAX))
            .take(usize::try_from(filter.limit).unwrap_or(usize::MAX))
            .cloned()
            .collect();

        Ok(ProductPage { items, total })
    }

    async fn get_by_code(&self, code: &str) -> CatalogResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.code == code).cloned())
    }
}
