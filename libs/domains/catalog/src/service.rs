use std::sync::Arc;
use tracing::instrument;

use crate::dto::{self, ProductDetail, ProductListResponse};
use crate::error::{CatalogError, CatalogResult};
use crate::models::ProductFilter;
use crate::repository::ProductRepository;

#[derive(Clone)]
pub struct CatalogService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> CatalogService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self, filter: ProductFilter) -> CatalogResult<ProductListResponse> {
        let (offset, limit) = (filter.offset, filter.limit);
        let page = self.repository.list(filter).await?;
        Ok(dto::list_response(page, offset, limit))
    }

    /// Product detail with effective variant prices.
    ///
    /// A failed lookup is reported as [`CatalogError::NotFound`], same as a missing product.
    #[instrument(skip(self))]
    pub async fn get_product_details(&self, code: &str) -> CatalogResult<ProductDetail> {
        match self.repository.get_by_code(code).await {
            Ok(Some(product)) => Ok(ProductDetail::from(&product)),
            Ok(None) | Err(_) => Err(CatalogError::NotFound(code.to_string())),
        }
    }
}
