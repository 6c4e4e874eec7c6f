use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{BadRequestResponse, InternalServerErrorResponse, NotFoundResponse},
    AppError,
};
use domain_categories::CategoryResponse;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::dto::{ProductDetail, ProductListResponse, ProductSummary, VariantDetail};
use crate::error::CatalogResult;
use crate::models::ListProductsQuery;
use crate::repository::ProductRepository;
use crate::service::CatalogService;

pub const TAG: &str = "Catalog";

/// OpenAPI documentation for the Catalog API
#[derive(OpenApi)]
#[openapi(
    paths(list_products, get_product),
    components(
        schemas(ProductListResponse, ProductSummary, ProductDetail, VariantDetail, CategoryResponse),
        responses(BadRequestResponse, NotFoundResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = TAG, description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the catalog router
pub fn router<R: ProductRepository + 'static>(service: CatalogService<R>) -> Router {
    Router::new()
        .route("/", get(list_products::<R>))
        .route("/{code}", get(get_product::<R>))
        .with_state(Arc::new(service))
}

/// List products
///
/// Query parameters never fail the request: unusable values fall back to their defaults.
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(ListProductsQuery),
    responses(
        (status = 200, description = "Page of products", body = ProductListResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    query: Result<Query<ListProductsQuery>, QueryRejection>,
) -> CatalogResult<Json<ProductListResponse>> {
    let query = query.map(|Query(query)| query).unwrap_or_else(|rejection| {
        tracing::debug!(%rejection, "Unreadable catalog query, using defaults");
        ListProductsQuery::default()
    });

    let products = service.list_products(query.into_filter()).await?;
    Ok(Json(products))
}

/// Get a product with its variants
///
/// Variants without their own price report the product price.
#[utoipa::path(
    get,
    path = "/{code}",
    tag = TAG,
    params(
        ("code" = String, Path, description = "Product code", example = "PROD001")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductDetail),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    Path(code): Path<String>,
) -> Result<Json<ProductDetail>, AppError> {
    if code.trim().is_empty() {
        return Err(AppError::BadRequest("Product code is required".to_string()));
    }

    let product = service.get_product_details(&code).await?;
    Ok(Json(product))
}
