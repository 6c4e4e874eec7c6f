use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use axum_helpers::{
    errors::responses::{BadRequestResponse, ConflictResponse, InternalServerErrorResponse},
    JsonBody,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CategoryResult;
use crate::models::{CategoryListResponse, CategoryResponse, CreateCategory};
use crate::repository::CategoryRepository;
use crate::service::CategoryService;

pub const TAG: &str = "Categories";

/// OpenAPI documentation for the Categories API
#[derive(OpenApi)]
#[openapi(
    paths(list_categories, create_category),
    components(
        schemas(CategoryResponse, CategoryListResponse, CreateCategory),
        responses(BadRequestResponse, ConflictResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = TAG, description = "Product category endpoints")
    )
)]
pub struct ApiDoc;

/// Create the category router
pub fn router<R: CategoryRepository + 'static>(service: CategoryService<R>) -> Router {
    Router::new()
        .route("/", get(list_categories::<R>).post(create_category::<R>))
        .with_state(Arc::new(service))
}

/// List all categories
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "All categories", body = CategoryListResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_categories<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
) -> CategoryResult<Json<CategoryListResponse>> {
    let categories = service.list_categories().await?;
    Ok(Json(categories))
}

/// Create a category
///
/// The code is stored upper-cased.
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateCategory,
    responses(
        (status = 201, description = "Category created", body = CategoryResponse),
        (status = 400, response = BadRequestResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    JsonBody(input): JsonBody<CreateCategory>,
) -> CategoryResult<impl IntoResponse> {
    let category = service.create_category(input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}
