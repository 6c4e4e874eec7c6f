//! API routes module

pub mod health;

use axum::Router;
use domain_catalog::{CatalogService, PgProductRepository};
use domain_categories::{CategoryService, PgCategoryRepository};

use crate::state::AppState;

/// API routes without the `/api` prefix, which `create_router` adds.
pub fn routes(state: &AppState) -> Router {
    let catalog = CatalogService::new(PgProductRepository::new(state.db.clone()));
    let categories = CategoryService::new(PgCategoryRepository::new(state.db.clone()));

    compose(
        domain_catalog::handlers::router(catalog),
        domain_categories::handlers::router(categories),
    )
}

fn compose(catalog: Router, categories: Router) -> Router {
    Router::new()
        .nest("/catalog", catalog)
        .nest("/categories", categories)
}

/// `/ready` with a real database ping, merged next to the stateless app router.
pub fn ready_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::server::ServerConfig;
    use domain_catalog::{InMemoryProductRepository, Product};
    use domain_categories::InMemoryCategoryRepository;
    use http_body_util::BodyExt;
    use rust_decimal::Decimal;
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        let products = InMemoryProductRepository::with_products(vec![Product {
            id: 7,
            code: "PROD007".into(),
            price: Decimal::new(350, 2),
            category: None,
            variants: vec![],
        }]);
        let categories = InMemoryCategoryRepository::with_categories([("SHOES", "Shoes")]);

        let apis = compose(
            domain_catalog::handlers::router(CatalogService::new(products)),
            domain_categories::handlers::router(CategoryService::new(categories)),
        );
        axum_helpers::create_router::<crate::openapi::ApiDoc>(apis, &ServerConfig::default())
            .unwrap()
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_catalog_is_mounted_under_api() {
        let (status, body) = send(Request::get("/api/catalog").body(Body::empty()).unwrap()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 1);
        assert_eq!(body["products"][0]["code"], "PROD007");

        let (status, body) =
            send(Request::get("/api/catalog/PROD007").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["price"], 3.5);
    }

    #[tokio::test]
    async fn test_categories_are_mounted_under_api() {
        let (status, body) =
            send(Request::get("/api/categories").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["categories"][0]["code"], "SHOES");

        let (status, body) = send(
            Request::post("/api/categories")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"code":"bags","name":"Bags"}"#))
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["code"], "BAGS");
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let (status, body) = send(Request::get("/api/orders").body(Body::empty()).unwrap()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "NOT_FOUND");
    }
}
