//! Handler tests for the Catalog domain
//!
//! These drive the domain router with an in-memory repository holding a copy of
//! the seed catalog, checking query clamping, status codes and JSON shapes.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_catalog::*;
use domain_categories::Category;
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use tower::ServiceExt; // For oneshot()

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn category(id: i32, code: &str, name: &str) -> Option<Category> {
    Some(Category {
        id,
        code: code.into(),
        name: name.into(),
    })
}

fn variant(id: i32, product_id: i32, name: &str, sku: &str, cents: i64) -> Variant {
    Variant {
        id,
        product_id,
        name: name.into(),
        sku: sku.into(),
        price: (cents != 0).then(|| Decimal::new(cents, 2)),
    }
}

fn seed_catalog() -> Vec<Product> {
    let clothing = || category(1, "CLOTHING", "Clothing");
    let shoes = || category(2, "SHOES", "Shoes");
    let accessories = || category(3, "ACCESSORIES", "Accessories");
    let product = |id: i32, cents, category, variants| Product {
        id,
        code: format!("PROD{id:03}"),
        price: Decimal::new(cents, 2),
        category,
        variants,
    };

    vec![
        product(
            1,
            1099,
            clothing(),
            vec![
                variant(1, 1, "Red", "SKU001-R", 1199),
                variant(2, 1, "Blue", "SKU001-B", 0),
                variant(3, 1, "Green", "SKU001-G", 0),
            ],
        ),
        product(2, 1249, shoes(), vec![]),
        product(3, 875, accessories(), vec![]),
        product(4, 1500, clothing(), vec![]),
        product(5, 9999, shoes(), vec![]),
        product(6, 725, accessories(), vec![]),
        product(7, 350, None, vec![]),
        product(8, 4200, clothing(), vec![]),
    ]
}

fn app() -> Router {
    let repo = InMemoryProductRepository::with_products(seed_catalog());
    handlers::router(CatalogService::new(repo))
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, json_body(response.into_body()).await)
}

fn codes(body: &Value) -> Vec<&str> {
    body["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["code"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_list_defaults() {
    let (status, body) = get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 8);
    assert_eq!(body["offset"], 0);
    assert_eq!(body["limit"], 10);
    assert_eq!(codes(&body).len(), 8);
    assert_eq!(
        body["products"][0],
        json!({
            "code": "PROD001",
            "price": 10.99,
            "category": { "code": "CLOTHING", "name": "Clothing" }
        })
    );
}

#[tokio::test]
async fn test_list_window_does_not_change_total() {
    let (_, body) = get("/?offset=2&limit=3").await;

    assert_eq!(codes(&body), vec!["PROD003", "PROD004", "PROD005"]);
    assert_eq!(body["total"], 8);
    assert_eq!(body["offset"], 2);
    assert_eq!(body["limit"], 3);
}

#[tokio::test]
async fn test_list_clamps_bad_parameters() {
    let (status, body) = get("/?offset=-4&limit=500").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["offset"], 0);
    assert_eq!(body["limit"], 100);

    let (status, body) = get("/?offset=abc&limit=0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["offset"], 0);
    assert_eq!(body["limit"], 1);
    assert_eq!(codes(&body), vec!["PROD001"]);
}

#[tokio::test]
async fn test_list_by_category_and_price() {
    let (_, body) = get("/?category=CLOTHING").await;
    assert_eq!(codes(&body), vec!["PROD001", "PROD004", "PROD008"]);
    assert_eq!(body["total"], 3);

    let (_, body) = get("/?category=CLOTHING&priceLessThan=20").await;
    assert_eq!(codes(&body), vec!["PROD001", "PROD004"]);
    assert_eq!(body["total"], 2);
}

#[tokio::test]
async fn test_list_ignores_non_positive_price_bound() {
    let (_, body) = get("/?priceLessThan=0").await;
    assert_eq!(body["total"], 8);

    let (_, body) = get("/?priceLessThan=cheap").await;
    assert_eq!(body["total"], 8);
}

#[tokio::test]
async fn test_uncategorized_product_omits_category() {
    let (_, body) = get("/?offset=6&limit=1").await;

    assert_eq!(body["products"][0], json!({ "code": "PROD007", "price": 3.5 }));
}

#[tokio::test]
async fn test_get_product_with_inherited_variant_prices() {
    let (status, body) = get("/PROD001").await;

    assert_eq!(status, StatusCode::OK);

    let detail: ProductDetail = serde_json::from_value(body).unwrap();
    assert_eq!(detail.code, "PROD001");
    assert_eq!(detail.price, 10.99);
    let prices: Vec<f64> = detail.variants.iter().map(|v| v.price).collect();
    assert_eq!(prices, vec![11.99, 10.99, 10.99]);
}

#[tokio::test]
async fn test_get_product_without_variants_has_empty_list() {
    let (status, body) = get("/PROD007").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["variants"], json!([]));
    assert!(body.get("category").is_none());
}

#[tokio::test]
async fn test_get_unknown_product_is_404() {
    let (status, body) = get("/PROD999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Product not found");
}

#[tokio::test]
async fn test_get_blank_code_is_400() {
    let (status, body) = get("/%20%20").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Product code is required");
}
