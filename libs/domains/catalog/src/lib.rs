//! Catalog Domain
//!
//! Read-only product catalog: filtered, paginated listing and per-product detail
//! with variant price inheritance.
//!
//! ```text
//! handlers  → HTTP endpoints (GET /, GET /{code}), query clamping
//! service   → orchestration, price inheritance
//! dto       → wire shapes (prices as JSON numbers)
//! repository→ persistence trait, in-memory and PostgreSQL implementations
//! models    → Product, Variant, ProductPage, ProductFilter
//! ```

pub mod dto;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use dto::{ProductDetail, ProductListResponse, ProductSummary, VariantDetail};
pub use error::{CatalogError, CatalogResult};
pub use handlers::ApiDoc;
pub use models::{ListProductsQuery, Product, ProductFilter, ProductPage, Variant};
pub use postgres::PgProductRepository;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::CatalogService;
