//! Categories Domain
//!
//! Product categories: listing and validated creation.
//!
//! ```text
//! handlers  → HTTP endpoints (GET /, POST /)
//! service   → validation guard chain, code normalization
//! repository→ persistence trait, in-memory and PostgreSQL implementations
//! models    → Category, CreateCategory, response DTOs
//! ```
//!
//! ```rust,no_run
//! use domain_categories::{handlers, CategoryService, InMemoryCategoryRepository};
//!
//! let service = CategoryService::new(InMemoryCategoryRepository::new());
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{CategoryError, CategoryResult, CategoryValidationError};
pub use handlers::ApiDoc;
pub use models::{Category, CategoryListResponse, CategoryResponse, CreateCategory};
pub use postgres::PgCategoryRepository;
pub use repository::{CategoryRepository, InMemoryCategoryRepository};
pub use service::CategoryService;
