use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

use crate::models::{MAX_CODE_LENGTH, MAX_NAME_LENGTH};

/// First failed rule of [`CreateCategory::validate`](crate::models::CreateCategory::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CategoryValidationError {
    #[error("category code is required")]
    CodeRequired,

    #[error("category name is required")]
    NameRequired,

    #[error("category code must not exceed {max} characters", max = MAX_CODE_LENGTH)]
    CodeTooLong,

    #[error("category name must not exceed {max} characters", max = MAX_NAME_LENGTH)]
    NameTooLong,
}

#[derive(Debug, Error)]
pub enum CategoryError {
    #[error(transparent)]
    Validation(#[from] CategoryValidationError),

    #[error("Category with code '{0}' already exists")]
    Conflict(String),

    #[error("Repository error: {0}")]
    Repository(#[from] DbErr),
}

pub type CategoryResult<T> = Result<T, CategoryError>;

impl From<CategoryError> for AppError {
    fn from(err: CategoryError) -> Self {
        match err {
            CategoryError::Validation(e) => AppError::Validation(e.to_string()),
            CategoryError::Conflict(code) => {
                AppError::Conflict(format!("Category with code '{code}' already exists"))
            }
            CategoryError::Repository(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for CategoryError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
