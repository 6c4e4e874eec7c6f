use axum::response::Response;

use super::{AppError, ErrorCode};

/// Router fallback producing the standard JSON 404 body.
pub async fn not_found() -> Response {
    use axum::response::IntoResponse;
    AppError::NotFound(ErrorCode::NotFound.default_message().to_string()).into_response()
}
