use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

/// `Json<T>` whose rejection is a 400 [`AppError`] instead of axum's plain-text body.
///
/// Malformed JSON, a wrong content type and type mismatches all map to
/// `AppError::JsonExtractorRejection`.
///
/// ```ignore
/// async fn create(JsonBody(input): JsonBody<CreateCategory>) -> Result<impl IntoResponse, AppError> {
///     // ...
/// }
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(value))
    }
}
