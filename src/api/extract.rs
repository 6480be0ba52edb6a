use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::api::errors::ApiError;

/// JSON body extractor that reports malformed bodies as `ApiError`
///
/// Behaves like `axum::Json`, but a missing content type, invalid JSON or
/// a type mismatch produces a 400 `{"error": "Invalid JSON body"}`. The
/// rejection detail is only logged.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::warn!(error = %rejection.body_text(), "Rejected request body");
                ApiError::bad_request("Invalid JSON body")
            })?;

        Ok(ApiJson(value))
    }
}
