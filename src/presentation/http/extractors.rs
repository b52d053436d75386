// src/presentation/http/extractors.rs
use super::error::HttpError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// JSON body that does not insist on a `Content-Type` header.
///
/// Any body that fails to read or decode is rejected with the uniform
/// `400 invalid request body` error instead of axum's plain-text rejection.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|err| {
            tracing::debug!(error = %err, "failed to read request body");
            HttpError::invalid_body()
        })?;

        serde_json::from_slice(&bytes).map(Self).map_err(|err| {
            tracing::debug!(error = %err, "failed to decode request body");
            HttpError::invalid_body()
        })
    }
}
