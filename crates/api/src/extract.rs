//! Untyped JSON body extractor.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde_json::Value;

use crate::error::AppError;

/// The request body as an arbitrary JSON value.
///
/// Unlike `axum::Json`, this never rejects on content type or syntax: an
/// empty or unparseable body becomes `Value::Null`, so the handler's own
/// validator decides what error the client sees. Failing to read the body
/// at all (e.g. over the size limit) keeps the framework's status code.
#[derive(Debug, Clone)]
pub struct RawJson(pub Value);

impl<S> FromRequest<S> for RawJson
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;

        if bytes.is_empty() {
            return Ok(RawJson(Value::Null));
        }

        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(RawJson(value)),
            Err(err) => {
                tracing::debug!(error = %err, "Request body is not valid JSON");
                Ok(RawJson(Value::Null))
            }
        }
    }
}
