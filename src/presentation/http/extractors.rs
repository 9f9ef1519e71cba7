//! Custom Extractors
//!
//! Axum extractors for request parsing.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::shared::error::AppError;

/// JSON body that may be absent.
///
/// An empty body or a literal `null` yields `OptionalJson(None)`, which the
/// services report as a missing request rather than a parse failure.
#[derive(Debug)]
pub struct OptionalJson<T>(pub Option<T>);

impl<T, S> FromRequest<S> for OptionalJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(None));
        }

        serde_json::from_slice::<Option<T>>(&body)
            .map(Self)
            .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {}", e)))
    }
}
