//! Bearer Token Extraction
//!
//! Pulls the token out of an `Authorization: Bearer <token>` header.
//! The two failure modes are distinct on purpose: the API reports a
//! missing header differently from a malformed one.

use axum::http::{HeaderMap, header};
use thiserror::Error;

/// Header extraction failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BearerError {
    /// No `Authorization` header at all
    #[error("Authorization header missing")]
    Missing,

    /// Header present but not `Bearer <token>`
    #[error("Authorization header malformed")]
    Malformed,
}

/// Extract the bearer token from request headers.
pub fn extract_bearer(headers: &HeaderMap) -> Result<&str, BearerError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(BearerError::Missing)?
        .to_str()
        .map_err(|_| BearerError::Malformed)?;

    let (scheme, token) = value.split_once(' ').ok_or(BearerError::Malformed)?;

    if scheme != "Bearer" || token.is_empty() {
        return Err(BearerError::Malformed);
    }

    Ok(token)
}
