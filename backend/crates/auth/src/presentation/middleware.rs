//! Auth Middleware
//!
//! Bearer-token check for protected routes. Stateless: the token's
//! signature and expiry are the entire session contract, there is no
//! server-side session store.

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use platform::bearer::{self, BearerError};
use platform::token;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::error::AuthError;

/// Caller identity decoded from the bearer token, stored in request
/// extensions for downstream ownership checks.
#[derive(Debug, Clone, Copy)]
pub struct CallerIdentity {
    pub professor_id: i32,
}

/// Middleware that requires a valid bearer token.
///
/// Failure modes map to the legacy responses:
/// - no header: 401 "Acesso negado. Token não fornecido."
/// - no token segment: 401 "Token mal formatado."
/// - bad signature / expired: 401 "Token inválido ou expirado."
pub async fn require_bearer(
    config: Arc<AuthConfig>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let token = match bearer::extract_bearer(req.headers()) {
        Ok(token) => token.to_owned(),
        Err(BearerError::Missing) => return Err(AuthError::TokenMissing.into_response()),
        Err(BearerError::Malformed) => return Err(AuthError::TokenMalformed.into_response()),
    };

    let claims = match token::verify(config.secret_bytes(), &token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::debug!(error = %e, "Bearer token rejected");
            return Err(AuthError::TokenInvalid.into_response());
        }
    };

    req.extensions_mut().insert(CallerIdentity {
        professor_id: claims.id,
    });

    Ok(next.run(req).await)
}
