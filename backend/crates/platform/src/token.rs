//! Signed Bearer Tokens
//!
//! Stateless identity tokens: JWT signed with HS256 over a shared secret.
//! The payload carries the caller's id and display name plus the standard
//! `exp` claim. No server-side session state exists; expiry and signature
//! are the whole contract.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Caller identity (professor id)
    pub id: i32,
    /// Display name, for client-side use
    pub nome: String,
    /// Expiry, seconds since the epoch
    pub exp: i64,
}

/// Token signing/verification errors.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Token expired
    #[error("Token expired")]
    Expired,

    /// Bad signature, malformed token, or wrong claims shape
    #[error("Invalid token")]
    Invalid,

    /// Signing failed (should not happen with a valid secret)
    #[error("Token signing failed: {0}")]
    Signing(String),
}

/// Issue a signed token for the given identity, valid for `ttl`.
pub fn issue(secret: &[u8], id: i32, nome: &str, ttl: Duration) -> Result<String, TokenError> {
    let claims = Claims {
        id,
        nome: nome.to_string(),
        exp: (Utc::now() + ttl).timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| TokenError::Signing(e.to_string()))
}

/// Verify signature and expiry, returning the decoded claims.
pub fn verify(secret: &[u8], token: &str) -> Result<Claims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    // No clock leeway: an expired token is expired.
    validation.leeway = 0;

    decode::<Claims>(token, &DecodingKey::from_secret(secret), &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"segredo-de-teste";

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let token = issue(SECRET, 7, "Maria", Duration::hours(8)).unwrap();
        let claims = verify(SECRET, &token).unwrap();

        assert_eq!(claims.id, 7);
        assert_eq!(claims.nome, "Maria");
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_expired_token_rejected() {
        let token = issue(SECRET, 7, "Maria", Duration::seconds(-10)).unwrap();
        assert!(matches!(verify(SECRET, &token), Err(TokenError::Expired)));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = issue(SECRET, 7, "Maria", Duration::hours(8)).unwrap();
        assert!(matches!(
            verify(b"outro-segredo", &token),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn test_tampered_token_rejected() {
        let token = issue(SECRET, 7, "Maria", Duration::hours(8)).unwrap();
        let mut tampered = token.clone();
        tampered.pop();
        assert!(verify(SECRET, &tampered).is_err());
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(
            verify(SECRET, "nem.um.jwt"),
            Err(TokenError::Invalid)
        ));
    }
}
