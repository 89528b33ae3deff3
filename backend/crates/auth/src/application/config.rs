//! Application Configuration
//!
//! Configuration for the Auth application layer. The token secret is
//! injected once at process start and never mutated; it is not a
//! hard-coded constant anywhere in the codebase.

use chrono::Duration;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Shared secret for HS256 token signing
    pub token_secret: String,
    /// Token lifetime (8 hours)
    pub token_ttl: Duration,
}

impl AuthConfig {
    /// Build from an injected secret with the standard 8-hour TTL.
    pub fn from_secret(token_secret: String) -> Self {
        Self {
            token_secret,
            token_ttl: Duration::hours(8),
        }
    }

    /// Config for local development runs. Not for production.
    pub fn development() -> Self {
        Self::from_secret("dev-secret-trocar-em-producao".to_string())
    }

    /// Secret as bytes for the token layer.
    pub fn secret_bytes(&self) -> &[u8] {
        self.token_secret.as_bytes()
    }
}
