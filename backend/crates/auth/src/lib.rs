//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities and repository traits
//! - `application/` - Use cases and application config
//! - `infra/` - PostgreSQL implementation
//! - `presentation/` - HTTP handlers, DTOs, router, bearer middleware
//!
//! ## Features
//! - Professor registration with bcrypt-hashed passwords
//! - Login issuing a signed bearer token (JWT, 8-hour expiry)
//! - Route middleware validating bearer tokens for protected operations
//!
//! ## Security Model
//! - Unknown email and wrong password are indistinguishable on the wire
//! - Tokens are stateless; identity lives in the signed claims only

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgProfessorRepository;
pub use presentation::middleware::{CallerIdentity, require_bearer};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
