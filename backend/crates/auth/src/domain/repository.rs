//! Repository Traits
//!
//! Interfaces for credential persistence. Implementation is in the
//! infrastructure layer.

use crate::domain::entity::professor::{Credentials, NewProfessor};
use crate::error::AuthResult;

/// Professor credential repository
#[trait_variant::make(ProfessorRepository: Send)]
pub trait LocalProfessorRepository {
    /// Persist a new professor. Duplicate email surfaces as
    /// `AuthError::EmailTaken`.
    async fn create(&self, professor: &NewProfessor) -> AuthResult<()>;

    /// Load credentials by email, exact match.
    async fn find_by_email(&self, email: &str) -> AuthResult<Option<Credentials>>;
}
