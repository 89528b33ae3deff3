//! Login Use Case
//!
//! Verifies credentials and issues a signed bearer token.

use std::sync::Arc;

use platform::password::{self, ClearTextPassword};
use platform::token;

use crate::application::config::AuthConfig;
use crate::domain::repository::ProfessorRepository;
use crate::error::{AuthError, AuthResult};

/// Login input. Fields mirror the optional request body; a missing
/// field is treated as a failed credential check.
pub struct LoginInput {
    pub email: Option<String>,
    pub senha: Option<String>,
}

/// Login output. `nome` and `id` are returned in clear for client-side
/// display; the same values are embedded in the signed token.
pub struct LoginOutput {
    pub token: String,
    pub nome: String,
    pub id: i32,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: ProfessorRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> LoginUseCase<R>
where
    R: ProfessorRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // Unknown email, wrong password and absent fields must be
        // indistinguishable on the wire to avoid user enumeration.
        let (email, senha) = match (input.email, input.senha) {
            (Some(email), Some(senha)) => (email, senha),
            _ => return Err(AuthError::InvalidCredentials),
        };

        let creds = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let senha = ClearTextPassword::new(senha).map_err(|_| AuthError::InvalidCredentials)?;

        let senha_correta = password::verify_password(&senha, &creds.senha_hash)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        if !senha_correta {
            return Err(AuthError::InvalidCredentials);
        }

        let token = token::issue(
            self.config.secret_bytes(),
            creds.id,
            &creds.nome,
            self.config.token_ttl,
        )
        .map_err(|e| AuthError::Internal(e.to_string()))?;

        tracing::info!(professor_id = creds.id, "Professor logged in");

        Ok(LoginOutput {
            token,
            nome: creds.nome,
            id: creds.id,
        })
    }
}
