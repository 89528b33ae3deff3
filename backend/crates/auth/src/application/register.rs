//! Register Use Case
//!
//! Creates a new professor account.

use std::sync::Arc;

use platform::password::{self, ClearTextPassword};

use crate::domain::entity::professor::NewProfessor;
use crate::domain::repository::ProfessorRepository;
use crate::error::{AuthError, AuthResult};

/// Register input. Fields arrive optional from the wire; presence is
/// validated here, not by the extractor, so the API answers 400 with
/// the usual message instead of a deserialization rejection.
pub struct RegisterInput {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub senha: Option<String>,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: ProfessorRepository,
{
    repo: Arc<R>,
}

impl<R> RegisterUseCase<R>
where
    R: ProfessorRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<()> {
        let (nome, email, senha) = match (input.nome, input.email, input.senha) {
            (Some(nome), Some(email), Some(senha))
                if !nome.is_empty() && !email.is_empty() && !senha.is_empty() =>
            {
                (nome, email, senha)
            }
            _ => return Err(AuthError::MissingFields),
        };

        let senha = ClearTextPassword::new(senha).map_err(|_| AuthError::MissingFields)?;
        let senha_hash =
            password::hash_password(&senha).map_err(|e| AuthError::Internal(e.to_string()))?;

        let professor = NewProfessor {
            nome,
            email,
            senha_hash,
        };

        self.repo.create(&professor).await?;

        tracing::info!(nome = %professor.nome, "Professor registered");

        Ok(())
    }
}
