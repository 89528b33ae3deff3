//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};
use crate::domain::repository::ProfessorRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{LoginRequest, LoginResponse, RegisterRequest};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: ProfessorRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: ProfessorRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone());

    let input = RegisterInput {
        nome: req.nome,
        email: req.email,
        senha: req.senha,
    };

    use_case.execute(input).await?;

    Ok((StatusCode::CREATED, "Professor criado"))
}

// ============================================================================
// Login
// ============================================================================

/// POST /auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<LoginResponse>>
where
    R: ProfessorRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let input = LoginInput {
        email: req.email,
        senha: req.senha,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(LoginResponse {
        token: output.token,
        nome: output.nome,
        id: output.id,
    }))
}
