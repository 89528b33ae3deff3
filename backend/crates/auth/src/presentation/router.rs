//! Auth Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::ProfessorRepository;
use crate::infra::postgres::PgProfessorRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with the PostgreSQL repository
pub fn auth_router(repo: PgProfessorRepository, config: Arc<AuthConfig>) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: Arc<AuthConfig>) -> Router
where
    R: ProfessorRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config,
    };

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .with_state(state)
}
