//! Agenda Routers
//!
//! Route-level authorization mirrors the legacy API exactly: listing
//! and creation (single and batch) are open; only deletion requires a
//! bearer token.

use axum::routing::{delete, get, post};
use axum::{Router, middleware};
use std::sync::Arc;

use auth::{AuthConfig, require_bearer};

use crate::domain::repository::{BookingRepository, SpaceRepository};
use crate::infra::postgres::PgAgendaRepository;
use crate::presentation::handlers::{self, AgendaAppState};

/// Create the /agendamentos router with the PostgreSQL repository
pub fn agendamentos_router(repo: PgAgendaRepository, config: Arc<AuthConfig>) -> Router {
    agendamentos_router_generic(repo, config)
}

/// Create a generic /agendamentos router for any repository implementation
pub fn agendamentos_router_generic<R>(repo: R, config: Arc<AuthConfig>) -> Router
where
    R: BookingRepository + SpaceRepository + Clone + Send + Sync + 'static,
{
    let state = AgendaAppState {
        repo: Arc::new(repo),
    };

    let open = Router::new()
        .route("/", get(handlers::list::<R>).post(handlers::create::<R>))
        .route("/multiplas", post(handlers::create_many::<R>))
        .with_state(state.clone());

    let protected = Router::new()
        .route("/{id}", delete(handlers::remove::<R>))
        .route_layer(middleware::from_fn(
            move |req: axum::extract::Request, next: middleware::Next| {
                require_bearer(config.clone(), req, next)
            },
        ))
        .with_state(state);

    open.merge(protected)
}

/// Create the /espacos router with the PostgreSQL repository
pub fn espacos_router(repo: PgAgendaRepository) -> Router {
    espacos_router_generic(repo)
}

/// Create a generic /espacos router for any repository implementation
pub fn espacos_router_generic<R>(repo: R) -> Router
where
    R: BookingRepository + SpaceRepository + Clone + Send + Sync + 'static,
{
    let state = AgendaAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/", get(handlers::list_spaces::<R>))
        .with_state(state)
}
