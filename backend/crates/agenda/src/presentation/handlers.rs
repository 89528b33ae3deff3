//! HTTP Handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use std::sync::Arc;

use auth::CallerIdentity;

use crate::application::{
    CreateBookingInput, CreateBookingUseCase, CreateManyInput, CreateManyUseCase,
    DeleteBookingUseCase, ListBookingsUseCase, ListSpacesUseCase,
};
use crate::domain::booking::BookingView;
use crate::domain::repository::{BookingRepository, SpaceRepository};
use crate::domain::space::Space;
use crate::error::AgendaResult;
use crate::presentation::dto::{
    CreateBookingRequest, CreateBookingResponse, CreateManyRequest, CreateManyResponse,
    MessageResponse,
};

/// Shared state for agenda handlers
#[derive(Clone)]
pub struct AgendaAppState<R>
where
    R: BookingRepository + SpaceRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Create (single slot)
// ============================================================================

/// POST /agendamentos
///
/// The creator id is taken from the body, not from a token; the route
/// is not identity-gated (preserved legacy behavior).
pub async fn create<R>(
    State(state): State<AgendaAppState<R>>,
    Json(req): Json<CreateBookingRequest>,
) -> AgendaResult<impl IntoResponse>
where
    R: BookingRepository + SpaceRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateBookingUseCase::new(state.repo.clone());

    let input = CreateBookingInput {
        professor_id: req.professor_id,
        espaco_id: req.espaco_id,
        data: req.data,
        numero_aula: req.numero_aula,
    };

    let created = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateBookingResponse {
            mensagem: "Agendamento criado com sucesso.",
            agendamento: created,
        }),
    ))
}

// ============================================================================
// Create (batch)
// ============================================================================

/// POST /agendamentos/multiplas
pub async fn create_many<R>(
    State(state): State<AgendaAppState<R>>,
    Json(req): Json<CreateManyRequest>,
) -> AgendaResult<impl IntoResponse>
where
    R: BookingRepository + SpaceRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateManyUseCase::new(state.repo.clone());

    let input = CreateManyInput {
        professor_id: req.professor_id,
        espaco_id: req.espaco_id,
        data: req.data,
        aulas: req.aulas,
    };

    let outcome = use_case.execute(input).await?;

    Ok((
        StatusCode::MULTI_STATUS,
        Json(CreateManyResponse {
            mensagem: "Processo finalizado",
            inseridos: outcome.inseridos,
            erros: outcome.erros,
        }),
    ))
}

// ============================================================================
// Delete
// ============================================================================

/// DELETE /agendamentos/{id}
///
/// Bearer-gated; the caller identity comes from the token via
/// [`CallerIdentity`], never from the body.
pub async fn remove<R>(
    State(state): State<AgendaAppState<R>>,
    Extension(caller): Extension<CallerIdentity>,
    Path(id): Path<i32>,
) -> AgendaResult<Json<MessageResponse>>
where
    R: BookingRepository + SpaceRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteBookingUseCase::new(state.repo.clone());

    use_case.execute(id, caller.professor_id).await?;

    Ok(Json(MessageResponse {
        mensagem: "Agendamento removido com sucesso.",
    }))
}

// ============================================================================
// List
// ============================================================================

/// GET /agendamentos
pub async fn list<R>(
    State(state): State<AgendaAppState<R>>,
) -> AgendaResult<Json<Vec<BookingView>>>
where
    R: BookingRepository + SpaceRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListBookingsUseCase::new(state.repo.clone());
    Ok(Json(use_case.execute().await?))
}

/// GET /espacos
pub async fn list_spaces<R>(
    State(state): State<AgendaAppState<R>>,
) -> AgendaResult<Json<Vec<Space>>>
where
    R: BookingRepository + SpaceRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListSpacesUseCase::new(state.repo.clone());
    Ok(Json(use_case.execute().await?))
}
