//! Agenda Error Types
//!
//! Booking-specific error variants integrating with the unified
//! `kernel::error::AppError` system. Display strings are the exact
//! user-facing messages of the legacy API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Agenda-specific result type alias
pub type AgendaResult<T> = Result<T, AgendaError>;

/// Agenda-specific error variants
#[derive(Debug, Error)]
pub enum AgendaError {
    /// Request body missing a required field (or empty slot list)
    #[error("Dados incompletos.")]
    MissingFields,

    /// Unique constraint hit: the space/date/slot is already booked
    #[error("Este laboratório já está ocupado nesse dia e horário.")]
    SlotTaken,

    /// `estado` check constraint violated. Unreachable while the insert
    /// writes the fixed literal; kept so a schema drift fails loudly.
    #[error("O estado do agendamento não é válido.")]
    InvalidStatus,

    /// No booking with the given id
    #[error("Agendamento não encontrado.")]
    NotFound,

    /// Caller is authenticated but does not own the booking
    #[error("Ação não permitida. Você só pode excluir seus próprios agendamentos.")]
    NotOwner,

    /// The conditioned delete affected zero rows: the booking vanished
    /// (or changed owner) between the ownership check and the delete.
    /// Treated as not-found, not as a distinct race error.
    #[error("Agendamento não encontrado ou não pertence a você.")]
    Vanished,

    /// Database error
    #[error("Erro no servidor.")]
    Database(#[source] sqlx::Error),
}

impl AgendaError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // The legacy wire maps the slot conflict to 400, not 409.
            AgendaError::MissingFields | AgendaError::SlotTaken | AgendaError::InvalidStatus => {
                StatusCode::BAD_REQUEST
            }
            AgendaError::NotFound | AgendaError::Vanished => StatusCode::NOT_FOUND,
            AgendaError::NotOwner => StatusCode::FORBIDDEN,
            AgendaError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AgendaError::MissingFields | AgendaError::SlotTaken | AgendaError::InvalidStatus => {
                ErrorKind::BadRequest
            }
            AgendaError::NotFound | AgendaError::Vanished => ErrorKind::NotFound,
            AgendaError::NotOwner => ErrorKind::Forbidden,
            AgendaError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AgendaError::Database(e) => {
                tracing::error!(error = %e, "Agenda database error");
            }
            AgendaError::NotOwner => {
                tracing::warn!("Delete attempt on another professor's booking");
            }
            _ => {
                tracing::debug!(error = %self, "Agenda error");
            }
        }
    }
}

impl IntoResponse for AgendaError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<sqlx::Error> for AgendaError {
    fn from(err: sqlx::Error) -> Self {
        // Constraint violations on agendamentos are domain conditions.
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.code().as_deref() {
                Some("23505") => return AgendaError::SlotTaken,
                Some("23514") => return AgendaError::InvalidStatus,
                _ => {}
            }
        }
        AgendaError::Database(err)
    }
}
