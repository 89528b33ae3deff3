//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. Display strings are the exact
//! user-facing messages the API has always returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Registration body missing one of nome/email/senha
    #[error("Dados incompletos.")]
    MissingFields,

    /// Email already registered (unique constraint)
    #[error("E-mail já cadastrado.")]
    EmailTaken,

    /// Unknown email or wrong password - deliberately the same message
    #[error("Credenciais inválidas.")]
    InvalidCredentials,

    /// No Authorization header on a protected route
    #[error("Acesso negado. Token não fornecido.")]
    TokenMissing,

    /// Authorization header without a Bearer token segment
    #[error("Token mal formatado.")]
    TokenMalformed,

    /// Bad signature or expired token
    #[error("Token inválido ou expirado.")]
    TokenInvalid,

    /// Database error
    #[error("Erro no servidor.")]
    Database(#[source] sqlx::Error),

    /// Internal error (hashing, signing)
    #[error("Erro no servidor.")]
    Internal(String),
}

impl AuthError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // The legacy wire maps the duplicate-email conflict to 400.
            AuthError::MissingFields | AuthError::EmailTaken => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials
            | AuthError::TokenMissing
            | AuthError::TokenMalformed
            | AuthError::TokenInvalid => StatusCode::UNAUTHORIZED,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingFields | AuthError::EmailTaken => ErrorKind::BadRequest,
            AuthError::InvalidCredentials
            | AuthError::TokenMissing
            | AuthError::TokenMalformed
            | AuthError::TokenInvalid => ErrorKind::Unauthorized,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<sqlx::Error> for AuthError {
    fn from(err: sqlx::Error) -> Self {
        // Unique violation on professores.email is a domain condition,
        // everything else is a server failure.
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some("23505") {
                return AuthError::EmailTaken;
            }
        }
        AuthError::Database(err)
    }
}
