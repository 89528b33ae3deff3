//! Error conversions
//!
//! Conversions from infrastructure error types into [`AppError`], plus the
//! HTTP response encoding. The wire shape is `{"erro": "<mensagem>"}`, the
//! legacy contract the frontend consumes. Internal detail stays in the logs.

#[allow(unused_imports)]
use super::app_error::AppError;

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => {
                AppError::not_found("Registro não encontrado.").with_source(err)
            }
            sqlx::Error::PoolTimedOut => {
                AppError::service_unavailable("Banco de dados indisponível.").with_source(err)
            }
            sqlx::Error::Database(db_err) => {
                // PostgreSQL error codes, class 23 (integrity constraint violation)
                // https://www.postgresql.org/docs/current/errcodes-appendix.html
                let app_err = match db_err.code().as_deref() {
                    Some("23502") => AppError::bad_request("Campo obrigatório ausente."),
                    Some("23503") => AppError::conflict("Referência inválida."),
                    Some("23505") => AppError::conflict("Registro duplicado."),
                    Some("23514") => AppError::bad_request("Valor não permitido."),
                    _ => AppError::internal("Erro no servidor."),
                };
                app_err.with_source(err)
            }
            sqlx::Error::Io(_) => {
                AppError::service_unavailable("Banco de dados indisponível.").with_source(err)
            }
            _ => AppError::internal("Erro no servidor.").with_source(err),
        }
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = serde_json::json!({ "erro": self.message() });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    #[cfg(feature = "sqlx")]
    #[test]
    fn test_row_not_found_conversion() {
        use super::AppError;
        use crate::error::kind::ErrorKind;

        let app_err: AppError = sqlx::Error::RowNotFound.into();
        assert_eq!(app_err.kind(), ErrorKind::NotFound);
    }
}
