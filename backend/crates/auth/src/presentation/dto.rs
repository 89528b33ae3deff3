//! API DTOs (Data Transfer Objects)
//!
//! Field names are the wire contract of the legacy API; serde names
//! stay in Portuguese.

use serde::{Deserialize, Serialize};

// ============================================================================
// Register
// ============================================================================

/// Register request. All fields optional so the use case can answer
/// 400 "Dados incompletos." instead of an extractor rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub senha: Option<String>,
}

// ============================================================================
// Login
// ============================================================================

/// Login request. Optional fields for the same reason as
/// [`RegisterRequest`]: absence is judged by the use case, which
/// answers with the usual credentials error instead of an extractor
/// rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub senha: Option<String>,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub nome: String,
    pub id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_tolerates_missing_fields() {
        let req: RegisterRequest = serde_json::from_str(r#"{"nome": "Ana"}"#).unwrap();
        assert_eq!(req.nome.as_deref(), Some("Ana"));
        assert!(req.email.is_none());
        assert!(req.senha.is_none());
    }

    #[test]
    fn test_login_request_tolerates_missing_fields() {
        let req: LoginRequest = serde_json::from_str(r#"{"email": "ana@escola.br"}"#).unwrap();
        assert_eq!(req.email.as_deref(), Some("ana@escola.br"));
        assert!(req.senha.is_none());
    }

    #[test]
    fn test_login_response_shape() {
        let resp = LoginResponse {
            token: "t".to_string(),
            nome: "Ana".to_string(),
            id: 3,
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["token"], "t");
        assert_eq!(json["nome"], "Ana");
        assert_eq!(json["id"], 3);
    }
}
