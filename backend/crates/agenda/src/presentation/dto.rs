//! API DTOs (Data Transfer Objects)
//!
//! Field names are the legacy wire contract; serde names stay in
//! Portuguese. Dates arrive as `YYYY-MM-DD` and leave the listing as
//! `DD/MM/YYYY` (formatted in SQL).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::booking::Booking;

// ============================================================================
// Create
// ============================================================================

/// Single-slot create request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBookingRequest {
    pub professor_id: Option<i32>,
    pub espaco_id: Option<i32>,
    pub data: Option<NaiveDate>,
    pub numero_aula: Option<i32>,
}

/// Single-slot create response
#[derive(Debug, Clone, Serialize)]
pub struct CreateBookingResponse {
    pub mensagem: &'static str,
    pub agendamento: Booking,
}

// ============================================================================
// Batch create
// ============================================================================

/// Batch create request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateManyRequest {
    pub professor_id: Option<i32>,
    pub espaco_id: Option<i32>,
    pub data: Option<NaiveDate>,
    pub aulas: Option<Vec<i32>>,
}

/// Batch create response (207 Multi-Status)
#[derive(Debug, Clone, Serialize)]
pub struct CreateManyResponse {
    pub mensagem: &'static str,
    pub inseridos: Vec<Booking>,
    pub erros: Vec<String>,
}

// ============================================================================
// Delete
// ============================================================================

/// Success-message response
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub mensagem: &'static str,
}
