//! Booking Entity ("agendamento")
//!
//! A reservation of one space for one lesson slot on one date. There is
//! no lifecycle: `estado` only ever holds `"indisponivel"`, so a booking
//! effectively either exists or does not.

use chrono::NaiveDate;
use serde::Serialize;

/// The single `estado` value this system writes.
pub const ESTADO_INDISPONIVEL: &str = "indisponivel";

/// A booking to be inserted. The creator id comes from the request body,
/// not from a token (preserved legacy asymmetry).
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub professor_id: i32,
    pub espaco_id: i32,
    pub data: NaiveDate,
    pub numero_aula: i32,
}

/// A persisted booking, as returned by the insert.
#[derive(Debug, Clone, Serialize)]
pub struct Booking {
    pub id: i32,
    pub professor_id: i32,
    pub espaco_id: i32,
    pub data: NaiveDate,
    pub numero_aula: i32,
    pub estado: String,
}

/// A booking joined with display names for the listing, date already
/// formatted `DD/MM/YYYY`.
#[derive(Debug, Clone, Serialize)]
pub struct BookingView {
    pub id: i32,
    pub professor_id: i32,
    /// Professor display name
    pub professor: String,
    /// Space display name
    pub laboratorio: String,
    pub data: String,
    pub numero_aula: i32,
    pub estado: String,
}
