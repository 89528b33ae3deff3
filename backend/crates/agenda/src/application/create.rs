//! Create Booking Use Case
//!
//! Single-slot reservation. Conflict detection is entirely the unique
//! constraint on `(espaco_id, data, numero_aula)`; this layer only
//! validates presence and translates the outcome.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::booking::{Booking, NewBooking};
use crate::domain::repository::BookingRepository;
use crate::error::{AgendaError, AgendaResult};

/// Create input. Fields arrive optional from the wire; presence is
/// validated here so the API answers 400 "Dados incompletos.".
pub struct CreateBookingInput {
    pub professor_id: Option<i32>,
    pub espaco_id: Option<i32>,
    pub data: Option<NaiveDate>,
    pub numero_aula: Option<i32>,
}

/// Create booking use case
pub struct CreateBookingUseCase<R>
where
    R: BookingRepository,
{
    repo: Arc<R>,
}

impl<R> CreateBookingUseCase<R>
where
    R: BookingRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreateBookingInput) -> AgendaResult<Booking> {
        let booking = match (
            input.professor_id,
            input.espaco_id,
            input.data,
            input.numero_aula,
        ) {
            (Some(professor_id), Some(espaco_id), Some(data), Some(numero_aula)) => NewBooking {
                professor_id,
                espaco_id,
                data,
                numero_aula,
            },
            _ => return Err(AgendaError::MissingFields),
        };

        let created = self.repo.insert(&booking).await?;

        tracing::info!(
            booking_id = created.id,
            espaco_id = created.espaco_id,
            numero_aula = created.numero_aula,
            "Booking created"
        );

        Ok(created)
    }
}
