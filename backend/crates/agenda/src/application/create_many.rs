//! Batch Create Use Case
//!
//! Best-effort batch: each slot is inserted independently and
//! sequentially; a per-slot conflict is collected as data, not raised,
//! and prior successes stay committed. The batch as a whole only fails
//! for missing top-level fields.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::booking::{Booking, NewBooking};
use crate::domain::repository::BookingRepository;
use crate::error::{AgendaError, AgendaResult};

/// Batch input.
pub struct CreateManyInput {
    pub professor_id: Option<i32>,
    pub espaco_id: Option<i32>,
    pub data: Option<NaiveDate>,
    pub aulas: Option<Vec<i32>>,
}

/// Aggregate batch result: inserted records plus per-slot error
/// messages. Never a hard failure once validation passed.
pub struct BatchOutcome {
    pub inseridos: Vec<Booking>,
    pub erros: Vec<String>,
}

/// Batch create use case
pub struct CreateManyUseCase<R>
where
    R: BookingRepository,
{
    repo: Arc<R>,
}

impl<R> CreateManyUseCase<R>
where
    R: BookingRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreateManyInput) -> AgendaResult<BatchOutcome> {
        let (professor_id, espaco_id, data, aulas) = match (
            input.professor_id,
            input.espaco_id,
            input.data,
            input.aulas,
        ) {
            (Some(professor_id), Some(espaco_id), Some(data), Some(aulas)) if !aulas.is_empty() => {
                (professor_id, espaco_id, data, aulas)
            }
            _ => return Err(AgendaError::MissingFields),
        };

        let mut inseridos = Vec::new();
        let mut erros = Vec::new();

        for numero_aula in aulas {
            let booking = NewBooking {
                professor_id,
                espaco_id,
                data,
                numero_aula,
            };

            match self.repo.insert(&booking).await {
                Ok(created) => inseridos.push(created),
                Err(AgendaError::SlotTaken) => {
                    erros.push(format!("Conflito na aula {numero_aula}"));
                }
                Err(e) => {
                    tracing::warn!(error = %e, numero_aula, "Batch slot insert failed");
                    erros.push(format!("Erro desconhecido na aula {numero_aula}"));
                }
            }
        }

        tracing::info!(
            inserted = inseridos.len(),
            failed = erros.len(),
            "Batch booking completed"
        );

        Ok(BatchOutcome { inseridos, erros })
    }
}
