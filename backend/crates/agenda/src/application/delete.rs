//! Delete Booking Use Case
//!
//! Ownership-checked deletion. The preceding read only selects the
//! status code (404 vs 403); the conditioned delete is what actually
//! guards against an ownership change between check and delete.

use std::sync::Arc;

use crate::domain::repository::BookingRepository;
use crate::error::{AgendaError, AgendaResult};

/// Delete booking use case
pub struct DeleteBookingUseCase<R>
where
    R: BookingRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteBookingUseCase<R>
where
    R: BookingRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// `caller_id` is the token-derived identity, never a body field.
    pub async fn execute(&self, booking_id: i32, caller_id: i32) -> AgendaResult<()> {
        let owner_id = self
            .repo
            .find_owner(booking_id)
            .await?
            .ok_or(AgendaError::NotFound)?;

        if owner_id != caller_id {
            return Err(AgendaError::NotOwner);
        }

        let affected = self.repo.delete_owned(booking_id, caller_id).await?;
        if affected == 0 {
            // Raced with another delete; report as not-found.
            return Err(AgendaError::Vanished);
        }

        tracing::info!(booking_id, professor_id = caller_id, "Booking deleted");

        Ok(())
    }
}
