//! Listing Use Cases
//!
//! Read-only views: all bookings (joined with display names) and the
//! space catalog. Neither is identity-gated.

use std::sync::Arc;

use crate::domain::booking::BookingView;
use crate::domain::repository::{BookingRepository, SpaceRepository};
use crate::domain::space::Space;
use crate::error::AgendaResult;

/// List bookings use case
pub struct ListBookingsUseCase<R>
where
    R: BookingRepository,
{
    repo: Arc<R>,
}

impl<R> ListBookingsUseCase<R>
where
    R: BookingRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> AgendaResult<Vec<BookingView>> {
        self.repo.list_detailed().await
    }
}

/// List spaces use case
pub struct ListSpacesUseCase<R>
where
    R: SpaceRepository,
{
    repo: Arc<R>,
}

impl<R> ListSpacesUseCase<R>
where
    R: SpaceRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> AgendaResult<Vec<Space>> {
        self.repo.list().await
    }
}
