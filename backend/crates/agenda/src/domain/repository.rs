//! Repository Traits
//!
//! Interfaces for booking and space persistence. Implementations live
//! in the infrastructure layer.

use crate::domain::booking::{Booking, BookingView, NewBooking};
use crate::domain::space::Space;
use crate::error::AgendaResult;

/// Booking repository
#[trait_variant::make(BookingRepository: Send)]
pub trait LocalBookingRepository {
    /// Insert a booking with `estado = 'indisponivel'`. A slot conflict
    /// surfaces as `AgendaError::SlotTaken`; the insert itself is the
    /// conflict check (unique constraint, atomic at the row level).
    async fn insert(&self, booking: &NewBooking) -> AgendaResult<Booking>;

    /// Owner of a booking, `None` if it does not exist.
    async fn find_owner(&self, id: i32) -> AgendaResult<Option<i32>>;

    /// Delete conditioned on both id and owner, returning affected rows.
    /// The condition, not the preceding read, is what prevents a
    /// check-then-act race on ownership.
    async fn delete_owned(&self, id: i32, professor_id: i32) -> AgendaResult<u64>;

    /// All bookings joined with display names, ordered by date then slot.
    async fn list_detailed(&self) -> AgendaResult<Vec<BookingView>>;
}

/// Space catalog repository
#[trait_variant::make(SpaceRepository: Send)]
pub trait LocalSpaceRepository {
    /// All spaces ordered by name.
    async fn list(&self) -> AgendaResult<Vec<Space>>;
}
