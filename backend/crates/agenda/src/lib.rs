//! Agenda (Booking Ledger) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Booking/space entities and repository traits
//! - `application/` - Use cases (create, batch create, delete, list)
//! - `infra/` - PostgreSQL implementation
//! - `presentation/` - HTTP handlers, DTOs, routers
//!
//! ## Core invariant
//! At most one booking per `(espaco, data, numero_aula)`, enforced by a
//! database unique constraint. The row-insert atomicity of that
//! constraint is the only concurrency guarantee in the system; the
//! application layer never locks.
//!
//! ## Authorization model (deliberately asymmetric, see DESIGN.md)
//! - Creation and listing are open; the creator id comes from the body.
//! - Deletion requires a bearer token and only the owner may delete.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use error::{AgendaError, AgendaResult};
pub use infra::postgres::PgAgendaRepository;
pub use presentation::router::{agendamentos_router, espacos_router};
