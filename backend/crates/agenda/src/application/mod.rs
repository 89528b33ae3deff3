pub mod create;
pub mod create_many;
pub mod delete;
pub mod list;

pub use create::{CreateBookingInput, CreateBookingUseCase};
pub use create_many::{BatchOutcome, CreateManyInput, CreateManyUseCase};
pub use delete::DeleteBookingUseCase;
pub use list::{ListBookingsUseCase, ListSpacesUseCase};
