// In-memory Infrastructure Layer
//
// Process-local storage for tests and the `storage = "memory"` daemon mode.
// Nothing survives a restart.

mod reservation_repository;
mod table_repository;

pub use reservation_repository::InMemoryReservationRepository;
pub use table_repository::InMemoryTableRepository;
