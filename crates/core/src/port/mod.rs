// Port Layer - Interfaces for external dependencies

pub mod reservation_repository;
pub mod table_repository;
pub mod time_provider;

// Re-exports
pub use reservation_repository::ReservationRepository;
pub use table_repository::TableRepository;
pub use time_provider::TimeProvider;
