// Tablebook Infrastructure - SQLite Adapter
// Implements: TableRepository, ReservationRepository

mod connection;
mod error;
mod migration;
mod reservation_repository;
mod table_repository;

pub use connection::create_pool;
pub use migration::run_migrations;
pub use reservation_repository::SqliteReservationRepository;
pub use table_repository::SqliteTableRepository;

// Note: sqlx::Error conversion is handled by a helper function
// due to Rust's orphan rules (cannot implement From<sqlx::Error> for AppError here)
