// Domain Layer - Pure business logic and entities

pub mod config;
pub mod error;
pub mod reservation;
pub mod table;
pub mod time;

// Re-exports
pub use config::{CapacityModel, ConcurrencyMode, EngineConfig};
pub use error::DomainError;
pub use reservation::{Reservation, ReservationId, ReservationRequest, UserId};
pub use table::{NewTable, Table, TableId};
pub use time::TimeOfDay;
