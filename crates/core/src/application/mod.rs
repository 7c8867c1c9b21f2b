// Application Layer - Use Cases and Business Logic

pub mod availability;
pub mod booking_window;
pub mod capacity;
pub mod date_locks;
pub mod reservation;
pub mod slots;

// Re-exports
pub use availability::{AvailabilityChecker, DaySnapshot};
pub use booking_window::BookingWindow;
pub use capacity::Availability;
pub use date_locks::DateLocks;
pub use reservation::ReservationService;
pub use slots::SlotEnumerator;
