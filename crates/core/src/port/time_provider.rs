// Time Provider Port (for testability)

use chrono::NaiveDate;

/// Source of the restaurant's current local date
pub trait TimeProvider: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local system clock (production)
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Pinned date (tests, replays)
pub struct FixedTimeProvider(pub NaiveDate);

impl TimeProvider for FixedTimeProvider {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
