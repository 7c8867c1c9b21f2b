// Booking window: which dates guests may ask about

use crate::error::{AppError, Result};
use crate::port::TimeProvider;
use chrono::{Days, NaiveDate};
use std::sync::Arc;

/// Accepts dates from today (restaurant local) up to `horizon_days` ahead, inclusive
pub struct BookingWindow {
    time_provider: Arc<dyn TimeProvider>,
    horizon_days: u32,
}

impl BookingWindow {
    pub fn new(time_provider: Arc<dyn TimeProvider>, horizon_days: u32) -> Self {
        Self {
            time_provider,
            horizon_days,
        }
    }

    /// Last bookable date
    pub fn last_date(&self) -> NaiveDate {
        let today = self.time_provider.today();
        today
            .checked_add_days(Days::new(self.horizon_days as u64))
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn validate(&self, date: NaiveDate) -> Result<()> {
        let today = self.time_provider.today();
        if date < today {
            return Err(AppError::Validation(format!(
                "Date {} must be today ({}) or in the future",
                date, today
            )));
        }
        if date > self.last_date() {
            return Err(AppError::Validation(format!(
                "Reservations can only be made up to {} days in advance",
                self.horizon_days
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::time_provider::FixedTimeProvider;

    fn window() -> BookingWindow {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        BookingWindow::new(Arc::new(FixedTimeProvider(today)), 60)
    }

    #[test]
    fn test_today_and_horizon_are_inclusive() {
        let window = window();
        assert!(window.validate(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()).is_ok());
        assert!(window.validate(NaiveDate::from_ymd_opt(2024, 7, 31).unwrap()).is_ok());
        assert_eq!(
            window.last_date(),
            NaiveDate::from_ymd_opt(2024, 7, 31).unwrap()
        );
    }

    #[test]
    fn test_past_date_rejected() {
        let err = window()
            .validate(NaiveDate::from_ymd_opt(2024, 5, 31).unwrap())
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(err.to_string().contains("future"));
    }

    #[test]
    fn test_beyond_horizon_rejected() {
        let err = window()
            .validate(NaiveDate::from_ymd_opt(2024, 8, 1).unwrap())
            .unwrap_err();
        assert!(err.to_string().contains("60 days"));
    }
}
