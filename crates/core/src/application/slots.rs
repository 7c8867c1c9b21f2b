// Slot Enumerator

use crate::application::availability::{ensure_party_size, AvailabilityChecker};
use crate::domain::TimeOfDay;
use crate::error::Result;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::info;

/// Lists the bookable canonical slots of a day for a party size
pub struct SlotEnumerator {
    checker: Arc<AvailabilityChecker>,
}

impl SlotEnumerator {
    pub fn new(checker: Arc<AvailabilityChecker>) -> Self {
        Self { checker }
    }

    /// Available slots in ascending order.
    ///
    /// Storage is read once; every canonical slot is then checked against that
    /// same snapshot, so the result is consistent within a call.
    pub async fn available_times(&self, date: NaiveDate, guests: u32) -> Result<Vec<TimeOfDay>> {
        ensure_party_size(guests)?;

        let snapshot = self.checker.snapshot(date, None).await?;
        let candidates = self.checker.config().time_slots();
        let total = candidates.len();

        let times: Vec<TimeOfDay> = candidates
            .into_iter()
            .filter(|&slot| self.checker.evaluate(&snapshot, slot, guests).is_available())
            .collect();

        info!(
            date = %date,
            guests,
            available = times.len(),
            total,
            "Enumerated available times"
        );

        Ok(times)
    }
}
