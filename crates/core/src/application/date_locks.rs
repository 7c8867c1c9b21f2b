// Per-date write serialization for check-then-insert

use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Registry of one async mutex per calendar date.
///
/// Holding the guard for a date while checking and writing makes the
/// sequence atomic with respect to other writers in this process.
#[derive(Default)]
pub struct DateLocks {
    locks: Mutex<HashMap<NaiveDate, Arc<Mutex<()>>>>,
}

impl DateLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lock(&self, date: NaiveDate) -> OwnedMutexGuard<()> {
        let entry = {
            let mut locks = self.locks.lock().await;
            // Drop entries nobody holds or waits on
            locks.retain(|_, m| Arc::strong_count(m) > 1);
            Arc::clone(locks.entry(date).or_default())
        };
        entry.lock_owned().await
    }

    /// Lock several dates in ascending order (no lock-order inversion)
    pub async fn lock_all(&self, dates: &[NaiveDate]) -> Vec<OwnedMutexGuard<()>> {
        let mut ordered = dates.to_vec();
        ordered.sort_unstable();
        ordered.dedup();

        let mut guards = Vec::with_capacity(ordered.len());
        for date in ordered {
            guards.push(self.lock(date).await);
        }
        guards
    }

    #[cfg(test)]
    async fn tracked(&self) -> usize {
        self.locks.lock().await.len()
    }
}
