// Availability Checker
//
// Decides whether a party can be seated at (date, time) given the table
// inventory and the reservations already on the books.

use crate::application::capacity::Availability;
use crate::domain::{DomainError, EngineConfig, Reservation, ReservationId, Table, TimeOfDay};
use crate::error::Result;
use crate::port::{ReservationRepository, TableRepository};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::debug;

/// Tables and reservations for one date, read once and evaluated many times
#[derive(Debug, Clone)]
pub struct DaySnapshot {
    pub date: NaiveDate,
    pub tables: Vec<Table>,
    pub reservations: Vec<Reservation>,
}

impl DaySnapshot {
    /// Reservations on this date within `window_minutes` of `time`
    pub fn contenders(&self, time: TimeOfDay, window_minutes: u16) -> Vec<Reservation> {
        self.reservations
            .iter()
            .filter(|r| r.contends_with(self.date, time, window_minutes))
            .cloned()
            .collect()
    }
}

pub struct AvailabilityChecker {
    tables: Arc<dyn TableRepository>,
    reservations: Arc<dyn ReservationRepository>,
    config: EngineConfig,
}

impl AvailabilityChecker {
    pub fn new(
        tables: Arc<dyn TableRepository>,
        reservations: Arc<dyn ReservationRepository>,
        config: EngineConfig,
    ) -> Self {
        Self {
            tables,
            reservations,
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read the inventory and the date's reservations (minus `exclude`)
    pub async fn snapshot(
        &self,
        date: NaiveDate,
        exclude: Option<ReservationId>,
    ) -> Result<DaySnapshot> {
        let tables = self.tables.list_tables().await?;
        let reservations = self.reservations.list_by_date(date, exclude).await?;

        Ok(DaySnapshot {
            date,
            tables,
            reservations,
        })
    }

    /// Pure evaluation against an already loaded snapshot
    pub fn evaluate(&self, snapshot: &DaySnapshot, time: TimeOfDay, guests: u32) -> Availability {
        let contenders = snapshot.contenders(time, self.config.overlap_minutes);
        let verdict = self
            .config
            .capacity_model
            .assess(&snapshot.tables, &contenders, guests);

        debug!(
            date = %snapshot.date,
            time = %time,
            guests,
            contenders = contenders.len(),
            verdict = ?verdict,
            "Evaluated slot"
        );

        verdict
    }

    /// Full verdict for one slot
    pub async fn check(
        &self,
        date: NaiveDate,
        time: TimeOfDay,
        guests: u32,
        exclude: Option<ReservationId>,
    ) -> Result<Availability> {
        ensure_party_size(guests)?;

        let snapshot = self.snapshot(date, exclude).await?;
        Ok(self.evaluate(&snapshot, time, guests))
    }

    /// `true` iff a table is free for the party at (date, time)
    pub async fn is_available(
        &self,
        date: NaiveDate,
        time: TimeOfDay,
        guests: u32,
        exclude: Option<ReservationId>,
    ) -> Result<bool> {
        Ok(self.check(date, time, guests, exclude).await?.is_available())
    }
}

pub(crate) fn ensure_party_size(guests: u32) -> Result<()> {
    if guests == 0 {
        return Err(DomainError::InvalidPartySize(guests).into());
    }
    Ok(())
}
