// Engine configuration (restaurant hours, windows, limits)

use crate::domain::error::{DomainError, Result};
use crate::domain::TimeOfDay;
use serde::{Deserialize, Serialize};

/// First bookable hour (17:00)
pub const DEFAULT_OPENING_HOUR: u8 = 17;

/// Hour at which slots stop (22:00, exclusive)
pub const DEFAULT_CLOSING_HOUR: u8 = 22;

/// Slot granularity (30 minutes)
pub const DEFAULT_SLOT_MINUTES: u16 = 30;

/// Two bookings closer than this share a table (90 minutes)
pub const DEFAULT_OVERLAP_MINUTES: u16 = 90;

/// Largest party accepted for online booking
pub const DEFAULT_MAX_PARTY_SIZE: u32 = 12;

/// How far ahead a date may be requested (days)
pub const DEFAULT_BOOKING_HORIZON_DAYS: u32 = 60;

/// How contending reservations are weighed against eligible tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacityModel {
    /// One contending reservation consumes one eligible table, regardless of size
    #[default]
    Headcount,
    /// Contending reservations and the new party must fit distinct tables
    TableMatching,
}

/// Guarding of the check-then-write sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConcurrencyMode {
    /// Check and insert are separate steps; simultaneous requests may overbook
    #[default]
    Unguarded,
    /// Writes touching the same date are serialized in-process
    PerDateLock,
}

/// Engine configuration, passed at construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub opening_hour: u8,
    pub closing_hour: u8,
    pub slot_minutes: u16,
    pub overlap_minutes: u16,
    pub max_party_size: u32,
    pub booking_horizon_days: u32,
    pub capacity_model: CapacityModel,
    pub concurrency: ConcurrencyMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            opening_hour: DEFAULT_OPENING_HOUR,
            closing_hour: DEFAULT_CLOSING_HOUR,
            slot_minutes: DEFAULT_SLOT_MINUTES,
            overlap_minutes: DEFAULT_OVERLAP_MINUTES,
            max_party_size: DEFAULT_MAX_PARTY_SIZE,
            booking_horizon_days: DEFAULT_BOOKING_HORIZON_DAYS,
            capacity_model: CapacityModel::default(),
            concurrency: ConcurrencyMode::default(),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.closing_hour > 24 {
            return Err(DomainError::InvalidConfig(format!(
                "closing_hour {} is past midnight",
                self.closing_hour
            )));
        }
        if self.opening_hour >= self.closing_hour {
            return Err(DomainError::InvalidConfig(format!(
                "opening_hour {} must be before closing_hour {}",
                self.opening_hour, self.closing_hour
            )));
        }
        if self.slot_minutes == 0 {
            return Err(DomainError::InvalidConfig(
                "slot_minutes must be positive".to_string(),
            ));
        }
        if self.overlap_minutes == 0 {
            return Err(DomainError::InvalidConfig(
                "overlap_minutes must be positive".to_string(),
            ));
        }
        if self.max_party_size == 0 {
            return Err(DomainError::InvalidConfig(
                "max_party_size must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Canonical slots from opening (inclusive) to closing (exclusive)
    pub fn time_slots(&self) -> Vec<TimeOfDay> {
        let start = self.opening_hour as u16 * 60;
        let end = self.closing_hour as u16 * 60;

        (start..end)
            .step_by(self.slot_minutes.max(1) as usize)
            .filter_map(|minutes| TimeOfDay::from_minutes(minutes).ok())
            .collect()
    }
}
