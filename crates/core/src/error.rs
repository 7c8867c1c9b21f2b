// Central Error Type for the Application

use crate::domain::TimeOfDay;
use chrono::NaiveDate;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Requested slot has no free eligible table
    #[error("Time slot {date} {time} is not available for {guests} guests")]
    CapacityConflict {
        date: NaiveDate,
        time: TimeOfDay,
        guests: u32,
    },

    /// No table in the whole inventory can seat the party
    #[error("No table can seat a party of {guests}")]
    NoEligibleTable { guests: u32 },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// True for both flavours of "slot unavailable"
    pub fn is_capacity_conflict(&self) -> bool {
        matches!(
            self,
            AppError::CapacityConflict { .. } | AppError::NoEligibleTable { .. }
        )
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

// Note: sqlx::Error conversion is handled in infra-sqlite crate
// by converting to AppError::Database(String)
