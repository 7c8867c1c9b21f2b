// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid time of day: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Invalid party size: {0}")]
    InvalidPartySize(u32),

    #[error("Invalid engine configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
