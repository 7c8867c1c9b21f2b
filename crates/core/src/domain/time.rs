// Time-of-day value object (minute precision, 24h)

use crate::domain::error::{DomainError, Result};
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const MINUTES_PER_HOUR: u16 = 60;
const MINUTES_PER_DAY: u16 = 24 * MINUTES_PER_HOUR;

/// A wall-clock time in the restaurant's local day, stored as minutes since midnight.
///
/// Serialized as `"HH:MM"`, which is also the persisted column format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour >= 24 || minute >= 60 {
            return Err(DomainError::InvalidTime(format!("{:02}:{:02}", hour, minute)));
        }
        Ok(Self(hour as u16 * MINUTES_PER_HOUR + minute as u16))
    }

    pub fn from_minutes(minutes: u16) -> Result<Self> {
        if minutes >= MINUTES_PER_DAY {
            return Err(DomainError::InvalidTime(format!("{} minutes", minutes)));
        }
        Ok(Self(minutes))
    }

    pub fn hour(&self) -> u8 {
        (self.0 / MINUTES_PER_HOUR) as u8
    }

    pub fn minute(&self) -> u8 {
        (self.0 % MINUTES_PER_HOUR) as u8
    }

    /// Absolute distance in minutes (same day, no wrap-around)
    pub fn minutes_between(&self, other: TimeOfDay) -> u16 {
        self.0.abs_diff(other.0)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || DomainError::InvalidTime(s.to_string());

        // ASCII digits only; chrono skips whitespace before numeric fields
        let s = s.trim();
        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !(1..=2).contains(&hour.len()) || minute.len() != 2 || !digits(hour) || !digits(minute) {
            return Err(invalid());
        }

        let time = NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| invalid())?;
        TimeOfDay::new(time.hour() as u8, time.minute() as u8)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
