//! Caller-side validation
//!
//! The engine assumes well-formed input; everything a guest or staff member
//! can get wrong is rejected here with `AppError::Validation`.

use crate::types::{ReservationPayload, TablePayload};
use chrono::NaiveDate;
use regex::Regex;
use tablebook_core::application::BookingWindow;
use tablebook_core::domain::{NewTable, ReservationRequest, TimeOfDay};
use tablebook_core::error::{AppError, Result};

pub const MIN_PHONE_LEN: usize = 10;
pub const MAX_TABLE_CAPACITY: u32 = 20;

/// `local@domain.tld`, no whitespace
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

pub struct Validator {
    window: BookingWindow,
    max_party_size: u32,
    email: Regex,
}

impl Validator {
    pub fn new(window: BookingWindow, max_party_size: u32) -> Result<Self> {
        let email = Regex::new(EMAIL_PATTERN)
            .map_err(|e| AppError::Internal(format!("Invalid email pattern: {}", e)))?;

        Ok(Self {
            window,
            max_party_size,
            email,
        })
    }

    /// ISO date inside the booking window
    pub fn date(&self, raw: &str) -> Result<NaiveDate> {
        let date = parse_date(raw)?;
        self.in_window(date)?;
        Ok(date)
    }

    pub fn in_window(&self, date: NaiveDate) -> Result<()> {
        self.window.validate(date)
    }

    pub fn is_valid_email(&self, raw: &str) -> bool {
        self.email.is_match(raw.trim())
    }

    pub fn guests(&self, guests: i64) -> Result<u32> {
        match u32::try_from(guests) {
            Ok(n) if (1..=self.max_party_size).contains(&n) => Ok(n),
            _ => Err(AppError::Validation(format!(
                "Party size must be between 1 and {}, got {}",
                self.max_party_size, guests
            ))),
        }
    }

    /// Full payload check for a new booking
    pub fn reservation(&self, payload: ReservationPayload) -> Result<ReservationRequest> {
        let req = self.reservation_fields(payload)?;
        self.in_window(req.date)?;
        Ok(req)
    }

    /// Payload check without the booking window; edits that keep their slot
    /// may refer to a date that has already passed
    pub fn reservation_fields(&self, payload: ReservationPayload) -> Result<ReservationRequest> {
        let date = parse_date(&payload.date)?;
        let time = parse_time(&payload.time)?;
        let guests = self.guests(payload.guests)?;

        let name = payload.name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Name is required".to_string()));
        }
        if !self.is_valid_email(&payload.email) {
            return Err(AppError::Validation(format!(
                "Invalid email address: {}",
                payload.email
            )));
        }
        if payload.phone.trim().chars().count() < MIN_PHONE_LEN {
            return Err(AppError::Validation(format!(
                "Phone number must have at least {} characters",
                MIN_PHONE_LEN
            )));
        }

        Ok(ReservationRequest {
            date,
            time,
            guests,
            name: name.to_string(),
            email: payload.email.trim().to_string(),
            phone: payload.phone.trim().to_string(),
            special_requests: payload
                .special_requests
                .filter(|s| !s.trim().is_empty()),
        })
    }
}

pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("Invalid date format: {:?}", raw)))
}

pub fn parse_time(raw: &str) -> Result<TimeOfDay> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::Validation(format!("Invalid time format (expected HH:MM): {:?}", raw)))
}

pub fn table(payload: TablePayload) -> Result<NewTable> {
    let name = payload.name.trim();
    let location = payload.location.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Table name is required".to_string()));
    }
    if location.is_empty() {
        return Err(AppError::Validation("Table location is required".to_string()));
    }
    let capacity = match u32::try_from(payload.capacity) {
        Ok(c) if (1..=MAX_TABLE_CAPACITY).contains(&c) => c,
        _ => {
            return Err(AppError::Validation(format!(
                "Table capacity must be between 1 and {}, got {}",
                MAX_TABLE_CAPACITY, payload.capacity
            )))
        }
    };

    Ok(NewTable {
        name: name.to_string(),
        capacity,
        location: location.to_string(),
        is_active: payload.is_active,
    })
}
