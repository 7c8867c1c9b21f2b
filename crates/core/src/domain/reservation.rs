// Reservation Domain Model

use crate::domain::TimeOfDay;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Reservation ID (storage-assigned)
pub type ReservationId = i64;

/// Owning user ID (anonymous bookings have none)
pub type UserId = i64;

/// Reservation payload as submitted by a guest (no identity, no owner)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRequest {
    pub date: NaiveDate,
    pub time: TimeOfDay,
    pub guests: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub special_requests: Option<String>,
}

/// Reservation Entity
///
/// Cancellation deletes the record; there is no status field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub date: NaiveDate,
    pub time: TimeOfDay,
    pub guests: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub special_requests: Option<String>,
    pub user_id: Option<UserId>,
}

impl Reservation {
    pub fn from_request(id: ReservationId, req: ReservationRequest, user_id: Option<UserId>) -> Self {
        Self {
            id,
            date: req.date,
            time: req.time,
            guests: req.guests,
            name: req.name,
            email: req.email,
            phone: req.phone,
            special_requests: req.special_requests,
            user_id,
        }
    }

    /// Apply edited fields; the owner is immutable after creation
    pub fn apply(&mut self, req: ReservationRequest) {
        self.date = req.date;
        self.time = req.time;
        self.guests = req.guests;
        self.name = req.name;
        self.email = req.email;
        self.phone = req.phone;
        self.special_requests = req.special_requests;
    }

    /// Whether an edit touches date, time or party size (needs a fresh availability check)
    pub fn slot_changed(&self, req: &ReservationRequest) -> bool {
        self.date != req.date || self.time != req.time || self.guests != req.guests
    }

    /// Within `window_minutes` of `time` on `date` (strict)
    pub fn contends_with(&self, date: NaiveDate, time: TimeOfDay, window_minutes: u16) -> bool {
        self.date == date && self.time.minutes_between(time) < window_minutes
    }
}
