//! RPC Request/Response Types
//!
//! Dates and times arrive as raw strings so malformed values surface as
//! validation errors (4000) rather than transport-level parse failures.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tablebook_core::domain::{ReservationId, TableId, TimeOfDay, UserId};

/// availability.times.v1 - Bookable slots for a date
#[derive(Debug, Deserialize)]
pub struct TimesRequest {
    pub date: String,
    #[serde(default = "default_guests")]
    pub guests: i64,
}

fn default_guests() -> i64 {
    2
}

#[derive(Debug, Clone, Serialize)]
pub struct TimesResponse {
    pub date: NaiveDate,
    pub guests: u32,
    pub times: Vec<TimeOfDay>,
}

/// availability.check.v1 - Verdict for one slot
#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    pub date: String,
    pub time: String,
    pub guests: i64,
    #[serde(default)]
    pub exclude_reservation_id: Option<ReservationId>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckResponse {
    pub available: bool,
    pub reason: Option<String>,
}

/// Guest-submitted reservation fields
#[derive(Debug, Clone, Deserialize)]
pub struct ReservationPayload {
    pub date: String,
    pub time: String,
    pub guests: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub special_requests: Option<String>,
}

/// reservation.create.v1
#[derive(Debug, Deserialize)]
pub struct CreateReservationRequest {
    #[serde(flatten)]
    pub payload: ReservationPayload,
    #[serde(default)]
    pub user_id: Option<UserId>,
}

/// reservation.update.v1
#[derive(Debug, Deserialize)]
pub struct UpdateReservationRequest {
    pub id: ReservationId,
    #[serde(flatten)]
    pub payload: ReservationPayload,
}

/// reservation.get.v1 / reservation.delete.v1
#[derive(Debug, Deserialize)]
pub struct ReservationIdRequest {
    pub id: ReservationId,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub id: i64,
    pub deleted: bool,
}

/// reservation.list.v1 - All reservations, or one user's
#[derive(Debug, Default, Deserialize)]
pub struct ListReservationsRequest {
    #[serde(default)]
    pub user_id: Option<UserId>,
}

/// Staff-submitted table fields
#[derive(Debug, Clone, Deserialize)]
pub struct TablePayload {
    pub name: String,
    pub capacity: i64,
    pub location: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// table.update.v1
#[derive(Debug, Deserialize)]
pub struct UpdateTableRequest {
    pub id: TableId,
    #[serde(flatten)]
    pub payload: TablePayload,
}

/// table.delete.v1
#[derive(Debug, Deserialize)]
pub struct TableIdRequest {
    pub id: TableId,
}
