//! SDK Request/Response Types
//!
//! Mirrors the JSON-RPC types from the api-rpc crate. Dates are
//! `YYYY-MM-DD` strings and times `HH:MM` strings on the wire.

use serde::{Deserialize, Serialize};

/// Reservation fields a guest submits
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservationInput {
    pub date: String,
    pub time: String,
    pub guests: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

/// Stored reservation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub date: String,
    pub time: String,
    pub guests: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub special_requests: Option<String>,
    pub user_id: Option<i64>,
}

/// Table fields for create/update
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTable {
    pub name: String,
    pub capacity: u32,
    pub location: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Table {
    pub id: i64,
    pub name: String,
    pub capacity: u32,
    pub location: String,
    pub is_active: bool,
}

/// Response from availability.times.v1
#[derive(Debug, Clone, Deserialize)]
pub struct TimesResponse {
    pub date: String,
    pub guests: u32,
    pub times: Vec<String>,
}

/// Response from availability.check.v1
#[derive(Debug, Clone, Deserialize)]
pub struct CheckResponse {
    pub available: bool,
    pub reason: Option<String>,
}

/// Response from reservation.delete.v1 / table.delete.v1
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteResponse {
    pub id: i64,
    pub deleted: bool,
}
