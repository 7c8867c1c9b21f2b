//! Tablebook SDK - Rust Client Library
//!
//! Typed client for the Tablebook daemon's JSON-RPC API.
//!
//! # Example
//!
//! ```no_run
//! use tablebook_sdk::{ReservationInput, TablebookClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TablebookClient::connect("http://127.0.0.1:9530").await?;
//!
//!     let times = client.available_times("2024-06-01", 4).await?;
//!     if let Some(first) = times.times.first() {
//!         let reservation = client
//!             .create_reservation(
//!                 ReservationInput {
//!                     date: "2024-06-01".to_string(),
//!                     time: first.clone(),
//!                     guests: 4,
//!                     name: "Ada Lovelace".to_string(),
//!                     email: "ada@example.com".to_string(),
//!                     phone: "5551234567".to_string(),
//!                     special_requests: None,
//!                 },
//!                 None,
//!             )
//!             .await?;
//!         println!("Booked reservation #{}", reservation.id);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::TablebookClient;
pub use error::{Result, SdkError};
pub use types::{
    CheckResponse, DeleteResponse, NewTable, Reservation, ReservationInput, Table, TimesResponse,
};
