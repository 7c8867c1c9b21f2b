//! Tablebook Client Implementation

use crate::error::{Result, SdkError};
use crate::types::{
    CheckResponse, DeleteResponse, NewTable, Reservation, ReservationInput, Table, TimesResponse,
};
use jsonrpsee::core::client::ClientT;
use jsonrpsee::core::params::ObjectParams;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::time::Duration;

/// Tablebook daemon client
///
/// # Example
///
/// ```no_run
/// use tablebook_sdk::TablebookClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = TablebookClient::connect("http://127.0.0.1:9530").await?;
/// let check = client.check("2024-06-01", "19:00", 4, None).await?;
/// println!("available: {}", check.available);
/// # Ok(())
/// # }
/// ```
pub struct TablebookClient {
    client: HttpClient,
}

impl TablebookClient {
    /// Connect to the daemon
    ///
    /// # Arguments
    ///
    /// * `url` - RPC endpoint URL (e.g., `http://127.0.0.1:9530`)
    pub async fn connect(url: impl AsRef<str>) -> Result<Self> {
        let url = url.as_ref();

        let client = HttpClientBuilder::default()
            .request_timeout(Duration::from_secs(30))
            .build(url)
            .map_err(|e| SdkError::Connection(format!("Failed to create client: {}", e)))?;

        Ok(Self { client })
    }

    /// Bookable times on `date` for a party of `guests`
    pub async fn available_times(
        &self,
        date: impl Into<String>,
        guests: u32,
    ) -> Result<TimesResponse> {
        self.call(
            "availability.times.v1",
            json!({ "date": date.into(), "guests": guests }),
        )
        .await
    }

    /// Verdict for one slot; pass `exclude` when checking a move of an existing reservation
    pub async fn check(
        &self,
        date: impl Into<String>,
        time: impl Into<String>,
        guests: u32,
        exclude: Option<i64>,
    ) -> Result<CheckResponse> {
        self.call(
            "availability.check.v1",
            json!({
                "date": date.into(),
                "time": time.into(),
                "guests": guests,
                "exclude_reservation_id": exclude,
            }),
        )
        .await
    }

    /// Book a slot
    ///
    /// Fails with an [`SdkError::Rpc`] for which `is_unavailable()` holds when
    /// the slot is taken.
    pub async fn create_reservation(
        &self,
        input: ReservationInput,
        user_id: Option<i64>,
    ) -> Result<Reservation> {
        let mut params = to_object(&input)?;
        if let Some(user_id) = user_id {
            params.insert("user_id".into(), json!(user_id));
        }
        self.call("reservation.create.v1", Value::Object(params))
            .await
    }

    pub async fn update_reservation(
        &self,
        id: i64,
        input: ReservationInput,
    ) -> Result<Reservation> {
        let mut params = to_object(&input)?;
        params.insert("id".into(), json!(id));
        self.call("reservation.update.v1", Value::Object(params))
            .await
    }

    pub async fn delete_reservation(&self, id: i64) -> Result<DeleteResponse> {
        self.call("reservation.delete.v1", json!({ "id": id })).await
    }

    pub async fn get_reservation(&self, id: i64) -> Result<Reservation> {
        self.call("reservation.get.v1", json!({ "id": id })).await
    }

    /// All reservations, or only those owned by `user_id`
    pub async fn list_reservations(&self, user_id: Option<i64>) -> Result<Vec<Reservation>> {
        self.call("reservation.list.v1", json!({ "user_id": user_id }))
            .await
    }

    pub async fn list_tables(&self) -> Result<Vec<Table>> {
        self.call("table.list.v1", json!({})).await
    }

    pub async fn create_table(&self, table: NewTable) -> Result<Table> {
        self.call("table.create.v1", Value::Object(to_object(&table)?))
            .await
    }

    pub async fn update_table(&self, id: i64, table: NewTable) -> Result<Table> {
        let mut params = to_object(&table)?;
        params.insert("id".into(), json!(id));
        self.call("table.update.v1", Value::Object(params)).await
    }

    pub async fn delete_table(&self, id: i64) -> Result<DeleteResponse> {
        self.call("table.delete.v1", json!({ "id": id })).await
    }

    async fn call<R: DeserializeOwned>(&self, method: &str, params: Value) -> Result<R> {
        let response: R = self.client.request(method, named_params(params)?).await?;
        Ok(response)
    }
}

fn to_object<T: Serialize>(value: &T) -> Result<serde_json::Map<String, Value>> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(SdkError::Other(format!(
            "Expected a JSON object, got {}",
            other
        ))),
    }
}

/// The server reads every method's params by name
fn named_params(value: Value) -> Result<ObjectParams> {
    let mut params = ObjectParams::new();
    if let Value::Object(map) = value {
        for (key, value) in map {
            params.insert(&key, value)?;
        }
    }
    Ok(params)
}
