//! RPC Method Handlers
//!
//! Validates parameters, then delegates to the core use cases.

use crate::error::to_rpc_error;
use crate::types::{
    CheckRequest, CheckResponse, CreateReservationRequest, DeleteResponse,
    ListReservationsRequest, ReservationIdRequest, TableIdRequest, TablePayload, TimesRequest,
    TimesResponse, UpdateReservationRequest, UpdateTableRequest,
};
use crate::validation::{self, parse_time, Validator};
use jsonrpsee::types::ErrorObjectOwned;
use std::sync::Arc;
use tablebook_core::application::{
    Availability, AvailabilityChecker, BookingWindow, ReservationService, SlotEnumerator,
};
use tablebook_core::domain::{EngineConfig, Reservation, Table};
use tablebook_core::error::{AppError, Result};
use tablebook_core::port::{ReservationRepository, TableRepository, TimeProvider};
use tracing::info;

type RpcResult<T> = std::result::Result<T, ErrorObjectOwned>;

/// RPC Handler with injected dependencies
pub struct RpcHandler {
    checker: Arc<AvailabilityChecker>,
    slots: SlotEnumerator,
    reservations: ReservationService,
    tables: Arc<dyn TableRepository>,
    validator: Validator,
}

impl RpcHandler {
    pub fn new(
        tables: Arc<dyn TableRepository>,
        reservations: Arc<dyn ReservationRepository>,
        time_provider: Arc<dyn TimeProvider>,
        config: EngineConfig,
    ) -> Result<Self> {
        let window = BookingWindow::new(time_provider, config.booking_horizon_days);
        let validator = Validator::new(window, config.max_party_size)?;
        let checker = Arc::new(AvailabilityChecker::new(
            tables.clone(),
            reservations.clone(),
            config,
        ));

        Ok(Self {
            slots: SlotEnumerator::new(checker.clone()),
            reservations: ReservationService::new(reservations, checker.clone()),
            checker,
            tables,
            validator,
        })
    }

    /// availability.times.v1
    pub async fn available_times(&self, params: TimesRequest) -> RpcResult<TimesResponse> {
        let date = self.validator.date(&params.date).map_err(to_rpc_error)?;
        let guests = self.validator.guests(params.guests).map_err(to_rpc_error)?;

        let times = self
            .slots
            .available_times(date, guests)
            .await
            .map_err(to_rpc_error)?;

        Ok(TimesResponse {
            date,
            guests,
            times,
        })
    }

    /// availability.check.v1
    pub async fn check(&self, params: CheckRequest) -> RpcResult<CheckResponse> {
        let date = self.validator.date(&params.date).map_err(to_rpc_error)?;
        let time = parse_time(&params.time).map_err(to_rpc_error)?;
        let guests = self.validator.guests(params.guests).map_err(to_rpc_error)?;

        let verdict = self
            .checker
            .check(date, time, guests, params.exclude_reservation_id)
            .await
            .map_err(to_rpc_error)?;

        let reason = match verdict {
            Availability::Available { .. } => None,
            Availability::NoEligibleTable => {
                Some(format!("No table can seat a party of {}", guests))
            }
            Availability::Full { eligible, occupied } => Some(format!(
                "All {} suitable tables are taken ({} overlapping reservations)",
                eligible, occupied
            )),
        };

        Ok(CheckResponse {
            available: verdict.is_available(),
            reason,
        })
    }

    /// reservation.create.v1
    pub async fn create_reservation(
        &self,
        params: CreateReservationRequest,
    ) -> RpcResult<Reservation> {
        let req = self
            .validator
            .reservation(params.payload)
            .map_err(to_rpc_error)?;

        self.reservations
            .create(req, params.user_id)
            .await
            .map_err(to_rpc_error)
    }

    /// reservation.update.v1
    ///
    /// The booking window only applies when the edit moves or resizes the
    /// reservation; contact changes on a past booking are allowed.
    pub async fn update_reservation(
        &self,
        params: UpdateReservationRequest,
    ) -> RpcResult<Reservation> {
        let req = self
            .validator
            .reservation_fields(params.payload)
            .map_err(to_rpc_error)?;

        let existing = self
            .reservations
            .get(params.id)
            .await
            .map_err(to_rpc_error)?;
        if existing.slot_changed(&req) {
            self.validator.in_window(req.date).map_err(to_rpc_error)?;
        }

        self.reservations
            .update(params.id, req)
            .await
            .map_err(to_rpc_error)
    }

    /// reservation.delete.v1
    pub async fn delete_reservation(
        &self,
        params: ReservationIdRequest,
    ) -> RpcResult<DeleteResponse> {
        self.reservations
            .delete(params.id)
            .await
            .map_err(to_rpc_error)?;

        Ok(DeleteResponse {
            id: params.id,
            deleted: true,
        })
    }

    /// reservation.get.v1
    pub async fn get_reservation(&self, params: ReservationIdRequest) -> RpcResult<Reservation> {
        self.reservations.get(params.id).await.map_err(to_rpc_error)
    }

    /// reservation.list.v1
    pub async fn list_reservations(
        &self,
        params: ListReservationsRequest,
    ) -> RpcResult<Vec<Reservation>> {
        let listed = match params.user_id {
            Some(user_id) => self.reservations.list_for_user(user_id).await,
            None => self.reservations.list_all().await,
        };
        listed.map_err(to_rpc_error)
    }

    /// table.list.v1
    pub async fn list_tables(&self) -> RpcResult<Vec<Table>> {
        self.tables.list_tables().await.map_err(to_rpc_error)
    }

    /// table.create.v1
    pub async fn create_table(&self, params: TablePayload) -> RpcResult<Table> {
        let table = validation::table(params).map_err(to_rpc_error)?;
        let created = self
            .tables
            .insert_table(&table)
            .await
            .map_err(to_rpc_error)?;

        info!(
            table_id = created.id,
            capacity = created.capacity,
            "Table created"
        );
        Ok(created)
    }

    /// table.update.v1
    pub async fn update_table(&self, params: UpdateTableRequest) -> RpcResult<Table> {
        let table = validation::table(params.payload).map_err(to_rpc_error)?;
        let updated = self
            .tables
            .update_table(params.id, &table)
            .await
            .map_err(to_rpc_error)?
            .ok_or_else(|| table_not_found(params.id))?;

        info!(
            table_id = updated.id,
            capacity = updated.capacity,
            is_active = updated.is_active,
            "Table updated"
        );
        Ok(updated)
    }

    /// table.delete.v1
    pub async fn delete_table(&self, params: TableIdRequest) -> RpcResult<DeleteResponse> {
        let deleted = self
            .tables
            .delete_table(params.id)
            .await
            .map_err(to_rpc_error)?;

        if !deleted {
            return Err(table_not_found(params.id));
        }

        info!(table_id = params.id, "Table deleted");
        Ok(DeleteResponse {
            id: params.id,
            deleted,
        })
    }
}

fn table_not_found(id: i64) -> ErrorObjectOwned {
    to_rpc_error(AppError::NotFound(format!("Table {} not found", id)))
}
