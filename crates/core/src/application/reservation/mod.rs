// Reservation Service - lifecycle use cases over the availability checker

pub mod create;
pub mod update;

use crate::application::{AvailabilityChecker, DateLocks};
use crate::domain::{ConcurrencyMode, Reservation, ReservationId, ReservationRequest, UserId};
use crate::error::Result;
use crate::port::ReservationRepository;
use std::sync::Arc;
use tokio::sync::OwnedMutexGuard;
use tracing::info;

use update::not_found;

pub struct ReservationService {
    reservations: Arc<dyn ReservationRepository>,
    checker: Arc<AvailabilityChecker>,
    concurrency: ConcurrencyMode,
    locks: DateLocks,
}

impl ReservationService {
    pub fn new(
        reservations: Arc<dyn ReservationRepository>,
        checker: Arc<AvailabilityChecker>,
    ) -> Self {
        let concurrency = checker.config().concurrency;
        Self {
            reservations,
            checker,
            concurrency,
            locks: DateLocks::new(),
        }
    }

    /// Book a slot; rejects with a capacity error when no eligible table is free
    pub async fn create(
        &self,
        req: ReservationRequest,
        user_id: Option<UserId>,
    ) -> Result<Reservation> {
        let _guards = self.guard(&[req.date]).await;
        create::execute(self.reservations.as_ref(), &self.checker, req, user_id).await
    }

    /// Edit a reservation; date/time/size changes are re-checked excluding itself
    pub async fn update(&self, id: ReservationId, req: ReservationRequest) -> Result<Reservation> {
        let existing = self.get(id).await?;
        let _guards = self.guard(&[existing.date, req.date]).await;

        // Re-read under the lock so the slot comparison sees the latest row
        let existing = match self.concurrency {
            ConcurrencyMode::Unguarded => existing,
            ConcurrencyMode::PerDateLock => self.get(id).await?,
        };

        update::execute(self.reservations.as_ref(), &self.checker, &existing, req).await
    }

    /// Cancel (delete) a reservation; freeing capacity needs no check
    pub async fn delete(&self, id: ReservationId) -> Result<()> {
        if !self.reservations.delete(id).await? {
            return Err(not_found(id));
        }
        info!(reservation_id = id, "Reservation cancelled");
        Ok(())
    }

    pub async fn get(&self, id: ReservationId) -> Result<Reservation> {
        self.reservations
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn list_all(&self) -> Result<Vec<Reservation>> {
        self.reservations.list_all().await
    }

    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Reservation>> {
        self.reservations.list_by_user(user_id).await
    }

    async fn guard(&self, dates: &[chrono::NaiveDate]) -> Vec<OwnedMutexGuard<()>> {
        match self.concurrency {
            ConcurrencyMode::Unguarded => Vec::new(),
            ConcurrencyMode::PerDateLock => self.locks.lock_all(dates).await,
        }
    }
}
