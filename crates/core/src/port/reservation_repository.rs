// Reservation Repository Port (Interface)

use crate::domain::{Reservation, ReservationId, ReservationRequest, UserId};
use crate::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Repository interface for Reservation persistence
///
/// Writes must be visible to the next read (read-your-writes).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Find reservation by ID
    async fn find_by_id(&self, id: ReservationId) -> Result<Option<Reservation>>;

    /// All reservations ordered by date, time, id
    async fn list_all(&self) -> Result<Vec<Reservation>>;

    /// Reservations on `date`, optionally leaving one out
    async fn list_by_date(
        &self,
        date: NaiveDate,
        exclude: Option<ReservationId>,
    ) -> Result<Vec<Reservation>>;

    /// Reservations owned by a user
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Reservation>>;

    /// Insert a new reservation and return it with its assigned ID
    async fn insert(&self, req: &ReservationRequest, user_id: Option<UserId>)
        -> Result<Reservation>;

    /// Overwrite the payload fields, keeping the stored owner; `None` if absent
    async fn update(
        &self,
        id: ReservationId,
        req: &ReservationRequest,
    ) -> Result<Option<Reservation>>;

    /// Delete reservation; `false` if nothing was deleted
    async fn delete(&self, id: ReservationId) -> Result<bool>;
}
