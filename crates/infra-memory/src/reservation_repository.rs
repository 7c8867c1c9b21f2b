use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use tablebook_core::domain::{Reservation, ReservationId, ReservationRequest, UserId};
use tablebook_core::error::Result;
use tablebook_core::port::ReservationRepository;
use tokio::sync::RwLock;

#[derive(Default)]
struct Book {
    reservations: BTreeMap<ReservationId, Reservation>,
    last_id: ReservationId,
}

impl Book {
    fn sorted<'a>(&self, iter: impl Iterator<Item = &'a Reservation>) -> Vec<Reservation> {
        let mut out: Vec<Reservation> = iter.cloned().collect();
        out.sort_by_key(|r| (r.date, r.time, r.id));
        out
    }
}

pub struct InMemoryReservationRepository {
    inner: RwLock<Book>,
}

impl InMemoryReservationRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Book::default()),
        }
    }
}

impl Default for InMemoryReservationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReservationRepository for InMemoryReservationRepository {
    async fn find_by_id(&self, id: ReservationId) -> Result<Option<Reservation>> {
        let inner = self.inner.read().await;
        Ok(inner.reservations.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Reservation>> {
        let inner = self.inner.read().await;
        Ok(inner.sorted(inner.reservations.values()))
    }

    async fn list_by_date(
        &self,
        date: NaiveDate,
        exclude: Option<ReservationId>,
    ) -> Result<Vec<Reservation>> {
        let inner = self.inner.read().await;
        Ok(inner.sorted(
            inner
                .reservations
                .values()
                .filter(|r| r.date == date && Some(r.id) != exclude),
        ))
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Reservation>> {
        let inner = self.inner.read().await;
        Ok(inner.sorted(
            inner
                .reservations
                .values()
                .filter(|r| r.user_id == Some(user_id)),
        ))
    }

    async fn insert(
        &self,
        req: &ReservationRequest,
        user_id: Option<UserId>,
    ) -> Result<Reservation> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let reservation = Reservation::from_request(inner.last_id, req.clone(), user_id);
        inner
            .reservations
            .insert(reservation.id, reservation.clone());
        Ok(reservation)
    }

    async fn update(
        &self,
        id: ReservationId,
        req: &ReservationRequest,
    ) -> Result<Option<Reservation>> {
        let mut inner = self.inner.write().await;
        Ok(inner.reservations.get_mut(&id).map(|existing| {
            existing.apply(req.clone());
            existing.clone()
        }))
    }

    async fn delete(&self, id: ReservationId) -> Result<bool> {
        let mut inner = self.inner.write().await;
        Ok(inner.reservations.remove(&id).is_some())
    }
}
