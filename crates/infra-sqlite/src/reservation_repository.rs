// SQLite ReservationRepository Implementation

use crate::error::{corrupt_row, map_sqlx_error};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;
use tablebook_core::domain::{Reservation, ReservationId, ReservationRequest, UserId};
use tablebook_core::error::Result;
use tablebook_core::port::ReservationRepository;

pub struct SqliteReservationRepository {
    pool: SqlitePool,
}

impl SqliteReservationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationRepository for SqliteReservationRepository {
    async fn find_by_id(&self, id: ReservationId) -> Result<Option<Reservation>> {
        let row: Option<ReservationRow> = sqlx::query_as("SELECT * FROM reservations WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.map(ReservationRow::into_reservation).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Reservation>> {
        let rows: Vec<ReservationRow> =
            sqlx::query_as("SELECT * FROM reservations ORDER BY date ASC, time ASC, id ASC")
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        into_reservations(rows)
    }

    async fn list_by_date(
        &self,
        date: NaiveDate,
        exclude: Option<ReservationId>,
    ) -> Result<Vec<Reservation>> {
        // `? IS NULL` keeps a single statement for both the plain and the excluding query
        let rows: Vec<ReservationRow> = sqlx::query_as(
            r#"
            SELECT * FROM reservations
            WHERE date = ?
              AND (? IS NULL OR id != ?)
            ORDER BY time ASC, id ASC
            "#,
        )
        .bind(date)
        .bind(exclude)
        .bind(exclude)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        into_reservations(rows)
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Reservation>> {
        let rows: Vec<ReservationRow> = sqlx::query_as(
            "SELECT * FROM reservations WHERE user_id = ? ORDER BY date ASC, time ASC, id ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        into_reservations(rows)
    }

    async fn insert(
        &self,
        req: &ReservationRequest,
        user_id: Option<UserId>,
    ) -> Result<Reservation> {
        let row: ReservationRow = sqlx::query_as(
            r#"
            INSERT INTO reservations (
                date, time, guests, name, email, phone, special_requests, user_id
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(req.date)
        .bind(req.time.to_string())
        .bind(req.guests as i64)
        .bind(&req.name)
        .bind(&req.email)
        .bind(&req.phone)
        .bind(&req.special_requests)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.into_reservation()
    }

    async fn update(
        &self,
        id: ReservationId,
        req: &ReservationRequest,
    ) -> Result<Option<Reservation>> {
        // user_id is deliberately absent: ownership never changes after creation
        let row: Option<ReservationRow> = sqlx::query_as(
            r#"
            UPDATE reservations
            SET date = ?, time = ?, guests = ?, name = ?, email = ?, phone = ?,
                special_requests = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(req.date)
        .bind(req.time.to_string())
        .bind(req.guests as i64)
        .bind(&req.name)
        .bind(&req.email)
        .bind(&req.phone)
        .bind(&req.special_requests)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(ReservationRow::into_reservation).transpose()
    }

    async fn delete(&self, id: ReservationId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM reservations WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}

fn into_reservations(rows: Vec<ReservationRow>) -> Result<Vec<Reservation>> {
    rows.into_iter().map(ReservationRow::into_reservation).collect()
}

/// SQLite row representation
#[derive(Debug, sqlx::FromRow)]
struct ReservationRow {
    id: i64,
    date: NaiveDate, // TEXT, YYYY-MM-DD
    time: String,    // TEXT, HH:MM
    guests: i64,
    name: String,
    email: String,
    phone: String,
    special_requests: Option<String>,
    user_id: Option<i64>,
}

impl ReservationRow {
    fn into_reservation(self) -> Result<Reservation> {
        let time = self
            .time
            .parse()
            .map_err(|e| corrupt_row("reservations", self.id, e))?;
        let guests =
            u32::try_from(self.guests).map_err(|e| corrupt_row("reservations", self.id, e))?;

        Ok(Reservation {
            id: self.id,
            date: self.date,
            time,
            guests,
            name: self.name,
            email: self.email,
            phone: self.phone,
            special_requests: self.special_requests,
            user_id: self.user_id,
        })
    }
}
