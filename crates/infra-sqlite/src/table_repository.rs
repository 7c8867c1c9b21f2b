// SQLite TableRepository Implementation

use crate::error::{corrupt_row, map_sqlx_error};
use async_trait::async_trait;
use sqlx::SqlitePool;
use tablebook_core::domain::{NewTable, Table, TableId};
use tablebook_core::error::Result;
use tablebook_core::port::TableRepository;

pub struct SqliteTableRepository {
    pool: SqlitePool,
}

impl SqliteTableRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TableRepository for SqliteTableRepository {
    async fn list_tables(&self) -> Result<Vec<Table>> {
        let rows: Vec<TableRow> = sqlx::query_as("SELECT * FROM dining_tables ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.into_iter().map(TableRow::into_table).collect()
    }

    async fn find_table(&self, id: TableId) -> Result<Option<Table>> {
        let row: Option<TableRow> = sqlx::query_as("SELECT * FROM dining_tables WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.map(TableRow::into_table).transpose()
    }

    async fn insert_table(&self, table: &NewTable) -> Result<Table> {
        let row: TableRow = sqlx::query_as(
            r#"
            INSERT INTO dining_tables (name, capacity, location, is_active)
            VALUES (?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&table.name)
        .bind(table.capacity as i64)
        .bind(&table.location)
        .bind(table.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.into_table()
    }

    async fn update_table(&self, id: TableId, table: &NewTable) -> Result<Option<Table>> {
        let row: Option<TableRow> = sqlx::query_as(
            r#"
            UPDATE dining_tables
            SET name = ?, capacity = ?, location = ?, is_active = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(&table.name)
        .bind(table.capacity as i64)
        .bind(&table.location)
        .bind(table.is_active)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(TableRow::into_table).transpose()
    }

    async fn delete_table(&self, id: TableId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM dining_tables WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}

/// SQLite row representation
#[derive(Debug, sqlx::FromRow)]
struct TableRow {
    id: i64,
    name: String,
    capacity: i64,
    location: String,
    is_active: bool, // SQLite boolean as integer
}

impl TableRow {
    fn into_table(self) -> Result<Table> {
        let capacity =
            u32::try_from(self.capacity).map_err(|e| corrupt_row("dining_tables", self.id, e))?;

        Ok(Table {
            id: self.id,
            name: self.name,
            capacity,
            location: self.location,
            is_active: self.is_active,
        })
    }
}
