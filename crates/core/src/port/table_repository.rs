// Table Inventory Port (Interface)

use crate::domain::{NewTable, Table, TableId};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for the table inventory
///
/// Read-only to the availability engine; the write methods serve staff management.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TableRepository: Send + Sync {
    /// All tables, active or not, ordered by id
    async fn list_tables(&self) -> Result<Vec<Table>>;

    /// Find table by ID
    async fn find_table(&self, id: TableId) -> Result<Option<Table>>;

    /// Insert a new table
    async fn insert_table(&self, table: &NewTable) -> Result<Table>;

    /// Replace table fields; `None` if the table does not exist
    async fn update_table(&self, id: TableId, table: &NewTable) -> Result<Option<Table>>;

    /// Delete table; `false` if nothing was deleted
    async fn delete_table(&self, id: TableId) -> Result<bool>;
}
