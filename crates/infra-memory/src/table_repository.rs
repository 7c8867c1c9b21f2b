use std::collections::BTreeMap;

use async_trait::async_trait;
use tablebook_core::domain::{NewTable, Table, TableId};
use tablebook_core::error::Result;
use tablebook_core::port::TableRepository;
use tokio::sync::RwLock;

#[derive(Default)]
struct Inventory {
    tables: BTreeMap<TableId, Table>,
    last_id: TableId,
}

/// Table inventory held in a `BTreeMap` so listing comes out in id order
pub struct InMemoryTableRepository {
    inner: RwLock<Inventory>,
}

impl InMemoryTableRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inventory::default()),
        }
    }
}

impl Default for InMemoryTableRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TableRepository for InMemoryTableRepository {
    async fn list_tables(&self) -> Result<Vec<Table>> {
        let inner = self.inner.read().await;
        Ok(inner.tables.values().cloned().collect())
    }

    async fn find_table(&self, id: TableId) -> Result<Option<Table>> {
        let inner = self.inner.read().await;
        Ok(inner.tables.get(&id).cloned())
    }

    async fn insert_table(&self, table: &NewTable) -> Result<Table> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let created = table.clone().into_table(inner.last_id);
        inner.tables.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update_table(&self, id: TableId, table: &NewTable) -> Result<Option<Table>> {
        let mut inner = self.inner.write().await;
        Ok(inner.tables.get_mut(&id).map(|slot| {
            *slot = table.clone().into_table(id);
            slot.clone()
        }))
    }

    async fn delete_table(&self, id: TableId) -> Result<bool> {
        let mut inner = self.inner.write().await;
        Ok(inner.tables.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let repo = InMemoryTableRepository::new();
        for table in NewTable::sample_inventory() {
            repo.insert_table(&table).await.unwrap();
        }

        let tables = repo.list_tables().await.unwrap();
        let ids: Vec<_> = tables.iter().map(|t| t.id).collect();
        assert_eq!(ids, (1..=9).collect::<Vec<_>>());
        assert_eq!(tables[6].name, "Patio 1");
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let repo = InMemoryTableRepository::new();
        let created = repo
            .insert_table(&NewTable::new("Table 1", 2, "Main"))
            .await
            .unwrap();

        let updated = repo
            .update_table(created.id, &NewTable::new("Table 1", 6, "Main").inactive())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.capacity, 6);
        assert!(!updated.is_active);
        assert_eq!(repo.find_table(created.id).await.unwrap(), Some(updated));

        assert!(repo
            .update_table(42, &NewTable::new("Ghost", 2, "Main"))
            .await
            .unwrap()
            .is_none());

        assert!(repo.delete_table(created.id).await.unwrap());
        assert!(!repo.delete_table(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let repo = InMemoryTableRepository::new();
        let first = repo
            .insert_table(&NewTable::new("Table 1", 2, "Main"))
            .await
            .unwrap();
        repo.delete_table(first.id).await.unwrap();

        let second = repo
            .insert_table(&NewTable::new("Table 2", 2, "Main"))
            .await
            .unwrap();
        assert_eq!(second.id, first.id + 1);
    }
}
