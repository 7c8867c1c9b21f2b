// Table Domain Model

use serde::{Deserialize, Serialize};

/// Table ID (storage-assigned)
pub type TableId = i64;

/// A physical dining table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub id: TableId,
    pub name: String,
    pub capacity: u32,
    pub location: String,
    pub is_active: bool,
}

impl Table {
    /// Active and large enough for the party
    pub fn can_seat(&self, guests: u32) -> bool {
        self.is_active && self.capacity >= guests
    }
}

/// Table fields without identity (create / replace)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTable {
    pub name: String,
    pub capacity: u32,
    pub location: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl NewTable {
    pub fn new(name: impl Into<String>, capacity: u32, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            capacity,
            location: location.into(),
            is_active: true,
        }
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub fn into_table(self, id: TableId) -> Table {
        Table {
            id,
            name: self.name,
            capacity: self.capacity,
            location: self.location,
            is_active: self.is_active,
        }
    }

    /// Starter floor plan used when a fresh install has no tables
    pub fn sample_inventory() -> Vec<NewTable> {
        vec![
            NewTable::new("Table 1", 2, "Main"),
            NewTable::new("Table 2", 2, "Main"),
            NewTable::new("Table 3", 4, "Main"),
            NewTable::new("Table 4", 4, "Main"),
            NewTable::new("Table 5", 6, "Main"),
            NewTable::new("Table 6", 8, "Main"),
            NewTable::new("Patio 1", 2, "Outdoor"),
            NewTable::new("Patio 2", 4, "Outdoor"),
            NewTable::new("Private Room", 12, "Private"),
        ]
    }
}
