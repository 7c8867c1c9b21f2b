//! Shared fixtures: one engine wired over either storage backend

#![allow(dead_code)]

use chrono::NaiveDate;
use std::sync::Arc;
use tablebook_core::application::{AvailabilityChecker, ReservationService, SlotEnumerator};
use tablebook_core::domain::{EngineConfig, NewTable, ReservationRequest, TimeOfDay};
use tablebook_core::port::{ReservationRepository, TableRepository};
use tablebook_infra_memory::{InMemoryReservationRepository, InMemoryTableRepository};
use tablebook_infra_sqlite::{
    create_pool, run_migrations, SqliteReservationRepository, SqliteTableRepository,
};

#[derive(Debug, Clone, Copy)]
pub enum Backend {
    Memory,
    Sqlite,
}

pub const BACKENDS: [Backend; 2] = [Backend::Memory, Backend::Sqlite];

pub struct Engine {
    pub tables: Arc<dyn TableRepository>,
    pub reservations: Arc<dyn ReservationRepository>,
    pub checker: Arc<AvailabilityChecker>,
    pub slots: SlotEnumerator,
    pub service: Arc<ReservationService>,
}

impl Engine {
    pub async fn new(backend: Backend, config: EngineConfig) -> Self {
        let (tables, reservations) = storage(backend).await;
        Self::over(tables, reservations, config)
    }

    pub fn over(
        tables: Arc<dyn TableRepository>,
        reservations: Arc<dyn ReservationRepository>,
        config: EngineConfig,
    ) -> Self {
        let checker = Arc::new(AvailabilityChecker::new(
            tables.clone(),
            reservations.clone(),
            config,
        ));
        Self {
            slots: SlotEnumerator::new(checker.clone()),
            service: Arc::new(ReservationService::new(reservations.clone(), checker.clone())),
            checker,
            tables,
            reservations,
        }
    }

    /// Engine with the sample floor plan (2,2,4,4,6,8,2,4,12)
    pub async fn with_sample_tables(backend: Backend, config: EngineConfig) -> Self {
        let engine = Self::new(backend, config).await;
        for table in NewTable::sample_inventory() {
            engine.tables.insert_table(&table).await.unwrap();
        }
        engine
    }

    pub async fn with_capacities(backend: Backend, config: EngineConfig, capacities: &[u32]) -> Self {
        let engine = Self::new(backend, config).await;
        for (i, capacity) in capacities.iter().enumerate() {
            engine
                .tables
                .insert_table(&NewTable::new(format!("Table {}", i + 1), *capacity, "Main"))
                .await
                .unwrap();
        }
        engine
    }

    pub async fn is_available(&self, time: &str, guests: u32) -> bool {
        self.checker
            .is_available(date(), at(time), guests, None)
            .await
            .unwrap()
    }
}

pub async fn storage(backend: Backend) -> (Arc<dyn TableRepository>, Arc<dyn ReservationRepository>) {
    match backend {
        Backend::Memory => (
            Arc::new(InMemoryTableRepository::new()),
            Arc::new(InMemoryReservationRepository::new()),
        ),
        Backend::Sqlite => {
            let pool = create_pool("sqlite::memory:").await.unwrap();
            run_migrations(&pool).await.unwrap();
            (
                Arc::new(SqliteTableRepository::new(pool.clone())),
                Arc::new(SqliteReservationRepository::new(pool)),
            )
        }
    }
}

pub fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

pub fn at(time: &str) -> TimeOfDay {
    time.parse().unwrap()
}

pub fn request(time: &str, guests: u32) -> ReservationRequest {
    request_on(date(), time, guests)
}

pub fn request_on(date: NaiveDate, time: &str, guests: u32) -> ReservationRequest {
    ReservationRequest {
        date,
        time: at(time),
        guests,
        name: "Test Guest".to_string(),
        email: "guest@example.com".to_string(),
        phone: "5550001111".to_string(),
        special_requests: None,
    }
}

pub fn all_slots() -> Vec<String> {
    [
        "17:00", "17:30", "18:00", "18:30", "19:00", "19:30", "20:00", "20:30", "21:00", "21:30",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

pub fn strings(times: &[TimeOfDay]) -> Vec<String> {
    times.iter().map(|t| t.to_string()).collect()
}
