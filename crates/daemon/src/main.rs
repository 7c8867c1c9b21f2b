//! Tablebook Daemon - Main Entry Point
//!
//! Wires storage, the availability engine and the JSON-RPC server.

mod config;
mod logging;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{info, warn};

use config::{DaemonConfig, StorageBackend};
use tablebook_api_rpc::{RpcHandler, RpcServer};
use tablebook_core::domain::NewTable;
use tablebook_core::port::time_provider::SystemTimeProvider;
use tablebook_core::port::{ReservationRepository, TableRepository};
use tablebook_infra_memory::{InMemoryReservationRepository, InMemoryTableRepository};
use tablebook_infra_sqlite::{
    create_pool, run_migrations, SqliteReservationRepository, SqliteTableRepository,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load configuration (before logging: log_dir lives there)
    let config = DaemonConfig::load()?;

    // 2. Initialize logging
    let _log_guard = logging::init(logging::LogFormat::from_env(), config.log_dir.as_deref())?;

    info!("Tablebook daemon v{} starting...", VERSION);
    info!(
        storage = ?config.storage,
        capacity_model = ?config.engine.capacity_model,
        concurrency = ?config.engine.concurrency,
        overlap_minutes = config.engine.overlap_minutes,
        "Configuration loaded"
    );

    // 3. Initialize storage
    let (tables, reservations) = open_storage(&config).await?;

    // 4. Seed the starter floor plan on a fresh install
    if config.seed_sample_tables {
        seed_sample_tables(tables.as_ref()).await?;
    }

    // 5. Start JSON-RPC server
    let handler = RpcHandler::new(
        tables,
        reservations,
        Arc::new(SystemTimeProvider),
        config.engine.clone(),
    )
    .context("Failed to build RPC handler")?;
    let (addr, rpc_handle) = RpcServer::new(config.rpc.clone(), handler)
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("RPC server start failed: {}", e))?;

    info!(addr = %addr, "System ready. Press Ctrl+C to shutdown");

    // 6. Wait for shutdown signal
    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for shutdown signal")?;

    info!("Shutdown signal received. Exiting gracefully...");

    rpc_handle
        .stop()
        .map_err(|e| anyhow::anyhow!("RPC server stop failed: {}", e))?;
    rpc_handle.stopped().await;

    info!("Shutdown complete.");

    Ok(())
}

async fn open_storage(
    config: &DaemonConfig,
) -> Result<(Arc<dyn TableRepository>, Arc<dyn ReservationRepository>)> {
    match config.storage {
        StorageBackend::Memory => {
            warn!("Using in-memory storage; reservations are lost on restart");
            Ok((
                Arc::new(InMemoryTableRepository::new()),
                Arc::new(InMemoryReservationRepository::new()),
            ))
        }
        StorageBackend::Sqlite => {
            if let Some(dir) = config.database_dir() {
                std::fs::create_dir_all(&dir).with_context(|| {
                    format!("Failed to create database directory {}", dir.display())
                })?;
            }

            let url = config.sqlite_url();
            info!(database_url = %url, "Initializing database...");

            let pool = create_pool(&url)
                .await
                .context("DB pool creation failed")?;
            run_migrations(&pool).await.context("Migration failed")?;

            Ok((
                Arc::new(SqliteTableRepository::new(pool.clone())),
                Arc::new(SqliteReservationRepository::new(pool)),
            ))
        }
    }
}

async fn seed_sample_tables(tables: &dyn TableRepository) -> Result<()> {
    if !tables.list_tables().await?.is_empty() {
        return Ok(());
    }

    let inventory = NewTable::sample_inventory();
    let count = inventory.len();
    for table in &inventory {
        tables.insert_table(table).await?;
    }

    info!(tables = count, "Seeded sample table inventory");
    Ok(())
}
