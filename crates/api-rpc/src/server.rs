//! JSON-RPC Server
//!
//! Serves JSON-RPC 2.0 over HTTP on a loopback TCP port.

use crate::handler::RpcHandler;
use crate::types::{
    CheckRequest, CreateReservationRequest, ListReservationsRequest, ReservationIdRequest,
    TableIdRequest, TablePayload, TimesRequest, UpdateReservationRequest, UpdateTableRequest,
};
use jsonrpsee::server::{Server, ServerHandle};
use jsonrpsee::RpcModule;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

pub const DEFAULT_RPC_HOST: &str = "127.0.0.1";
pub const DEFAULT_RPC_PORT: u16 = 9530;

/// RPC Server Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RpcServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for RpcServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_RPC_HOST.to_string(),
            port: DEFAULT_RPC_PORT,
        }
    }
}

/// RPC Server
pub struct RpcServer {
    config: RpcServerConfig,
    handler: Arc<RpcHandler>,
}

/// Registers an async method whose params deserialize into `$req`
macro_rules! register {
    ($module:expr, $handler:expr, $name:literal, $req:ty, $method:ident) => {{
        let handler = $handler.clone();
        $module
            .register_async_method($name, move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: $req = params.parse()?;
                    handler.$method(req).await
                }
            })
            .map_err(|e| e.to_string())?;
    }};
}

impl RpcServer {
    pub fn new(config: RpcServerConfig, handler: RpcHandler) -> Self {
        Self {
            config,
            handler: Arc::new(handler),
        }
    }

    /// Build the method table without binding a socket
    pub fn module(&self) -> Result<RpcModule<()>, String> {
        let mut module = RpcModule::new(());

        register!(module, self.handler, "availability.times.v1", TimesRequest, available_times);
        register!(module, self.handler, "availability.check.v1", CheckRequest, check);

        register!(
            module,
            self.handler,
            "reservation.create.v1",
            CreateReservationRequest,
            create_reservation
        );
        register!(
            module,
            self.handler,
            "reservation.update.v1",
            UpdateReservationRequest,
            update_reservation
        );
        register!(
            module,
            self.handler,
            "reservation.delete.v1",
            ReservationIdRequest,
            delete_reservation
        );
        register!(
            module,
            self.handler,
            "reservation.get.v1",
            ReservationIdRequest,
            get_reservation
        );

        // Params are optional: no params lists everything
        let handler = self.handler.clone();
        module
            .register_async_method("reservation.list.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: Option<ListReservationsRequest> = params.parse()?;
                    handler.list_reservations(req.unwrap_or_default()).await
                }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("table.list.v1", move |_, _, _| {
                let handler = handler.clone();
                async move { handler.list_tables().await }
            })
            .map_err(|e| e.to_string())?;

        register!(module, self.handler, "table.create.v1", TablePayload, create_table);
        register!(module, self.handler, "table.update.v1", UpdateTableRequest, update_table);
        register!(module, self.handler, "table.delete.v1", TableIdRequest, delete_table);

        Ok(module)
    }

    /// Start the JSON-RPC server; returns the bound address and a stop handle
    pub async fn start(self) -> Result<(SocketAddr, ServerHandle), String> {
        let addr = format!("{}:{}", self.config.host, self.config.port);

        info!(
            host = %self.config.host,
            port = %self.config.port,
            "Starting JSON-RPC server"
        );

        let server = Server::builder()
            .build(&addr)
            .await
            .map_err(|e| format!("Failed to build server on {}: {}", addr, e))?;
        let local_addr = server
            .local_addr()
            .map_err(|e| format!("Failed to read bound address: {}", e))?;

        let module = self.module()?;
        let handle = server.start(module);

        info!(addr = %local_addr, "JSON-RPC server started successfully");
        Ok((local_addr, handle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use jsonrpsee::core::params::ObjectParams;
    use jsonrpsee::rpc_params;
    use serde_json::{json, Value};
    use tablebook_core::domain::{EngineConfig, NewTable, Reservation, Table};
    use tablebook_core::port::time_provider::FixedTimeProvider;
    use tablebook_core::port::TableRepository;
    use tablebook_infra_memory::{InMemoryReservationRepository, InMemoryTableRepository};

    async fn server() -> RpcServer {
        let tables = Arc::new(InMemoryTableRepository::new());
        for table in NewTable::sample_inventory() {
            tables.insert_table(&table).await.unwrap();
        }
        let handler = RpcHandler::new(
            tables,
            Arc::new(InMemoryReservationRepository::new()),
            Arc::new(FixedTimeProvider(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())),
            EngineConfig::default(),
        )
        .unwrap();
        RpcServer::new(RpcServerConfig::default(), handler)
    }

    fn named(value: Value) -> ObjectParams {
        let mut params = ObjectParams::new();
        if let Value::Object(map) = value {
            for (key, value) in map {
                params.insert(&key, value).unwrap();
            }
        }
        params
    }

    #[tokio::test]
    async fn test_module_dispatches_methods() {
        let module = server().await.module().unwrap();

        let tables: Vec<Table> = module.call("table.list.v1", rpc_params![]).await.unwrap();
        assert_eq!(tables.len(), 9);

        let created: Reservation = module
            .call(
                "reservation.create.v1",
                named(json!({
                    "date": "2024-06-03",
                    "time": "19:00",
                    "guests": 4,
                    "name": "Ada",
                    "email": "ada@example.com",
                    "phone": "5551234567",
                    "user_id": 8
                })),
            )
            .await
            .unwrap();
        assert_eq!(created.user_id, Some(8));

        let listed: Vec<Reservation> = module
            .call("reservation.list.v1", rpc_params![])
            .await
            .unwrap();
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn test_invalid_payload_is_rejected() {
        let module = server().await.module().unwrap();

        let result: Result<Reservation, _> = module
            .call(
                "reservation.create.v1",
                named(json!({
                    "date": "2024-06-03",
                    "time": "25:00",
                    "guests": 4,
                    "name": "Ada",
                    "email": "ada@example.com",
                    "phone": "5551234567"
                })),
            )
            .await;
        assert!(result.is_err());
    }
}
