//! JSON-RPC API Layer
//!
//! Exposes the availability engine and the reservation/table operations as
//! JSON-RPC 2.0 methods, and performs caller-side payload validation.

pub mod error;
pub mod handler;
pub mod server;
pub mod types;
pub mod validation;

pub use handler::RpcHandler;
pub use server::{RpcServer, RpcServerConfig};
