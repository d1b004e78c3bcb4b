//! JSON-RPC API Layer
//!
//! Exposes every catalog tool of the Aspire CLI bridge as a JSON-RPC 2.0
//! method, plus `tools.list.v1` for discovery.

pub mod error;
pub mod handler;
pub mod server;
pub mod types;

pub use jsonrpsee::server::ServerHandle;
pub use server::{RpcServer, RpcServerConfig};
