// Port Layer - Interfaces for external dependencies

pub mod command_executor;
pub mod id_provider; // For deterministic testing

// Re-exports
pub use command_executor::{CommandExecutor, VERSION_ARGUMENT};
pub use id_provider::{IdProvider, UuidProvider};
