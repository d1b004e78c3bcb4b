// Application Layer - Use cases over the executor port

pub mod catalog;
pub mod tool_service;

// Re-exports
pub use catalog::{categories, descriptors, ParameterSpec, ToolCommand, ToolDescriptor};
pub use tool_service::ToolService;
