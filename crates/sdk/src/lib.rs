//! Aspire SDK - Rust Client Library
//!
//! Provides a convenient client for the Aspire CLI bridge daemon.
//!
//! # Example
//!
//! ```no_run
//! use aspire_sdk::AspireClient;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect to daemon
//!     let client = AspireClient::connect("http://127.0.0.1:9627").await?;
//!
//!     // Build the AppHost in the current directory
//!     let report = client
//!         .call_tool("aspire_build", json!({ "configuration": "Release" }))
//!         .await?;
//!
//!     println!("exit code {}", report.exit_code);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::AspireClient;
pub use error::{Result, SdkError};
pub use types::{DynamicRequest, HelpRequest, ParameterInfo, Report, ToolInfo};
