//! Aspire Client Implementation

use crate::error::{Result, SdkError};
use crate::types::{DynamicRequest, HelpRequest, Report, ToolInfo};
use jsonrpsee::core::client::ClientT;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use jsonrpsee::rpc_params;
use serde::Serialize;
use std::time::Duration;

/// Long-running commands (`run`, `dev`) hold the request open
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(600);

/// Aspire bridge client
///
/// # Example
///
/// ```no_run
/// use aspire_sdk::AspireClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AspireClient::connect("http://127.0.0.1:9627").await?;
/// println!("{}", client.version().await?);
/// # Ok(())
/// # }
/// ```
pub struct AspireClient {
    client: HttpClient,
}

impl AspireClient {
    /// Connect to the bridge daemon
    ///
    /// # Arguments
    ///
    /// * `url` - RPC endpoint URL (e.g., `http://127.0.0.1:9627`)
    pub async fn connect(url: impl AsRef<str>) -> Result<Self> {
        Self::connect_with_timeout(url, DEFAULT_REQUEST_TIMEOUT).await
    }

    pub async fn connect_with_timeout(url: impl AsRef<str>, timeout: Duration) -> Result<Self> {
        let url = url.as_ref();

        let client = HttpClientBuilder::default()
            .request_timeout(timeout)
            .build(url)
            .map_err(|e| SdkError::Connection(format!("Failed to create client: {}", e)))?;

        Ok(Self { client })
    }

    /// List every tool the daemon exposes
    pub async fn list_tools(&self) -> Result<Vec<ToolInfo>> {
        let tools: Vec<ToolInfo> = self.client.request("tools.list.v1", rpc_params![]).await?;
        Ok(tools)
    }

    /// Call a tool by name
    ///
    /// # Arguments
    ///
    /// * `name` - Tool method name (e.g., `aspire_build`)
    /// * `params` - Parameter object, camelCase keys as listed by `list_tools`
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use aspire_sdk::AspireClient;
    /// # use serde_json::json;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = AspireClient::connect("http://127.0.0.1:9627").await?;
    /// let report = client
    ///     .call_tool("aspire_template_install", json!({ "templateSource": "Aspire.ProjectTemplates" }))
    ///     .await?;
    /// assert!(report.is_success(), "{}", report.standard_error);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn call_tool<P: Serialize>(&self, name: &str, params: P) -> Result<Report> {
        let text: String = self.client.request(name, rpc_params![params]).await?;
        Report::parse(&text)
    }

    /// Run an arbitrary `aspire` command line through `DynamicAspire`
    pub async fn execute(
        &self,
        command: impl Into<String>,
        working_directory: Option<&str>,
    ) -> Result<Report> {
        let request = DynamicRequest {
            command: command.into(),
            working_directory: working_directory.map(str::to_string),
        };
        self.call_tool("DynamicAspire", request).await
    }

    /// Version string printed by `aspire --version`
    pub async fn version(&self) -> Result<String> {
        let report = self.call_tool("aspire_version", serde_json::json!({})).await?;
        if !report.is_success() {
            return Err(SdkError::Other(format!(
                "aspire --version exited with code {}: {}",
                report.exit_code,
                report.standard_error.trim()
            )));
        }
        Ok(report.standard_output.trim().to_string())
    }

    /// Help text, for the whole CLI or one command
    pub async fn help(&self, command: Option<&str>) -> Result<Report> {
        let request = HelpRequest {
            command: command.map(str::to_string),
        };
        self.call_tool("aspire_help", request).await
    }
}
