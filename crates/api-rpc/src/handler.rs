//! RPC Method Handlers
//!
//! Every tool method funnels through `call_tool`, which tags the call with an
//! invocation id and renders the result as the plain-text report.

use crate::error::to_rpc_error;
use crate::types::ToolInfo;
use aspire_core::application::{descriptors, ToolCommand, ToolService};
use aspire_core::port::IdProvider;
use jsonrpsee::types::ErrorObjectOwned;
use std::sync::Arc;
use tracing::{info, warn};

/// RPC Handler with injected dependencies
pub struct RpcHandler {
    service: Arc<ToolService>,
    id_provider: Arc<dyn IdProvider>,
}

impl RpcHandler {
    pub fn new(service: Arc<ToolService>, id_provider: Arc<dyn IdProvider>) -> Self {
        Self {
            service,
            id_provider,
        }
    }

    /// Any catalog tool method
    pub async fn call_tool<T: ToolCommand>(&self, tool: T) -> Result<String, ErrorObjectOwned> {
        let invocation_id = self.id_provider.generate_id();
        info!(invocation_id = %invocation_id, tool = T::NAME, "RPC tool call received");

        let result = self.service.invoke(&tool).await.map_err(|e| {
            warn!(invocation_id = %invocation_id, tool = T::NAME, error = %e, "RPC tool call rejected");
            to_rpc_error(e)
        })?;

        info!(
            invocation_id = %invocation_id,
            tool = T::NAME,
            exit_code = result.exit_code(),
            termination = result.termination().as_str(),
            "RPC tool call finished"
        );

        Ok(result.to_string())
    }

    /// tools.list.v1
    pub async fn list_tools(&self) -> Result<Vec<ToolInfo>, ErrorObjectOwned> {
        Ok(descriptors().into_iter().map(ToolInfo::from).collect())
    }
}
