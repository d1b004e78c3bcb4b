//! JSON-RPC Server
//!
//! JSON-RPC 2.0 over HTTP. One method per catalog tool, named after the tool,
//! plus `tools.list.v1`.

use crate::handler::RpcHandler;
use crate::types::parse_params;
use aspire_core::application::catalog::{
    BuildTool, DashboardTool, DeployTool, DevTool, DynamicTool, GenerateTool, HelpTool, InitTool,
    ListTool, LogsTool, PublishTool, RunTool, StatusTool, StopTool, TemplateCreateTool,
    TemplateInfoTool, TemplateInstallTool, TemplateListTool, TemplatePackTool, TemplateSearchTool,
    TemplateSourceAddTool, TemplateSourceListTool, TemplateSourceRemoveTool,
    TemplateSourceUpdateTool, TemplateUninstallTool, TemplateValidateTool, UpdateTool,
    VersionTool,
};
use aspire_core::application::{ToolCommand, ToolService};
use aspire_core::port::IdProvider;
use jsonrpsee::server::{Server, ServerHandle};
use jsonrpsee::RpcModule;
use serde::de::DeserializeOwned;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, info};

pub const DEFAULT_RPC_HOST: &str = "127.0.0.1";
pub const DEFAULT_RPC_PORT: u16 = 9627;

/// Discovery method
pub const LIST_TOOLS_METHOD: &str = "tools.list.v1";

/// RPC Server Configuration
#[derive(Debug, Clone)]
pub struct RpcServerConfig {
    pub host: String,
    /// `0` binds an ephemeral port (tests)
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

impl RpcServer {
    pub fn new(
        config: RpcServerConfig,
        service: Arc<ToolService>,
        id_provider: Arc<dyn IdProvider>,
    ) -> Self {
        Self {
            config,
            handler: Arc::new(RpcHandler::new(service, id_provider)),
        }
    }

    /// Build the method table without binding a socket
    pub fn module(&self) -> Result<RpcModule<()>, String> {
        let mut module = RpcModule::new(());

        register_tool::<VersionTool>(&mut module, &self.handler)?;
        register_tool::<HelpTool>(&mut module, &self.handler)?;
        register_tool::<InitTool>(&mut module, &self.handler)?;
        register_tool::<DevTool>(&mut module, &self.handler)?;
        register_tool::<BuildTool>(&mut module, &self.handler)?;
        register_tool::<RunTool>(&mut module, &self.handler)?;
        register_tool::<StopTool>(&mut module, &self.handler)?;
        register_tool::<ListTool>(&mut module, &self.handler)?;
        register_tool::<PublishTool>(&mut module, &self.handler)?;
        register_tool::<DeployTool>(&mut module, &self.handler)?;
        register_tool::<GenerateTool>(&mut module, &self.handler)?;
        register_tool::<DashboardTool>(&mut module, &self.handler)?;
        register_tool::<TemplateListTool>(&mut module, &self.handler)?;
        register_tool::<TemplateInstallTool>(&mut module, &self.handler)?;
        register_tool::<TemplateUninstallTool>(&mut module, &self.handler)?;
        register_tool::<LogsTool>(&mut module, &self.handler)?;
        register_tool::<StatusTool>(&mut module, &self.handler)?;
        register_tool::<UpdateTool>(&mut module, &self.handler)?;
        register_tool::<DynamicTool>(&mut module, &self.handler)?;
        register_tool::<TemplateCreateTool>(&mut module, &self.handler)?;
        register_tool::<TemplatePackTool>(&mut module, &self.handler)?;
        register_tool::<TemplateValidateTool>(&mut module, &self.handler)?;
        register_tool::<TemplateSourceListTool>(&mut module, &self.handler)?;
        register_tool::<TemplateSourceAddTool>(&mut module, &self.handler)?;
        register_tool::<TemplateSourceRemoveTool>(&mut module, &self.handler)?;
        register_tool::<TemplateSourceUpdateTool>(&mut module, &self.handler)?;
        register_tool::<TemplateSearchTool>(&mut module, &self.handler)?;
        register_tool::<TemplateInfoTool>(&mut module, &self.handler)?;

        let handler = self.handler.clone();
        module
            .register_async_method(LIST_TOOLS_METHOD, move |_, _, _| {
                let handler = handler.clone();
                async move { handler.list_tools().await }
            })
            .map_err(|e| e.to_string())?;

        Ok(module)
    }

    /// Start the JSON-RPC server
    ///
    /// Returns the bound address (useful with port `0`) and the handle that
    /// stops the server.
    pub async fn start(self) -> Result<(SocketAddr, ServerHandle), String> {
        let addr = format!("{}:{}", self.config.host, self.config.port);

        info!(
            host = %self.config.host,
            port = %self.config.port,
            "Starting JSON-RPC server"
        );

        let module = self.module()?;

        let server = Server::builder()
            .build(&addr)
            .await
            .map_err(|e| format!("Failed to build server on {}: {}", addr, e))?;

        let local_addr = server
            .local_addr()
            .map_err(|e| format!("Failed to read bound address: {}", e))?;

        info!(addr = %local_addr, methods = module.method_names().count(), "JSON-RPC server started successfully");

        let handle = server.start(module);
        Ok((local_addr, handle))
    }
}

/// Register one tool method: decode params into `T`, then run it
fn register_tool<T>(module: &mut RpcModule<()>, handler: &Arc<RpcHandler>) -> Result<(), String>
where
    T: ToolCommand + DeserializeOwned,
{
    let handler = handler.clone();
    module
        .register_async_method(T::NAME, move |params, _, _| {
            let handler = handler.clone();
            async move {
                let tool: T = parse_params(&params)?;
                handler.call_tool(tool).await
            }
        })
        .map_err(|e| e.to_string())?;

    debug!(method = T::NAME, "Registered tool method");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aspire_core::application::descriptors;
    use aspire_core::port::command_executor::mocks::MockCommandExecutor;
    use aspire_core::port::UuidProvider;
    use jsonrpsee::core::client::ClientT;
    use jsonrpsee::http_client::HttpClientBuilder;
    use jsonrpsee::rpc_params;
    use std::collections::HashSet;

    fn server(executor: Arc<MockCommandExecutor>, port: u16) -> RpcServer {
        RpcServer::new(
            RpcServerConfig {
                host: DEFAULT_RPC_HOST.to_string(),
                port,
            },
            Arc::new(ToolService::new(executor)),
            Arc::new(UuidProvider),
        )
    }

    #[test]
    fn test_every_catalog_tool_is_registered() {
        let module = server(Arc::new(MockCommandExecutor::new_success()), 0)
            .module()
            .unwrap();
        let methods: HashSet<&str> = module.method_names().collect();

        for descriptor in descriptors() {
            assert!(methods.contains(descriptor.name), "{} missing", descriptor.name);
        }
        assert!(methods.contains(LIST_TOOLS_METHOD));
        assert_eq!(methods.len(), descriptors().len() + 1);
    }

    #[tokio::test]
    async fn test_round_trip_over_http() {
        let executor = Arc::new(MockCommandExecutor::new_success());
        let (addr, handle) = server(executor.clone(), 0).start().await.unwrap();
        let client = HttpClientBuilder::default()
            .build(format!("http://{}", addr))
            .unwrap();

        let params = serde_json::json!({ "project": "App.csproj" });
        let report: String = client
            .request("aspire_build", rpc_params![params])
            .await
            .unwrap();

        assert!(report.contains("Exit Code: 0"));
        assert_eq!(
            executor.last_arguments().as_deref(),
            Some("build --project App.csproj")
        );

        handle.stop().unwrap();
    }

    #[tokio::test]
    async fn test_validation_error_over_http() {
        let executor = Arc::new(MockCommandExecutor::new_success());
        let (addr, handle) = server(executor.clone(), 0).start().await.unwrap();
        let client = HttpClientBuilder::default()
            .build(format!("http://{}", addr))
            .unwrap();

        let params = serde_json::json!({ "templateSource": "  " });
        let result: Result<String, _> = client
            .request("aspire_template_install", rpc_params![params])
            .await;

        match result {
            Err(jsonrpsee::core::ClientError::Call(err)) => {
                assert_eq!(err.code(), crate::error::code::VALIDATION_ERROR)
            }
            other => panic!("expected call error, got {:?}", other),
        }
        assert_eq!(executor.call_count(), 0);

        handle.stop().unwrap();
    }
}
