//! Aspire CLI Bridge - Main Entry Point
//! Probes the Aspire CLI, then serves the tool catalog over JSON-RPC

mod config;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use aspire_api_rpc::RpcServer;
use aspire_core::application::{categories, ToolService};
use aspire_core::port::{CommandExecutor, UuidProvider, VERSION_ARGUMENT};
use aspire_infra_system::SubprocessExecutor;
use config::{DaemonConfig, LogFormat};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const INSTALL_HINT: &str = "Aspire CLI is not available. Install it with:\n    dotnet workload install aspire\nor point --program / ASPIRE_PROGRAM at the executable.";

fn init_tracing(config: &DaemonConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_filter()))
        .context("Failed to create env filter")?;

    match config.log_format {
        LogFormat::Json => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Configuration and logging
    let config = DaemonConfig::parse();
    init_tracing(&config)?;

    info!("Aspire CLI bridge v{} starting...", VERSION);

    // 2. Wire the executor
    let executor = Arc::new(
        SubprocessExecutor::new(config.program_path()).with_timeout(config.execution_timeout()),
    );
    let service = Arc::new(ToolService::new(executor.clone()));

    // 3. Availability probe
    info!(program = %service.program(), "Checking Aspire CLI availability...");
    if !service.is_available().await {
        error!(program = %service.program(), "Aspire CLI not found or not runnable");
        eprintln!("{}", INSTALL_HINT);
        std::process::exit(1);
    }

    let version = executor.execute(VERSION_ARGUMENT, None).await;
    info!(
        program = %service.program(),
        version = %version.standard_output().trim(),
        "Aspire CLI detected"
    );

    // 4. Start JSON-RPC server
    let rpc_server = RpcServer::new(config.rpc_config(), service, Arc::new(UuidProvider));
    let (addr, rpc_handle) = rpc_server
        .start()
        .await
        .map_err(|e| anyhow!("RPC server start failed: {}", e))?;

    for (category, tools) in categories() {
        let names: Vec<&str> = tools.iter().map(|tool| tool.name).collect();
        info!(
            category,
            count = tools.len(),
            tools = %names.join(", "),
            "Registered tool category"
        );
    }

    info!(addr = %addr, "✅ Aspire CLI bridge ready");
    info!("Press Ctrl+C to shutdown");

    // 5. Wait for shutdown signal
    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for shutdown signal")?;

    info!("Shutdown signal received. Exiting gracefully...");

    rpc_handle
        .stop()
        .map_err(|e| anyhow!("RPC server stop failed: {}", e))?;
    rpc_handle.stopped().await;

    info!("Shutdown complete.");

    Ok(())
}
