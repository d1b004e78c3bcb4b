//! Daemon wiring end to end: SDK -> JSON-RPC -> ToolService -> subprocess

#![cfg(unix)]

mod common;

use std::sync::Arc;

use aspire_api_rpc::error::code;
use aspire_api_rpc::{RpcServer, RpcServerConfig, ServerHandle};
use aspire_core::application::{descriptors, ToolService};
use aspire_core::port::UuidProvider;
use aspire_infra_system::SubprocessExecutor;
use aspire_sdk::{AspireClient, SdkError};
use common::{canonical, FakeAspire};
use serde_json::json;

/// Server on an ephemeral port plus a connected client
async fn start(aspire: &FakeAspire) -> (AspireClient, ServerHandle) {
    let service = Arc::new(ToolService::new(Arc::new(SubprocessExecutor::new(
        aspire.program(),
    ))));
    let config = RpcServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
    };

    let (addr, handle) = RpcServer::new(config, service, Arc::new(UuidProvider))
        .start()
        .await
        .unwrap();
    let client = AspireClient::connect(format!("http://{}", addr))
        .await
        .unwrap();

    (client, handle)
}

fn rpc_code(err: SdkError) -> i32 {
    match err {
        SdkError::Rpc { code, .. } => code,
        other => panic!("expected RPC error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_list_tools_matches_catalog() {
    let aspire = FakeAspire::install();
    let (client, handle) = start(&aspire).await;

    let tools = client.list_tools().await.unwrap();

    let expected: Vec<&str> = descriptors().iter().map(|d| d.name).collect();
    let actual: Vec<&str> = tools.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(actual, expected);

    let install = tools
        .iter()
        .find(|t| t.name == "aspire_template_install")
        .unwrap();
    assert!(install.parameters[0].required);

    handle.stop().unwrap();
}

#[tokio::test]
async fn test_call_tool_returns_report() {
    let aspire = FakeAspire::install();
    let (client, handle) = start(&aspire).await;

    let report = client
        .call_tool(
            "aspire_build",
            json!({ "project": "App Host.csproj", "configuration": "Release" }),
        )
        .await
        .unwrap();

    assert!(report.is_success());
    assert!(report.raw.contains("Exit Code: 0"));
    assert_eq!(
        report.standard_output,
        "build\n--project\nApp Host.csproj\n--configuration\nRelease\n"
    );
    assert!(report.execution_time_ms > 0.0);

    handle.stop().unwrap();
}

#[tokio::test]
async fn test_version_and_help() {
    let aspire = FakeAspire::install();
    let (client, handle) = start(&aspire).await;

    assert_eq!(client.version().await.unwrap(), "9.1.0+fake");

    let help = client.help(Some("template install")).await.unwrap();
    assert_eq!(help.standard_output, "help\ntemplate\ninstall\n");

    handle.stop().unwrap();
}

#[tokio::test]
async fn test_execute_in_directory() {
    let aspire = FakeAspire::install();
    let dir = tempfile::tempdir().unwrap();
    let (client, handle) = start(&aspire).await;

    let report = client
        .execute("pwd", Some(dir.path().to_str().unwrap()))
        .await
        .unwrap();

    assert_eq!(report.working_directory, dir.path().display().to_string());
    assert_eq!(
        canonical(report.standard_output.trim_end()),
        canonical(dir.path())
    );

    handle.stop().unwrap();
}

#[tokio::test]
async fn test_failed_process_is_a_report_not_an_error() {
    let aspire = FakeAspire::install();
    let (client, handle) = start(&aspire).await;

    let report = client.execute("fail", None).await.unwrap();

    assert_eq!(report.exit_code, 3);
    assert_eq!(report.standard_error, "simulated failure\n");

    handle.stop().unwrap();
}

#[tokio::test]
async fn test_error_codes() {
    let aspire = FakeAspire::install();
    let (client, handle) = start(&aspire).await;

    // Blank required value: validation
    let err = client
        .call_tool("aspire_template_uninstall", json!({ "templateName": " " }))
        .await
        .unwrap_err();
    assert_eq!(rpc_code(err), code::VALIDATION_ERROR);

    // Required field absent: invalid params
    let err = client
        .call_tool("aspire_template_uninstall", json!({}))
        .await
        .unwrap_err();
    assert_eq!(rpc_code(err), code::INVALID_PARAMS);

    // Wrong type: invalid params
    let err = client
        .call_tool("aspire_dev", json!({ "port": "not-a-port" }))
        .await
        .unwrap_err();
    assert_eq!(rpc_code(err), code::INVALID_PARAMS);

    // Unknown method
    let err = client
        .call_tool("aspire_does_not_exist", json!({}))
        .await
        .unwrap_err();
    assert_eq!(rpc_code(err), -32601);

    handle.stop().unwrap();
}
