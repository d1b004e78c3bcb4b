//! Catalog tools through ToolService and a real subprocess
//!
//! The stand-in CLI prints one argument per line, so each assertion checks
//! the exact argv the child received after quoting and splitting.

#![cfg(unix)]

mod common;

use std::sync::Arc;

use aspire_core::application::catalog::{
    DynamicTool, TemplateCreateTool, TemplateInstallTool, TemplateSearchTool, VersionTool,
};
use aspire_core::application::ToolService;
use aspire_core::error::AppError;
use aspire_infra_system::SubprocessExecutor;
use common::{canonical, FakeAspire};
use serde_json::json;

fn service(aspire: &FakeAspire) -> ToolService {
    ToolService::new(Arc::new(SubprocessExecutor::new(aspire.program())))
}

fn argv(stdout: &str) -> Vec<&str> {
    stdout.lines().collect()
}

#[tokio::test]
async fn test_version_tool() {
    let aspire = FakeAspire::install();

    let result = service(&aspire).invoke(&VersionTool::default()).await.unwrap();

    assert!(result.is_success());
    assert_eq!(result.standard_output(), "9.1.0+fake\n");
    assert_eq!(result.command(), format!("{} --version", aspire.program()));
}

#[tokio::test]
async fn test_values_with_spaces_survive_as_single_arguments() {
    let aspire = FakeAspire::install();
    let tool: TemplateCreateTool = serde_json::from_value(json!({
        "sourcePath": "./src/My App",
        "templateName": "starter",
        "description": "My starter template",
        "tags": "web,api"
    }))
    .unwrap();

    let result = service(&aspire).invoke(&tool).await.unwrap();

    assert!(result.is_success(), "{}", result);
    assert_eq!(
        argv(result.standard_output()),
        vec![
            "template",
            "create",
            "--source",
            "./src/My App",
            "--name",
            "starter",
            "--description",
            "My starter template",
            "--tags",
            "web,api",
        ]
    );
}

#[tokio::test]
async fn test_switches_and_numbers() {
    let aspire = FakeAspire::install();
    let tool: TemplateSearchTool = serde_json::from_value(json!({
        "query": "dapr",
        "maxResults": 5,
        "includePrerelease": true
    }))
    .unwrap();

    let result = service(&aspire).invoke(&tool).await.unwrap();

    assert_eq!(
        argv(result.standard_output()),
        vec![
            "template",
            "search",
            "dapr",
            "--max-results",
            "5",
            "--include-prerelease"
        ]
    );
}

#[tokio::test]
async fn test_missing_required_parameter_never_spawns() {
    let aspire = FakeAspire::install();

    let err = service(&aspire)
        .invoke(&TemplateInstallTool::default())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Domain(_)));
}

#[tokio::test]
async fn test_dynamic_tool_in_directory() {
    let aspire = FakeAspire::install();
    let dir = tempfile::tempdir().unwrap();

    let result = service(&aspire)
        .invoke(&DynamicTool::new("pwd").in_directory(dir.path()))
        .await
        .unwrap();

    assert_eq!(result.working_directory(), dir.path());
    assert_eq!(
        canonical(result.standard_output().trim_end()),
        canonical(dir.path())
    );
}

#[tokio::test]
async fn test_dynamic_failure_is_a_result() {
    let aspire = FakeAspire::install();

    let result = service(&aspire)
        .invoke(&DynamicTool::new("fail"))
        .await
        .unwrap();

    assert!(!result.is_success());
    assert_eq!(result.exit_code(), 3);
    assert_eq!(result.standard_error(), "simulated failure\n");
}
