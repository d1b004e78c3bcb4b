// Core Aspire CLI commands: info, project lifecycle, app management

use super::args::ArgumentBuilder;
use super::{non_empty_dir, ParameterSpec, ToolCommand, WORKING_DIRECTORY};
use crate::domain::error::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

fn enabled() -> bool {
    true
}

const PROJECT: ParameterSpec = ParameterSpec::optional("project", "Path to the AppHost project");
const CONFIGURATION: ParameterSpec =
    ParameterSpec::optional("configuration", "Build configuration (Debug/Release)");
const FRAMEWORK: ParameterSpec = ParameterSpec::optional("framework", "Target framework");
const LAUNCH_BROWSER: ParameterSpec = ParameterSpec::optional("launchBrowser", "Launch browser");
const DASHBOARD_PORT: ParameterSpec = ParameterSpec::optional("port", "Port for the dashboard");

/// aspire_version
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VersionTool {}

impl ToolCommand for VersionTool {
    const NAME: &'static str = "aspire_version";
    const DESCRIPTION: &'static str = "Gets the installed .NET Aspire CLI version";
    const PARAMETERS: &'static [ParameterSpec] = &[];

    fn arguments(&self) -> Result<String> {
        Ok(crate::port::VERSION_ARGUMENT.to_string())
    }
}

/// aspire_help
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpTool {
    pub command: Option<String>,
}

impl ToolCommand for HelpTool {
    const NAME: &'static str = "aspire_help";
    const DESCRIPTION: &'static str = "Displays .NET Aspire CLI help information";
    const PARAMETERS: &'static [ParameterSpec] = &[ParameterSpec::optional(
        "command",
        "Specific command to get help for",
    )];

    fn arguments(&self) -> Result<String> {
        // Subcommand paths like "template install" stay as separate words
        let mut builder = ArgumentBuilder::new("help");
        if let Some(command) = self.command.as_deref() {
            for word in command.split_whitespace() {
                builder = builder.value(word);
            }
        }
        Ok(builder.build())
    }
}

/// aspire_init
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitTool {
    pub name: Option<String>,
    pub output: Option<String>,
    pub template: Option<String>,
    pub working_directory: Option<PathBuf>,
}

impl ToolCommand for InitTool {
    const NAME: &'static str = "aspire_init";
    const DESCRIPTION: &'static str = "Initializes a new .NET Aspire project";
    const PARAMETERS: &'static [ParameterSpec] = &[
        ParameterSpec::optional("name", "Project name"),
        ParameterSpec::optional("output", "Output directory"),
        ParameterSpec::optional("template", "Template to use"),
        WORKING_DIRECTORY,
    ];

    fn arguments(&self) -> Result<String> {
        Ok(ArgumentBuilder::new("init")
            .option("--name", self.name.as_deref())
            .option("--output", self.output.as_deref())
            .option("--template", self.template.as_deref())
            .build())
    }

    fn working_directory(&self) -> Option<&Path> {
        non_empty_dir(&self.working_directory)
    }
}

/// aspire_dev
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevTool {
    pub project: Option<String>,
    #[serde(default = "enabled")]
    pub launch_browser: bool,
    pub port: Option<u16>,
    pub working_directory: Option<PathBuf>,
}

impl Default for DevTool {
    fn default() -> Self {
        Self {
            project: None,
            launch_browser: true,
            port: None,
            working_directory: None,
        }
    }
}

impl ToolCommand for DevTool {
    const NAME: &'static str = "aspire_dev";
    const DESCRIPTION: &'static str = "Starts the .NET Aspire development environment";
    const PARAMETERS: &'static [ParameterSpec] =
        &[PROJECT, LAUNCH_BROWSER, DASHBOARD_PORT, WORKING_DIRECTORY];

    fn arguments(&self) -> Result<String> {
        Ok(ArgumentBuilder::new("dev")
            .option("--project", self.project.as_deref())
            .switch("--no-launch-browser", !self.launch_browser)
            .option("--port", self.port)
            .build())
    }

    fn working_directory(&self) -> Option<&Path> {
        non_empty_dir(&self.working_directory)
    }
}

/// aspire_build
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildTool {
    pub project: Option<String>,
    pub configuration: Option<String>,
    pub framework: Option<String>,
    pub working_directory: Option<PathBuf>,
}

impl ToolCommand for BuildTool {
    const NAME: &'static str = "aspire_build";
    const DESCRIPTION: &'static str = "Builds an .NET Aspire application";
    const PARAMETERS: &'static [ParameterSpec] =
        &[PROJECT, CONFIGURATION, FRAMEWORK, WORKING_DIRECTORY];

    fn arguments(&self) -> Result<String> {
        Ok(ArgumentBuilder::new("build")
            .option("--project", self.project.as_deref())
            .option("--configuration", self.configuration.as_deref())
            .option("--framework", self.framework.as_deref())
            .build())
    }

    fn working_directory(&self) -> Option<&Path> {
        non_empty_dir(&self.working_directory)
    }
}

/// aspire_run
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunTool {
    pub project: Option<String>,
    pub configuration: Option<String>,
    pub framework: Option<String>,
    #[serde(default = "enabled")]
    pub launch_browser: bool,
    pub working_directory: Option<PathBuf>,
}

impl Default for RunTool {
    fn default() -> Self {
        Self {
            project: None,
            configuration: None,
            framework: None,
            launch_browser: true,
            working_directory: None,
        }
    }
}

impl ToolCommand for RunTool {
    const NAME: &'static str = "aspire_run";
    const DESCRIPTION: &'static str = "Runs an .NET Aspire application";
    const PARAMETERS: &'static [ParameterSpec] = &[
        PROJECT,
        CONFIGURATION,
        FRAMEWORK,
        LAUNCH_BROWSER,
        WORKING_DIRECTORY,
    ];

    fn arguments(&self) -> Result<String> {
        Ok(ArgumentBuilder::new("run")
            .option("--project", self.project.as_deref())
            .option("--configuration", self.configuration.as_deref())
            .option("--framework", self.framework.as_deref())
            .switch("--no-launch-browser", !self.launch_browser)
            .build())
    }

    fn working_directory(&self) -> Option<&Path> {
        non_empty_dir(&self.working_directory)
    }
}

/// aspire_stop
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopTool {
    pub app_id: Option<String>,
    pub working_directory: Option<PathBuf>,
}

impl ToolCommand for StopTool {
    const NAME: &'static str = "aspire_stop";
    const DESCRIPTION: &'static str = "Stops running .NET Aspire applications";
    const PARAMETERS: &'static [ParameterSpec] = &[
        ParameterSpec::optional("appId", "Application ID to stop"),
        WORKING_DIRECTORY,
    ];

    fn arguments(&self) -> Result<String> {
        Ok(ArgumentBuilder::new("stop")
            .positional(self.app_id.as_deref())
            .build())
    }

    fn working_directory(&self) -> Option<&Path> {
        non_empty_dir(&self.working_directory)
    }
}

/// aspire_list
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTool {
    pub working_directory: Option<PathBuf>,
}

impl ToolCommand for ListTool {
    const NAME: &'static str = "aspire_list";
    const DESCRIPTION: &'static str = "Lists running .NET Aspire applications";
    const PARAMETERS: &'static [ParameterSpec] = &[WORKING_DIRECTORY];

    fn arguments(&self) -> Result<String> {
        Ok(ArgumentBuilder::new("list").build())
    }

    fn working_directory(&self) -> Option<&Path> {
        non_empty_dir(&self.working_directory)
    }
}

/// aspire_publish
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishTool {
    pub project: Option<String>,
    pub configuration: Option<String>,
    pub framework: Option<String>,
    pub output: Option<String>,
    pub registry: Option<String>,
    pub tag: Option<String>,
    pub working_directory: Option<PathBuf>,
}

impl ToolCommand for PublishTool {
    const NAME: &'static str = "aspire_publish";
    const DESCRIPTION: &'static str = "Publishes a .NET Aspire application";
    const PARAMETERS: &'static [ParameterSpec] = &[
        PROJECT,
        CONFIGURATION,
        FRAMEWORK,
        ParameterSpec::optional("output", "Output directory"),
        ParameterSpec::optional("registry", "Container registry"),
        ParameterSpec::optional("tag", "Container image tag"),
        WORKING_DIRECTORY,
    ];

    fn arguments(&self) -> Result<String> {
        Ok(ArgumentBuilder::new("publish")
            .option("--project", self.project.as_deref())
            .option("--configuration", self.configuration.as_deref())
            .option("--framework", self.framework.as_deref())
            .option("--output", self.output.as_deref())
            .option("--registry", self.registry.as_deref())
            .option("--tag", self.tag.as_deref())
            .build())
    }

    fn working_directory(&self) -> Option<&Path> {
        non_empty_dir(&self.working_directory)
    }
}

/// aspire_deploy
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployTool {
    pub manifest: Option<String>,
    pub environment: Option<String>,
    pub config: Option<String>,
    pub working_directory: Option<PathBuf>,
}

impl ToolCommand for DeployTool {
    const NAME: &'static str = "aspire_deploy";
    const DESCRIPTION: &'static str = "Deploys a .NET Aspire application";
    const PARAMETERS: &'static [ParameterSpec] = &[
        ParameterSpec::optional("manifest", "Path to the manifest file"),
        ParameterSpec::optional("environment", "Target environment"),
        ParameterSpec::optional("config", "Configuration values"),
        WORKING_DIRECTORY,
    ];

    fn arguments(&self) -> Result<String> {
        Ok(ArgumentBuilder::new("deploy")
            .option("--manifest", self.manifest.as_deref())
            .option("--environment", self.environment.as_deref())
            .option("--config", self.config.as_deref())
            .build())
    }

    fn working_directory(&self) -> Option<&Path> {
        non_empty_dir(&self.working_directory)
    }
}

/// aspire_generate
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateTool {
    pub project: Option<String>,
    pub output: Option<String>,
    pub format: Option<String>,
    pub working_directory: Option<PathBuf>,
}

impl ToolCommand for GenerateTool {
    const NAME: &'static str = "aspire_generate";
    const DESCRIPTION: &'static str =
        "Generates deployment manifests for .NET Aspire applications";
    const PARAMETERS: &'static [ParameterSpec] = &[
        PROJECT,
        ParameterSpec::optional("output", "Output directory for manifests"),
        ParameterSpec::optional("format", "Target format (k8s, docker-compose, etc.)"),
        WORKING_DIRECTORY,
    ];

    fn arguments(&self) -> Result<String> {
        Ok(ArgumentBuilder::new("generate")
            .option("--project", self.project.as_deref())
            .option("--output", self.output.as_deref())
            .option("--format", self.format.as_deref())
            .build())
    }

    fn working_directory(&self) -> Option<&Path> {
        non_empty_dir(&self.working_directory)
    }
}

/// aspire_dashboard
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardTool {
    pub url: Option<String>,
    pub port: Option<u16>,
    #[serde(default = "enabled")]
    pub launch_browser: bool,
    pub working_directory: Option<PathBuf>,
}

impl Default for DashboardTool {
    fn default() -> Self {
        Self {
            url: None,
            port: None,
            launch_browser: true,
            working_directory: None,
        }
    }
}

impl ToolCommand for DashboardTool {
    const NAME: &'static str = "aspire_dashboard";
    const DESCRIPTION: &'static str = "Opens or manages the .NET Aspire Dashboard";
    const PARAMETERS: &'static [ParameterSpec] = &[
        ParameterSpec::optional("url", "Dashboard URL or connection string"),
        DASHBOARD_PORT,
        LAUNCH_BROWSER,
        WORKING_DIRECTORY,
    ];

    fn arguments(&self) -> Result<String> {
        Ok(ArgumentBuilder::new("dashboard")
            .option("--url", self.url.as_deref())
            .option("--port", self.port)
            .switch("--no-launch-browser", !self.launch_browser)
            .build())
    }

    fn working_directory(&self) -> Option<&Path> {
        non_empty_dir(&self.working_directory)
    }
}

/// aspire_logs
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsTool {
    pub service: Option<String>,
    #[serde(default)]
    pub follow: bool,
    pub lines: Option<u32>,
    pub working_directory: Option<PathBuf>,
}

impl ToolCommand for LogsTool {
    const NAME: &'static str = "aspire_logs";
    const DESCRIPTION: &'static str = "Views logs from .NET Aspire applications";
    const PARAMETERS: &'static [ParameterSpec] = &[
        ParameterSpec::optional("service", "Application or service name"),
        ParameterSpec::optional("follow", "Follow log output"),
        ParameterSpec::optional("lines", "Number of log lines to show"),
        WORKING_DIRECTORY,
    ];

    fn arguments(&self) -> Result<String> {
        Ok(ArgumentBuilder::new("logs")
            .positional(self.service.as_deref())
            .switch("--follow", self.follow)
            .option("--tail", self.lines)
            .build())
    }

    fn working_directory(&self) -> Option<&Path> {
        non_empty_dir(&self.working_directory)
    }
}

/// aspire_status
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusTool {
    pub target: Option<String>,
    #[serde(default)]
    pub detailed: bool,
    pub working_directory: Option<PathBuf>,
}

impl ToolCommand for StatusTool {
    const NAME: &'static str = "aspire_status";
    const DESCRIPTION: &'static str = "Shows status of .NET Aspire applications and services";
    const PARAMETERS: &'static [ParameterSpec] = &[
        ParameterSpec::optional("target", "Application or service name"),
        ParameterSpec::optional("detailed", "Show detailed status"),
        WORKING_DIRECTORY,
    ];

    fn arguments(&self) -> Result<String> {
        Ok(ArgumentBuilder::new("status")
            .positional(self.target.as_deref())
            .switch("--detailed", self.detailed)
            .build())
    }

    fn working_directory(&self) -> Option<&Path> {
        non_empty_dir(&self.working_directory)
    }
}

/// aspire_update
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTool {
    #[serde(default)]
    pub check_only: bool,
    pub working_directory: Option<PathBuf>,
}

impl ToolCommand for UpdateTool {
    const NAME: &'static str = "aspire_update";
    const DESCRIPTION: &'static str = "Updates .NET Aspire CLI and templates";
    const PARAMETERS: &'static [ParameterSpec] = &[
        ParameterSpec::optional("checkOnly", "Check for updates only"),
        WORKING_DIRECTORY,
    ];

    fn arguments(&self) -> Result<String> {
        Ok(ArgumentBuilder::new("update")
            .switch("--check", self.check_only)
            .build())
    }

    fn working_directory(&self) -> Option<&Path> {
        non_empty_dir(&self.working_directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_version_and_help() {
        assert_eq!(VersionTool::default().arguments().unwrap(), "--version");
        assert_eq!(HelpTool::default().arguments().unwrap(), "help");

        let help = HelpTool {
            command: Some("init".to_string()),
        };
        assert_eq!(help.arguments().unwrap(), "help init");
    }

    #[test]
    fn test_init_with_parameters() {
        let tool = InitTool {
            name: Some("TestProject".to_string()),
            output: Some("./test".to_string()),
            template: Some("aspire-starter".to_string()),
            working_directory: Some(PathBuf::from("/tmp/work")),
        };

        assert_eq!(
            tool.arguments().unwrap(),
            "init --name TestProject --output ./test --template aspire-starter"
        );
        assert_eq!(tool.working_directory(), Some(Path::new("/tmp/work")));
    }

    #[test]
    fn test_dev_defaults_launch_browser() {
        let tool: DevTool = serde_json::from_value(json!({
            "project": "MyApp.AppHost",
            "port": 15000
        }))
        .unwrap();

        assert!(tool.launch_browser);
        assert_eq!(
            tool.arguments().unwrap(),
            "dev --project MyApp.AppHost --port 15000"
        );
    }

    #[test]
    fn test_dev_no_launch_browser() {
        let tool = DevTool {
            launch_browser: false,
            ..Default::default()
        };
        assert_eq!(tool.arguments().unwrap(), "dev --no-launch-browser");
    }

    #[test]
    fn test_build_with_all_parameters() {
        let tool = BuildTool {
            project: Some("MyApp.AppHost".to_string()),
            configuration: Some("Release".to_string()),
            framework: Some("net9.0".to_string()),
            working_directory: None,
        };

        assert_eq!(
            tool.arguments().unwrap(),
            "build --project MyApp.AppHost --configuration Release --framework net9.0"
        );
    }

    #[test]
    fn test_run_flags() {
        let tool: RunTool = serde_json::from_value(json!({
            "configuration": "Debug",
            "launchBrowser": false
        }))
        .unwrap();

        assert_eq!(
            tool.arguments().unwrap(),
            "run --configuration Debug --no-launch-browser"
        );
    }

    #[test]
    fn test_publish_registry_and_tag() {
        let tool = PublishTool {
            registry: Some("myregistry.azurecr.io".to_string()),
            tag: Some("v1.0.0".to_string()),
            ..Default::default()
        };

        assert_eq!(
            tool.arguments().unwrap(),
            "publish --registry myregistry.azurecr.io --tag v1.0.0"
        );
    }

    #[test]
    fn test_logs_follow_and_lines() {
        let tool = LogsTool {
            service: Some("webapi".to_string()),
            follow: true,
            lines: Some(100),
            working_directory: None,
        };

        assert_eq!(tool.arguments().unwrap(), "logs webapi --follow --tail 100");
    }

    #[test]
    fn test_stop_status_update() {
        let stop = StopTool {
            app_id: Some("app-42".to_string()),
            working_directory: None,
        };
        assert_eq!(stop.arguments().unwrap(), "stop app-42");

        let status = StatusTool {
            target: None,
            detailed: true,
            working_directory: None,
        };
        assert_eq!(status.arguments().unwrap(), "status --detailed");

        let update = UpdateTool {
            check_only: true,
            working_directory: None,
        };
        assert_eq!(update.arguments().unwrap(), "update --check");
    }

    #[test]
    fn test_dashboard_and_deploy() {
        let dashboard = DashboardTool {
            url: Some("http://localhost:18888".to_string()),
            port: Some(18888),
            ..Default::default()
        };
        assert_eq!(
            dashboard.arguments().unwrap(),
            "dashboard --url http://localhost:18888 --port 18888"
        );

        let deploy: DeployTool = serde_json::from_value(json!({
            "manifest": "aspire-manifest.json",
            "environment": "staging"
        }))
        .unwrap();
        assert_eq!(
            deploy.arguments().unwrap(),
            "deploy --manifest aspire-manifest.json --environment staging"
        );
    }

    #[test]
    fn test_empty_working_directory_is_ignored() {
        let tool: ListTool = serde_json::from_value(json!({ "workingDirectory": "" })).unwrap();

        assert_eq!(tool.arguments().unwrap(), "list");
        assert_eq!(tool.working_directory(), None);
    }
}
