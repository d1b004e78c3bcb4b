// Tool Catalog - typed parameters for every exposed Aspire CLI command
//
// Each tool is a plain serde struct. `arguments()` validates required
// parameters and maps every optional field to one flag-append rule; the
// executor never sees the struct, only the resulting argument string.

pub mod args;
pub mod core_commands;
pub mod dynamic;
pub mod templates;

pub use args::ArgumentBuilder;
pub use core_commands::{
    BuildTool, DashboardTool, DeployTool, DevTool, GenerateTool, HelpTool, InitTool, ListTool,
    LogsTool, PublishTool, RunTool, StatusTool, StopTool, UpdateTool, VersionTool,
};
pub use dynamic::DynamicTool;
pub use templates::{
    TemplateCreateTool, TemplateInfoTool, TemplateInstallTool, TemplateListTool,
    TemplatePackTool, TemplateSearchTool, TemplateSourceAddTool, TemplateSourceListTool,
    TemplateSourceRemoveTool, TemplateSourceUpdateTool, TemplateUninstallTool,
    TemplateValidateTool,
};

use crate::domain::error::Result;
use serde::Serialize;
use std::path::Path;

/// Parameter metadata (advertised by `tools.list.v1`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParameterSpec {
    pub name: &'static str,
    pub required: bool,
    pub description: &'static str,
}

impl ParameterSpec {
    pub const fn required(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            required: true,
            description,
        }
    }

    pub const fn optional(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            required: false,
            description,
        }
    }
}

/// Shared `workingDirectory` parameter
pub const WORKING_DIRECTORY: ParameterSpec =
    ParameterSpec::optional("workingDirectory", "Working directory");

/// Tool metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: &'static [ParameterSpec],
}

/// A catalog entry: typed parameters that render to an argument string
pub trait ToolCommand: Send + Sync + 'static {
    /// Method name exposed over RPC
    const NAME: &'static str;
    const DESCRIPTION: &'static str;
    const PARAMETERS: &'static [ParameterSpec];

    /// Validate and render the argument string (program name excluded)
    fn arguments(&self) -> Result<String>;

    /// Requested working directory, `None` for the caller's current one
    fn working_directory(&self) -> Option<&Path> {
        None
    }

    fn descriptor() -> ToolDescriptor
    where
        Self: Sized,
    {
        ToolDescriptor {
            name: Self::NAME,
            description: Self::DESCRIPTION,
            parameters: Self::PARAMETERS,
        }
    }
}

/// Treat `Some("")` the same as `None`
pub(crate) fn non_empty_dir(dir: &Option<std::path::PathBuf>) -> Option<&Path> {
    dir.as_deref().filter(|p| !p.as_os_str().is_empty())
}

/// Catalog grouped by origin, in registration order
pub fn categories() -> Vec<(&'static str, Vec<ToolDescriptor>)> {
    vec![
        (
            "core",
            vec![
                VersionTool::descriptor(),
                HelpTool::descriptor(),
                InitTool::descriptor(),
                DevTool::descriptor(),
                BuildTool::descriptor(),
                RunTool::descriptor(),
                StopTool::descriptor(),
                ListTool::descriptor(),
                PublishTool::descriptor(),
                DeployTool::descriptor(),
                GenerateTool::descriptor(),
                DashboardTool::descriptor(),
                TemplateListTool::descriptor(),
                TemplateInstallTool::descriptor(),
                TemplateUninstallTool::descriptor(),
                LogsTool::descriptor(),
                StatusTool::descriptor(),
                UpdateTool::descriptor(),
            ],
        ),
        ("dynamic", vec![DynamicTool::descriptor()]),
        (
            "template-extensions",
            vec![
                TemplateCreateTool::descriptor(),
                TemplatePackTool::descriptor(),
                TemplateValidateTool::descriptor(),
                TemplateSourceListTool::descriptor(),
                TemplateSourceAddTool::descriptor(),
                TemplateSourceRemoveTool::descriptor(),
                TemplateSourceUpdateTool::descriptor(),
                TemplateSearchTool::descriptor(),
                TemplateInfoTool::descriptor(),
            ],
        ),
    ]
}

/// Every tool in registration order
pub fn descriptors() -> Vec<ToolDescriptor> {
    categories()
        .into_iter()
        .flat_map(|(_, tools)| tools)
        .collect()
}

/// Look up a tool by its RPC method name
pub fn find(name: &str) -> Option<ToolDescriptor> {
    descriptors().into_iter().find(|d| d.name == name)
}
