// Template management: install/uninstall, authoring, template sources

use super::args::{require, ArgumentBuilder};
use super::{non_empty_dir, ParameterSpec, ToolCommand, WORKING_DIRECTORY};
use crate::domain::error::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

fn enabled() -> bool {
    true
}

const TEMPLATE_PATH: ParameterSpec =
    ParameterSpec::required("templatePath", "Path to template directory");
const SOURCE_NAME: ParameterSpec = ParameterSpec::required("name", "Source name");

/// aspire_template_list
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateListTool {
    pub working_directory: Option<PathBuf>,
}

impl ToolCommand for TemplateListTool {
    const NAME: &'static str = "aspire_template_list";
    const DESCRIPTION: &'static str = "Lists available .NET Aspire project templates";
    const PARAMETERS: &'static [ParameterSpec] = &[WORKING_DIRECTORY];

    fn arguments(&self) -> Result<String> {
        Ok(ArgumentBuilder::new("template list").build())
    }

    fn working_directory(&self) -> Option<&Path> {
        non_empty_dir(&self.working_directory)
    }
}

/// aspire_template_install
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateInstallTool {
    pub template_source: String,
    pub working_directory: Option<PathBuf>,
}

impl ToolCommand for TemplateInstallTool {
    const NAME: &'static str = "aspire_template_install";
    const DESCRIPTION: &'static str = "Installs .NET Aspire project templates";
    const PARAMETERS: &'static [ParameterSpec] = &[
        ParameterSpec::required("templateSource", "Template package or path"),
        WORKING_DIRECTORY,
    ];

    fn arguments(&self) -> Result<String> {
        let source = require(Self::NAME, "templateSource", &self.template_source)?;
        Ok(ArgumentBuilder::new("template install").value(source).build())
    }

    fn working_directory(&self) -> Option<&Path> {
        non_empty_dir(&self.working_directory)
    }
}

/// aspire_template_uninstall
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateUninstallTool {
    pub template_name: String,
    pub working_directory: Option<PathBuf>,
}

impl ToolCommand for TemplateUninstallTool {
    const NAME: &'static str = "aspire_template_uninstall";
    const DESCRIPTION: &'static str = "Uninstalls .NET Aspire project templates";
    const PARAMETERS: &'static [ParameterSpec] = &[
        ParameterSpec::required("templateName", "Template package name"),
        WORKING_DIRECTORY,
    ];

    fn arguments(&self) -> Result<String> {
        let name = require(Self::NAME, "templateName", &self.template_name)?;
        Ok(ArgumentBuilder::new("template uninstall").value(name).build())
    }

    fn working_directory(&self) -> Option<&Path> {
        non_empty_dir(&self.working_directory)
    }
}

/// aspire_template_create
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateCreateTool {
    pub source_path: String,
    pub template_name: String,
    pub description: Option<String>,
    pub author: Option<String>,
    pub tags: Option<String>,
    pub output: Option<String>,
    pub working_directory: Option<PathBuf>,
}

impl ToolCommand for TemplateCreateTool {
    const NAME: &'static str = "aspire_template_create";
    const DESCRIPTION: &'static str =
        "Creates a custom Aspire project template from an existing project";
    const PARAMETERS: &'static [ParameterSpec] = &[
        ParameterSpec::required("sourcePath", "Path to source project to create template from"),
        ParameterSpec::required("templateName", "Template name"),
        ParameterSpec::optional("description", "Template description"),
        ParameterSpec::optional("author", "Template author"),
        ParameterSpec::optional("tags", "Template tags (comma-separated)"),
        ParameterSpec::optional("output", "Output directory for template package"),
        WORKING_DIRECTORY,
    ];

    fn arguments(&self) -> Result<String> {
        let source = require(Self::NAME, "sourcePath", &self.source_path)?;
        let name = require(Self::NAME, "templateName", &self.template_name)?;

        Ok(ArgumentBuilder::new("template create")
            .option("--source", Some(source))
            .option("--name", Some(name))
            .option("--description", self.description.as_deref())
            .option("--author", self.author.as_deref())
            .option("--tags", self.tags.as_deref())
            .option("--output", self.output.as_deref())
            .build())
    }

    fn working_directory(&self) -> Option<&Path> {
        non_empty_dir(&self.working_directory)
    }
}

/// aspire_template_pack
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplatePackTool {
    pub template_path: String,
    pub output: Option<String>,
    pub version: Option<String>,
    #[serde(default)]
    pub include_symbols: bool,
    pub working_directory: Option<PathBuf>,
}

impl ToolCommand for TemplatePackTool {
    const NAME: &'static str = "aspire_template_pack";
    const DESCRIPTION: &'static str = "Packages an Aspire template for distribution";
    const PARAMETERS: &'static [ParameterSpec] = &[
        TEMPLATE_PATH,
        ParameterSpec::optional("output", "Output directory for package"),
        ParameterSpec::optional("version", "Package version"),
        ParameterSpec::optional("includeSymbols", "Include symbols"),
        WORKING_DIRECTORY,
    ];

    fn arguments(&self) -> Result<String> {
        let path = require(Self::NAME, "templatePath", &self.template_path)?;

        Ok(ArgumentBuilder::new("template pack")
            .value(path)
            .option("--output", self.output.as_deref())
            .option("--version", self.version.as_deref())
            .switch("--include-symbols", self.include_symbols)
            .build())
    }

    fn working_directory(&self) -> Option<&Path> {
        non_empty_dir(&self.working_directory)
    }
}

/// aspire_template_validate
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateValidateTool {
    pub template_path: String,
    #[serde(default = "enabled")]
    pub validate_dependencies: bool,
    #[serde(default = "enabled")]
    pub check_metadata: bool,
    pub working_directory: Option<PathBuf>,
}

impl TemplateValidateTool {
    pub fn new(template_path: impl Into<String>) -> Self {
        Self {
            template_path: template_path.into(),
            validate_dependencies: true,
            check_metadata: true,
            working_directory: None,
        }
    }
}

impl ToolCommand for TemplateValidateTool {
    const NAME: &'static str = "aspire_template_validate";
    const DESCRIPTION: &'static str = "Validates an Aspire template structure and configuration";
    const PARAMETERS: &'static [ParameterSpec] = &[
        TEMPLATE_PATH,
        ParameterSpec::optional("validateDependencies", "Validate dependencies"),
        ParameterSpec::optional("checkMetadata", "Check template metadata"),
        WORKING_DIRECTORY,
    ];

    fn arguments(&self) -> Result<String> {
        let path = require(Self::NAME, "templatePath", &self.template_path)?;

        Ok(ArgumentBuilder::new("template validate")
            .value(path)
            .switch("--validate-dependencies", self.validate_dependencies)
            .switch("--check-metadata", self.check_metadata)
            .build())
    }

    fn working_directory(&self) -> Option<&Path> {
        non_empty_dir(&self.working_directory)
    }
}

/// aspire_template_source_list
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSourceListTool {
    #[serde(default = "enabled")]
    pub include_remote: bool,
    #[serde(default)]
    pub detailed: bool,
    pub working_directory: Option<PathBuf>,
}

impl Default for TemplateSourceListTool {
    fn default() -> Self {
        Self {
            include_remote: true,
            detailed: false,
            working_directory: None,
        }
    }
}

impl ToolCommand for TemplateSourceListTool {
    const NAME: &'static str = "aspire_template_source_list";
    const DESCRIPTION: &'static str = "Lists all available Aspire template sources";
    const PARAMETERS: &'static [ParameterSpec] = &[
        ParameterSpec::optional("includeRemote", "Include remote sources"),
        ParameterSpec::optional("detailed", "Show detailed information"),
        WORKING_DIRECTORY,
    ];

    fn arguments(&self) -> Result<String> {
        Ok(ArgumentBuilder::new("template source list")
            .switch("--include-remote", self.include_remote)
            .switch("--detailed", self.detailed)
            .build())
    }

    fn working_directory(&self) -> Option<&Path> {
        non_empty_dir(&self.working_directory)
    }
}

/// aspire_template_source_add
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSourceAddTool {
    pub name: String,
    pub source: String,
    pub priority: Option<i32>,
    pub token: Option<String>,
    pub working_directory: Option<PathBuf>,
}

impl ToolCommand for TemplateSourceAddTool {
    const NAME: &'static str = "aspire_template_source_add";
    const DESCRIPTION: &'static str = "Adds a new Aspire template source";
    const PARAMETERS: &'static [ParameterSpec] = &[
        SOURCE_NAME,
        ParameterSpec::required("source", "Source URL or path"),
        ParameterSpec::optional("priority", "Source priority"),
        ParameterSpec::optional("token", "Authentication token"),
        WORKING_DIRECTORY,
    ];

    fn arguments(&self) -> Result<String> {
        let name = require(Self::NAME, "name", &self.name)?;
        let source = require(Self::NAME, "source", &self.source)?;

        Ok(ArgumentBuilder::new("template source add")
            .value(name)
            .value(source)
            .option("--priority", self.priority)
            .option("--token", self.token.as_deref())
            .build())
    }

    fn working_directory(&self) -> Option<&Path> {
        non_empty_dir(&self.working_directory)
    }
}

/// aspire_template_source_remove
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSourceRemoveTool {
    pub name: String,
    pub working_directory: Option<PathBuf>,
}

impl ToolCommand for TemplateSourceRemoveTool {
    const NAME: &'static str = "aspire_template_source_remove";
    const DESCRIPTION: &'static str = "Removes an Aspire template source";
    const PARAMETERS: &'static [ParameterSpec] = &[SOURCE_NAME, WORKING_DIRECTORY];

    fn arguments(&self) -> Result<String> {
        let name = require(Self::NAME, "name", &self.name)?;
        Ok(ArgumentBuilder::new("template source remove")
            .value(name)
            .build())
    }

    fn working_directory(&self) -> Option<&Path> {
        non_empty_dir(&self.working_directory)
    }
}

/// aspire_template_source_update
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSourceUpdateTool {
    #[serde(default)]
    pub force: bool,
    /// Seconds
    pub timeout: Option<u32>,
    pub working_directory: Option<PathBuf>,
}

impl ToolCommand for TemplateSourceUpdateTool {
    const NAME: &'static str = "aspire_template_source_update";
    const DESCRIPTION: &'static str = "Updates all Aspire template sources";
    const PARAMETERS: &'static [ParameterSpec] = &[
        ParameterSpec::optional("force", "Force update even if cache is fresh"),
        ParameterSpec::optional("timeout", "Update timeout in seconds"),
        WORKING_DIRECTORY,
    ];

    fn arguments(&self) -> Result<String> {
        Ok(ArgumentBuilder::new("template source update")
            .switch("--force", self.force)
            .option("--timeout", self.timeout)
            .build())
    }

    fn working_directory(&self) -> Option<&Path> {
        non_empty_dir(&self.working_directory)
    }
}

/// aspire_template_search
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSearchTool {
    pub query: String,
    pub max_results: Option<u32>,
    #[serde(default)]
    pub include_prerelease: bool,
    pub tags: Option<String>,
    pub working_directory: Option<PathBuf>,
}

impl ToolCommand for TemplateSearchTool {
    const NAME: &'static str = "aspire_template_search";
    const DESCRIPTION: &'static str = "Searches for Aspire templates in all configured sources";
    const PARAMETERS: &'static [ParameterSpec] = &[
        ParameterSpec::required("query", "Search query"),
        ParameterSpec::optional("maxResults", "Maximum number of results"),
        ParameterSpec::optional("includePrerelease", "Include prerelease templates"),
        ParameterSpec::optional("tags", "Filter by tags (comma-separated)"),
        WORKING_DIRECTORY,
    ];

    fn arguments(&self) -> Result<String> {
        let query = require(Self::NAME, "query", &self.query)?;

        Ok(ArgumentBuilder::new("template search")
            .value(query)
            .option("--max-results", self.max_results)
            .switch("--include-prerelease", self.include_prerelease)
            .option("--tags", self.tags.as_deref())
            .build())
    }

    fn working_directory(&self) -> Option<&Path> {
        non_empty_dir(&self.working_directory)
    }
}

/// aspire_template_info
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateInfoTool {
    pub template_name: String,
    pub version: Option<String>,
    #[serde(default)]
    pub include_examples: bool,
    pub working_directory: Option<PathBuf>,
}

impl ToolCommand for TemplateInfoTool {
    const NAME: &'static str = "aspire_template_info";
    const DESCRIPTION: &'static str =
        "Gets detailed information about a specific Aspire template";
    const PARAMETERS: &'static [ParameterSpec] = &[
        ParameterSpec::required("templateName", "Template name or ID"),
        ParameterSpec::optional("version", "Template version"),
        ParameterSpec::optional("includeExamples", "Include usage examples"),
        WORKING_DIRECTORY,
    ];

    fn arguments(&self) -> Result<String> {
        let name = require(Self::NAME, "templateName", &self.template_name)?;

        Ok(ArgumentBuilder::new("template info")
            .value(name)
            .option("--version", self.version.as_deref())
            .switch("--include-examples", self.include_examples)
            .build())
    }

    fn working_directory(&self) -> Option<&Path> {
        non_empty_dir(&self.working_directory)
    }
}
