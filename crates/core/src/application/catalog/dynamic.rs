// DynamicAspire - pass-through for any Aspire CLI command line

use super::{non_empty_dir, ParameterSpec, ToolCommand, WORKING_DIRECTORY};
use crate::domain::error::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Runs `aspire <command>` with the caller's argument string untouched
///
/// `command` must be present but may be empty, which runs the bare program.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicTool {
    pub command: String,
    pub working_directory: Option<PathBuf>,
}

impl DynamicTool {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            working_directory: None,
        }
    }

    pub fn in_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_directory = Some(dir.into());
        self
    }
}

impl ToolCommand for DynamicTool {
    const NAME: &'static str = "DynamicAspire";
    const DESCRIPTION: &'static str = "Executes any .NET Aspire CLI command with custom arguments";
    const PARAMETERS: &'static [ParameterSpec] = &[
        ParameterSpec::required(
            "command",
            "The complete Aspire command arguments (everything after 'aspire')",
        ),
        WORKING_DIRECTORY,
    ];

    fn arguments(&self) -> Result<String> {
        Ok(self.command.trim().to_string())
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
    fn test_passes_command_through() {
        let tool = DynamicTool::new("run --project \"My App\" --no-build");
        assert_eq!(
            tool.arguments().unwrap(),
            "run --project \"My App\" --no-build"
        );
    }

    #[test]
    fn test_empty_command_allowed() {
        assert_eq!(DynamicTool::new("").arguments().unwrap(), "");
    }

    #[test]
    fn test_command_field_required() {
        let parsed = serde_json::from_value::<DynamicTool>(json!({ "workingDirectory": "/tmp" }));
        assert!(parsed.is_err());
    }
}
