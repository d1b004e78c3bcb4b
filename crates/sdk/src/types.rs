//! SDK Request/Response Types
//!
//! Mirrors the JSON-RPC types from the api-rpc crate.

use crate::error::{Result, SdkError};
use serde::{Deserialize, Serialize};

/// One entry of `tools.list.v1`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub description: String,
    pub parameters: Vec<ParameterInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParameterInfo {
    pub name: String,
    pub required: bool,
    pub description: String,
}

/// Params for `DynamicAspire`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicRequest {
    pub command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
}

/// Params for `aspire_help`
#[derive(Debug, Clone, Default, Serialize)]
pub struct HelpRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

/// Parsed invocation report
///
/// The daemon answers every tool call with the plain-text report; this
/// splits it back into fields. `raw` keeps the original text.
///
/// The layout carries no lengths, so a stream that itself prints the
/// `Standard Error:` label is ambiguous. The split uses the last label,
/// which keeps child stdout intact and only misplaces text if stderr
/// repeats the label.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub command: String,
    pub working_directory: String,
    pub exit_code: i32,
    pub execution_time_ms: f64,
    pub standard_output: String,
    pub standard_error: String,
    pub raw: String,
}

const STDOUT_MARKER: &str = "Standard Output:\n";
const STDERR_MARKER: &str = "\nStandard Error:\n";

fn header_field<'a>(header: &'a str, label: &str) -> Result<&'a str> {
    header
        .lines()
        .find_map(|line| line.strip_prefix(label))
        .ok_or_else(|| SdkError::MalformedReport(format!("missing '{}'", label.trim())))
}

impl Report {
    pub fn parse(text: &str) -> Result<Self> {
        let (header, streams) = text
            .split_once(STDOUT_MARKER)
            .ok_or_else(|| SdkError::MalformedReport("missing standard output section".into()))?;
        let (standard_output, standard_error) = streams
            .rsplit_once(STDERR_MARKER)
            .ok_or_else(|| SdkError::MalformedReport("missing standard error section".into()))?;

        let exit_code = header_field(header, "Exit Code: ")?
            .trim()
            .parse()
            .map_err(|_| SdkError::MalformedReport("exit code is not an integer".into()))?;
        let execution_time_ms = header_field(header, "Execution Time: ")?
            .trim()
            .trim_end_matches("ms")
            .parse()
            .map_err(|_| SdkError::MalformedReport("execution time is not a number".into()))?;

        Ok(Self {
            command: header_field(header, "Command: ")?.to_string(),
            working_directory: header_field(header, "Working Directory: ")?.to_string(),
            exit_code,
            execution_time_ms,
            standard_output: standard_output.to_string(),
            standard_error: standard_error.to_string(),
            raw: text.to_string(),
        })
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}
