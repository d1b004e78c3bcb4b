//! Aspire CLI client - talks to the bridge daemon over JSON-RPC

use anyhow::{Context, Result};
use aspire_sdk::{Report, ToolInfo};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tabled::{Table, Tabled};

const DEFAULT_RPC_URL: &str = "http://127.0.0.1:9627";
const LIST_TOOLS_METHOD: &str = "tools.list.v1";
const DYNAMIC_TOOL: &str = "DynamicAspire";
const VERSION_TOOL: &str = "aspire_version";

#[derive(Parser)]
#[command(name = "aspirectl")]
#[command(about = "Aspire CLI bridge client", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// RPC server URL
    #[arg(long, env = "ASPIRE_RPC_URL", default_value = DEFAULT_RPC_URL)]
    rpc_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// List the tools the daemon exposes
    Tools,

    /// Call one tool
    Call {
        /// Tool name (e.g. aspire_build)
        tool: String,

        /// Parameters as a JSON object
        #[arg(short, long)]
        params: Option<String>,

        /// Working directory for the invocation
        #[arg(long)]
        cwd: Option<String>,
    },

    /// Run an arbitrary aspire command line
    Exec {
        /// Arguments passed to aspire (program name excluded)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,

        #[arg(long)]
        cwd: Option<String>,
    },

    /// Show the Aspire CLI version seen by the daemon
    Version,
}

#[derive(Serialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    method: String,
    params: Value,
    id: u64,
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    #[allow(dead_code)]
    jsonrpc: String,
    #[allow(dead_code)]
    id: u64,
    result: Option<Value>,
    error: Option<JsonRpcError>,
}

#[derive(Deserialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

#[derive(Tabled)]
struct ToolRow {
    tool: String,
    parameters: String,
    description: String,
}

impl From<ToolInfo> for ToolRow {
    fn from(info: ToolInfo) -> Self {
        let parameters = info
            .parameters
            .iter()
            .map(|p| {
                if p.required {
                    format!("{}*", p.name)
                } else {
                    p.name.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            tool: info.name,
            parameters,
            description: info.description,
        }
    }
}

async fn call_rpc(url: &str, method: &str, params: Value) -> Result<Value> {
    let request = JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        method: method.to_string(),
        params,
        id: 1,
    };

    let client = reqwest::Client::new();
    let response: JsonRpcResponse = client
        .post(url)
        .json(&request)
        .send()
        .await
        .context("Failed to connect to daemon")?
        .json()
        .await
        .context("Failed to parse response")?;

    if let Some(error) = response.error {
        anyhow::bail!("RPC error ({}): {}", error.code, error.message);
    }

    response
        .result
        .ok_or_else(|| anyhow::anyhow!("No result in response"))
}

/// Merge `--params` and `--cwd` into one params object
fn call_params(params: Option<&str>, cwd: Option<&str>) -> Result<Value> {
    let mut object = match params {
        Some(raw) => match serde_json::from_str::<Value>(raw).context("Invalid JSON params")? {
            Value::Object(map) => map,
            _ => anyhow::bail!("Params must be a JSON object"),
        },
        None => Map::new(),
    };

    if let Some(dir) = cwd {
        object.insert("workingDirectory".to_string(), json!(dir));
    }

    Ok(Value::Object(object))
}

/// Process exit status for a failed invocation
///
/// Unix keeps only the low byte, so codes outside 1..=255 would wrap
/// (256 exits 0); the launch failure sentinel -1 becomes 1.
fn failure_exit_status(code: i32) -> i32 {
    code.clamp(1, 255)
}

/// Print a report and turn a failed invocation into a failing exit status
async fn run_tool(url: &str, tool: &str, params: Value) -> Result<()> {
    let result = call_rpc(url, tool, params).await?;
    let report = result
        .as_str()
        .ok_or_else(|| anyhow::anyhow!("Unexpected result type from {}", tool))?;

    println!("{}", report);

    match Report::parse(report) {
        Ok(parsed) if !parsed.is_success() => {
            let code = parsed.exit_code;
            eprintln!("{}", format!("✗ {} exited with code {}", tool, code).red().bold());
            std::process::exit(failure_exit_status(code));
        }
        _ => Ok(()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tools => {
            let result = call_rpc(&cli.rpc_url, LIST_TOOLS_METHOD, json!({})).await?;
            let tools: Vec<ToolInfo> =
                serde_json::from_value(result).context("Unexpected tools.list.v1 result")?;

            println!("{}", format!("{} tools available", tools.len()).cyan().bold());
            println!();

            let rows: Vec<ToolRow> = tools.into_iter().map(ToolRow::from).collect();
            println!("{}", Table::new(rows));
            println!();
            println!("{}", "* required parameter".dimmed());
        }

        Commands::Call { tool, params, cwd } => {
            let params = call_params(params.as_deref(), cwd.as_deref())?;
            run_tool(&cli.rpc_url, &tool, params).await?;
        }

        Commands::Exec { args, cwd } => {
            let command = shell_words::join(&args);
            let mut params = json!({ "command": command });
            if let Some(dir) = cwd {
                params["workingDirectory"] = json!(dir);
            }
            run_tool(&cli.rpc_url, DYNAMIC_TOOL, params).await?;
        }

        Commands::Version => {
            let result = call_rpc(&cli.rpc_url, VERSION_TOOL, json!({})).await?;
            let report = result.as_str().unwrap_or_default();

            match Report::parse(report) {
                Ok(parsed) if parsed.is_success() => {
                    println!("  {} {}", "RPC URL:".bold(), cli.rpc_url);
                    println!("  {} {}", "Status:".bold(), "ONLINE".green());
                    println!("  {} {}", "Aspire CLI:".bold(), parsed.standard_output.trim());
                }
                _ => {
                    println!("  {} {}", "Status:".bold(), "CLI UNAVAILABLE".red());
                    println!("{}", report);
                }
            }
        }
    }

    Ok(())
}
