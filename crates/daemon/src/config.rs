//! Daemon configuration (flags with environment fallbacks)

use aspire_api_rpc::server::{DEFAULT_RPC_HOST, DEFAULT_RPC_PORT};
use aspire_api_rpc::RpcServerConfig;
use clap::{Parser, ValueEnum};
use std::time::Duration;

pub const DEFAULT_PROGRAM: &str = "aspire";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human readable, colored
    Pretty,
    /// One JSON object per line
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "aspire-rpc-server",
    version,
    about = "Expose the Aspire CLI over JSON-RPC"
)]
pub struct DaemonConfig {
    /// Address the RPC server binds to
    #[arg(long, env = "ASPIRE_RPC_HOST", default_value = DEFAULT_RPC_HOST)]
    pub host: String,

    #[arg(long, env = "ASPIRE_RPC_PORT", default_value_t = DEFAULT_RPC_PORT)]
    pub port: u16,

    /// Aspire executable (name on PATH or path, `~` expanded)
    #[arg(long, env = "ASPIRE_PROGRAM", default_value = DEFAULT_PROGRAM)]
    pub program: String,

    /// Kill invocations running longer than this; unset waits indefinitely
    #[arg(long = "timeout-secs", env = "ASPIRE_EXEC_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    #[arg(long, env = "ASPIRE_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Default log filter to debug (RUST_LOG still wins)
    #[arg(long)]
    pub debug: bool,
}

impl DaemonConfig {
    pub fn program_path(&self) -> String {
        shellexpand::tilde(&self.program).into_owned()
    }

    /// `0` is treated as no timeout
    pub fn execution_timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    pub fn rpc_config(&self) -> RpcServerConfig {
        RpcServerConfig {
            host: self.host.clone(),
            port: self.port,
        }
    }

    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "aspire=debug"
        } else {
            "aspire=info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_flags() {
        let config = DaemonConfig::try_parse_from([
            "aspire-rpc-server",
            "--host",
            "0.0.0.0",
            "--port",
            "9100",
            "--program",
            "/opt/aspire/aspire",
            "--timeout-secs",
            "30",
            "--log-format",
            "json",
            "--debug",
        ])
        .unwrap();

        assert_eq!(config.rpc_config().host, "0.0.0.0");
        assert_eq!(config.rpc_config().port, 9100);
        assert_eq!(config.program_path(), "/opt/aspire/aspire");
        assert_eq!(config.execution_timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.log_filter(), "aspire=debug");
    }

    #[test]
    fn test_zero_timeout_disables_deadline() {
        let config =
            DaemonConfig::try_parse_from(["aspire-rpc-server", "--timeout-secs", "0"]).unwrap();
        assert_eq!(config.execution_timeout(), None);
    }

    #[test]
    fn test_program_tilde_expansion() {
        let config =
            DaemonConfig::try_parse_from(["aspire-rpc-server", "--program", "~/.dotnet/tools/aspire"])
                .unwrap();

        let expanded = config.program_path();
        assert!(!expanded.starts_with('~'));
        assert!(expanded.ends_with("/.dotnet/tools/aspire"));
    }

    #[test]
    fn test_rejects_unknown_log_format() {
        let parsed =
            DaemonConfig::try_parse_from(["aspire-rpc-server", "--log-format", "xml"]);
        assert!(parsed.is_err());
    }
}
