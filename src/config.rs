//! Command-line and environment configuration for the Canopy binaries.

use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;

/// Configuration for the `canopy_server` binary.
///
/// Every flag can also be supplied through the environment variable named in
/// its help text.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "canopy_server")]
#[command(version)]
#[command(about = "Todo lifecycle HTTP API and tool-invocation server")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "CANOPY_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// SQLite database: `:memory:` or a file path
    #[arg(long, env = "CANOPY_DATABASE_URL", default_value = ":memory:")]
    pub database_url: String,

    /// Tracing filter directives, e.g. `info` or `canopy=debug,tower_http=info`
    #[arg(long, env = "CANOPY_LOG", default_value = "info")]
    pub log_filter: String,

    /// Deadline for each storage call, in milliseconds
    #[arg(long, env = "CANOPY_STORAGE_TIMEOUT_MS", value_name = "MILLIS")]
    pub storage_timeout_ms: Option<u64>,
}

impl ServerConfig {
    /// Storage deadline, when one is configured.
    #[must_use]
    pub fn storage_timeout(&self) -> Option<Duration> {
        self.storage_timeout_ms.map(Duration::from_millis)
    }
}

/// Configuration for the `monkey_console` binary.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "monkey_console")]
#[command(version)]
#[command(about = "Interactive monkey catalog browser")]
pub struct ConsoleConfig {
    /// Tracing filter directives; logs go to stderr
    #[arg(long, env = "CANOPY_CONSOLE_LOG", default_value = "warn")]
    pub log_filter: String,
}
