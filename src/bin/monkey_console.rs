//! Interactive text menu for browsing the bundled monkey catalog.
//!
//! Reads menu choices from stdin and writes screens to stdout. Logs go to
//! stderr, filtered by `--log-filter` (default `warn`).

use canopy::catalog::services::MonkeyCatalog;
use canopy::config::ConsoleConfig;
use canopy::console::MonkeyConsole;
use canopy::telemetry::init_tracing;
use clap::Parser;
use std::io;
use std::sync::Arc;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

fn main() -> Result<(), BoxError> {
    let config = ConsoleConfig::parse();
    init_tracing(&config.log_filter)?;

    let catalog = Arc::new(MonkeyCatalog::with_builtin_records());
    let mut console = MonkeyConsole::new(catalog, io::stdin().lock(), io::stdout().lock());
    console.run()?;
    Ok(())
}
