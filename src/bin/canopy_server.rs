//! Serves the todo lifecycle HTTP API and tool-invocation endpoints.
//!
//! Usage:
//!
//! ```text
//! canopy_server [--bind 127.0.0.1:5000] [--database-url :memory:]
//!               [--log-filter info] [--storage-timeout-ms 2000]
//! ```
//!
//! Every flag has a `CANOPY_*` environment fallback; see `--help`. With the
//! default `:memory:` database all items are lost when the process exits.

use canopy::config::ServerConfig;
use canopy::http::{AppState, ServerError, router, serve};
use canopy::telemetry::init_tracing;
use canopy::todo::{adapters::sqlite::SqliteTodoRepository, services::TodoLifecycleService};
use clap::Parser;
use mockable::DefaultClock;
use std::sync::Arc;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = ServerConfig::parse();
    init_tracing(&config.log_filter)?;
    run(&config).await.map_err(Into::into)
}

async fn run(config: &ServerConfig) -> Result<(), ServerError> {
    tracing::info!(
        database_url = config.database_url.as_str(),
        storage_timeout_ms = config.storage_timeout_ms,
        "starting canopy server"
    );
    let repository = SqliteTodoRepository::connect(&config.database_url)?;

    let mut service = TodoLifecycleService::new(Arc::new(repository), Arc::new(DefaultClock));
    if let Some(timeout) = config.storage_timeout() {
        service = service.with_storage_timeout(timeout);
    }

    serve(config.bind, router(AppState::new(service))).await
}
