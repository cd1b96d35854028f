//! Tracing subscriber installation.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors raised while installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The filter directives could not be parsed.
    #[error("invalid log filter '{filter}': {source}")]
    InvalidFilter {
        /// Directives as supplied.
        filter: String,
        /// Parse failure.
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    /// A global subscriber is already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Installs a formatted subscriber writing to stderr, filtered by
/// `directives`.
///
/// Logs go to stderr so that stdout stays free for program output.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] for malformed directives and
/// [`TelemetryError::Install`] when a global subscriber already exists.
pub fn init_tracing(directives: &str) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(directives).map_err(|source| TelemetryError::InvalidFilter {
        filter: directives.to_owned(),
        source,
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| TelemetryError::Install(err.to_string()))
}
