//! Error type for tool invocations.

use crate::todo::ports::TodoRepositoryError;
use thiserror::Error;

/// Result type for tool invocations.
pub type ToolInvocationResult<T> = Result<T, ToolInvocationError>;

/// Errors returned by [`super::TodoToolRegistry::invoke`].
#[derive(Debug, Error)]
pub enum ToolInvocationError {
    /// No tool is registered under the name.
    #[error("unknown tool '{0}'")]
    UnknownTool(String),

    /// The arguments did not match the tool's input schema.
    #[error("invalid arguments for tool '{tool}': {source}")]
    InvalidArguments {
        /// Tool name.
        tool: &'static str,
        /// Deserialisation failure.
        #[source]
        source: serde_json::Error,
    },

    /// The service refused the call, for example because the text was blank.
    #[error("tool '{tool}' rejected the call: {reason}")]
    Rejected {
        /// Tool name.
        tool: &'static str,
        /// Caller-facing explanation.
        reason: String,
    },

    /// The store failed or timed out.
    #[error("tool '{tool}' failed: {source}")]
    Storage {
        /// Tool name.
        tool: &'static str,
        /// Underlying store failure.
        #[source]
        source: TodoRepositoryError,
    },

    /// The result could not be rendered as JSON.
    #[error("failed to serialise result of tool '{tool}': {source}")]
    Serialization {
        /// Tool name.
        tool: &'static str,
        /// Serialisation failure.
        #[source]
        source: serde_json::Error,
    },
}
