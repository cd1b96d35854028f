//! Mapping from service and tool failures to HTTP responses.

use crate::todo::{domain::TodoId, services::TodoServiceError};
use crate::tools::ToolInvocationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Error returned by HTTP handlers, rendered as `{"error": message}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A lifecycle operation failed.
    #[error(transparent)]
    Service(#[from] TodoServiceError),

    /// A tool invocation failed.
    #[error(transparent)]
    Tool(#[from] ToolInvocationError),

    /// A lookup found no item.
    #[error("todo item {0} not found")]
    Missing(TodoId),

    /// The request path or body could not be read.
    #[error("malformed request: {0}")]
    MalformedRequest(String),
}

impl ApiError {
    /// Status code reported for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Service(TodoServiceError::Validation(_))
            | Self::Tool(
                ToolInvocationError::InvalidArguments { .. } | ToolInvocationError::Rejected { .. },
            )
            | Self::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            Self::Service(TodoServiceError::NotFound(_))
            | Self::Tool(ToolInvocationError::UnknownTool(_))
            | Self::Missing(_) => StatusCode::NOT_FOUND,
            Self::Service(TodoServiceError::Storage(_))
            | Self::Tool(
                ToolInvocationError::Storage { .. } | ToolInvocationError::Serialization { .. },
            ) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            "internal storage failure".to_owned()
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
            self.to_string()
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
