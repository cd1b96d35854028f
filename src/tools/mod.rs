//! Tool-invocation surface over the todo lifecycle service.
//!
//! Programmatic agents address operations by name and pass JSON arguments.
//! The set of tools is fixed and registered explicitly in
//! [`TodoToolRegistry`]; each tool delegates to
//! [`crate::todo::services::TodoLifecycleService`] and never touches storage
//! directly.

mod definition;
mod error;
mod registry;

pub use definition::{TodoTool, ToolDefinition};
pub use error::{ToolInvocationError, ToolInvocationResult};
pub use registry::TodoToolRegistry;

#[cfg(test)]
mod tests;
