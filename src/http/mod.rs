//! JSON HTTP surface for the todo lifecycle service and tool registry.
//!
//! Routes map one-to-one onto [`crate::todo::services::TodoLifecycleService`]
//! operations and [`crate::tools::TodoToolRegistry::invoke`]. Service errors
//! are translated to status codes by [`ApiError`].

mod error;
mod handlers;
mod server;
mod state;

pub use error::ApiError;
pub use server::{ServerError, router, serve};
pub use state::AppState;

#[cfg(test)]
mod tests;
