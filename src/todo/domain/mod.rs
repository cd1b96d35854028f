//! Domain model for todo item lifecycle management.
//!
//! The todo domain models validated item text, store-assigned identifiers,
//! completion state, and derived statistics while keeping persistence and
//! transport concerns outside of the domain boundary.

mod error;
mod ids;
mod item;
mod statistics;
mod text;

pub use error::TodoDomainError;
pub use ids::TodoId;
pub use item::{NewTodoItem, PersistedTodoData, TodoItem};
pub use statistics::TodoStatistics;
pub use text::TodoText;
