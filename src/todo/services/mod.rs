//! Application services for todo lifecycle orchestration.

mod lifecycle;

pub use lifecycle::{TodoLifecycleService, TodoServiceError, TodoServiceResult};
