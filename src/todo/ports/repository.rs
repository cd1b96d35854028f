//! Repository port for todo item persistence.

use crate::todo::domain::{NewTodoItem, TodoId, TodoItem, TodoText};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for todo repository operations.
pub type TodoRepositoryResult<T> = Result<T, TodoRepositoryError>;

/// Todo item persistence contract.
///
/// Every mutating method is a single write, so a caller that abandons the
/// returned future never observes a partial mutation. Implementations that
/// hand work to another thread must not commit once the future is dropped.
/// Implementations backed by one shared connection must serialise concurrent
/// writers themselves.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Stores a new item and returns it with its store-assigned identifier.
    async fn create(&self, new_item: &NewTodoItem) -> TodoRepositoryResult<TodoItem>;

    /// Returns every stored item in no particular order.
    async fn list(&self) -> TodoRepositoryResult<Vec<TodoItem>>;

    /// Replaces the text of an existing item and stamps `updated_at`.
    ///
    /// Returns `None` when the item does not exist.
    async fn update_text(
        &self,
        id: TodoId,
        text: &TodoText,
        updated_at: DateTime<Utc>,
    ) -> TodoRepositoryResult<Option<TodoItem>>;

    /// Marks an item as completed.
    ///
    /// Items that are already completed are returned unchanged. Returns
    /// `None` when the item does not exist.
    async fn mark_complete(
        &self,
        id: TodoId,
        completed_at: DateTime<Utc>,
    ) -> TodoRepositoryResult<Option<TodoItem>>;

    /// Permanently removes an item.
    ///
    /// Returns `false` when the item does not exist.
    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<bool>;

    /// Finds an item by identifier.
    ///
    /// Returns `None` when the item does not exist.
    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<TodoItem>>;
}

/// Errors returned by todo repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),

    /// The storage call did not finish before the caller's deadline.
    #[error("storage call timed out")]
    TimedOut,
}

impl TodoRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
