//! Service layer for todo item creation, editing, completion and reporting.

use crate::todo::{
    domain::{NewTodoItem, TodoDomainError, TodoId, TodoItem, TodoStatistics, TodoText},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};
use mockable::Clock;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Service-level errors for todo lifecycle operations.
///
/// Every operation resolves to exactly one of these kinds, so callers can map
/// them onto their own surface (HTTP status, tool rejection, console message).
#[derive(Debug, Error)]
pub enum TodoServiceError {
    /// The supplied text failed validation. Caller-correctable.
    #[error(transparent)]
    Validation(#[from] TodoDomainError),

    /// No todo item exists with the given identifier.
    #[error("todo item {0} not found")]
    NotFound(TodoId),

    /// The store failed or timed out.
    #[error(transparent)]
    Storage(#[from] TodoRepositoryError),
}

/// Result type for todo lifecycle service operations.
pub type TodoServiceResult<T> = Result<T, TodoServiceError>;

/// Todo lifecycle orchestration service.
///
/// Cloning is cheap and shares the underlying repository and clock.
pub struct TodoLifecycleService<R, C>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    storage_timeout: Option<Duration>,
}

impl<R, C> Clone for TodoLifecycleService<R, C>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
            storage_timeout: self.storage_timeout,
        }
    }
}

impl<R, C> TodoLifecycleService<R, C>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new todo lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            storage_timeout: None,
        }
    }

    /// Bounds every storage call by `timeout`.
    ///
    /// When the deadline passes, the pending storage future is dropped and the
    /// operation fails with [`TodoRepositoryError::TimedOut`]. The store then
    /// discards the abandoned call: a queued write never runs, and one caught
    /// mid-transaction rolls back.
    #[must_use]
    pub const fn with_storage_timeout(mut self, timeout: Duration) -> Self {
        self.storage_timeout = Some(timeout);
        self
    }

    /// Creates a new pending todo item.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Validation`] when the text is empty or too
    /// long (nothing is persisted), or [`TodoServiceError::Storage`] when the
    /// store rejects the write.
    pub async fn create(&self, text: &str) -> TodoServiceResult<TodoItem> {
        let validated = TodoText::new(text)?;
        tracing::info!(text = validated.as_str(), "creating todo item");

        let new_item = NewTodoItem::new(validated, &*self.clock);
        let created = self
            .storage("create", None, self.repository.create(&new_item))
            .await?;

        tracing::info!(id = %created.id(), "created todo item");
        Ok(created)
    }

    /// Lists all items: pending first, newest first within each group.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Storage`] when the store lookup fails.
    pub async fn list(&self) -> TodoServiceResult<Vec<TodoItem>> {
        let mut items = self.storage("list", None, self.repository.list()).await?;
        items.sort_by(TodoItem::listing_order);
        tracing::debug!(count = items.len(), "listed todo items");
        Ok(items)
    }

    /// Replaces the text of an existing item.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Validation`] for invalid text,
    /// [`TodoServiceError::NotFound`] for an unknown identifier, or
    /// [`TodoServiceError::Storage`] when the store fails.
    pub async fn update(&self, id: TodoId, new_text: &str) -> TodoServiceResult<TodoItem> {
        let validated = TodoText::new(new_text)?;
        tracing::info!(%id, new_text = validated.as_str(), "updating todo item");

        let now = self.clock.utc();
        let updated = self
            .storage(
                "update",
                Some(id),
                self.repository.update_text(id, &validated, now),
            )
            .await?;

        let Some(item) = updated else {
            tracing::info!(%id, "todo item not found for update");
            return Err(TodoServiceError::NotFound(id));
        };
        tracing::info!(%id, text = item.text().as_str(), "updated todo item");
        Ok(item)
    }

    /// Marks an item as completed.
    ///
    /// Completing an item that is already completed returns it unchanged,
    /// including its `updated_at` stamp.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::NotFound`] for an unknown identifier or
    /// [`TodoServiceError::Storage`] when the store fails.
    pub async fn complete(&self, id: TodoId) -> TodoServiceResult<TodoItem> {
        tracing::info!(%id, "completing todo item");

        let now = self.clock.utc();
        let completed = self
            .storage(
                "complete",
                Some(id),
                self.repository.mark_complete(id, now),
            )
            .await?;

        let Some(item) = completed else {
            tracing::info!(%id, "todo item not found for completion");
            return Err(TodoServiceError::NotFound(id));
        };
        tracing::info!(%id, completed_at = ?item.updated_at(), "completed todo item");
        Ok(item)
    }

    /// Permanently deletes an item.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::NotFound`] for an unknown identifier or
    /// [`TodoServiceError::Storage`] when the store fails.
    pub async fn delete(&self, id: TodoId) -> TodoServiceResult<()> {
        tracing::info!(%id, "deleting todo item");

        let deleted = self
            .storage("delete", Some(id), self.repository.delete(id))
            .await?;
        if !deleted {
            tracing::info!(%id, "todo item not found for deletion");
            return Err(TodoServiceError::NotFound(id));
        }

        tracing::info!(%id, "deleted todo item");
        Ok(())
    }

    /// Retrieves an item by identifier.
    ///
    /// Returns `Ok(None)` when no item has the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Storage`] when the store lookup fails.
    pub async fn get_by_id(&self, id: TodoId) -> TodoServiceResult<Option<TodoItem>> {
        let found = self
            .storage("get_by_id", Some(id), self.repository.find_by_id(id))
            .await?;
        tracing::debug!(%id, found = found.is_some(), "looked up todo item");
        Ok(found)
    }

    /// Computes completion statistics over the current item set.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Storage`] when the store lookup fails.
    pub async fn statistics(&self) -> TodoServiceResult<TodoStatistics> {
        let items = self.list().await?;
        let statistics = TodoStatistics::from_items(&items);
        tracing::debug!(
            total = statistics.total_todos,
            completed = statistics.completed_todos,
            pending = statistics.pending_todos,
            "computed todo statistics"
        );
        Ok(statistics)
    }

    /// Awaits a storage call under the configured deadline and logs failures
    /// before handing them back.
    async fn storage<T>(
        &self,
        operation: &'static str,
        id: Option<TodoId>,
        call: impl Future<Output = TodoRepositoryResult<T>>,
    ) -> TodoRepositoryResult<T> {
        let outcome = match self.storage_timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .unwrap_or(Err(TodoRepositoryError::TimedOut)),
            None => call.await,
        };

        if let Err(ref err) = outcome {
            tracing::error!(operation, id = ?id, error = %err, "todo storage call failed");
        }
        outcome
    }
}
