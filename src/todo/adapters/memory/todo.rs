//! In-memory repository for todo lifecycle tests and local runs.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::todo::{
    domain::{NewTodoItem, TodoId, TodoItem, TodoText},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};

/// Thread-safe in-memory todo repository.
///
/// Identifiers are allocated from a monotonically increasing counter
/// starting at 1 and are never reused after deletion.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    state: Arc<RwLock<InMemoryTodoState>>,
}

#[derive(Debug, Default)]
struct InMemoryTodoState {
    items: BTreeMap<TodoId, TodoItem>,
    last_id: i64,
}

impl InMemoryTodoRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> TodoRepositoryError {
    TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn create(&self, new_item: &NewTodoItem) -> TodoRepositoryResult<TodoItem> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.last_id += 1;
        let item = TodoItem::from_new(TodoId::new(state.last_id), new_item.clone());
        state.items.insert(item.id(), item.clone());
        Ok(item)
    }

    async fn list(&self) -> TodoRepositoryResult<Vec<TodoItem>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.items.values().cloned().collect())
    }

    async fn update_text(
        &self,
        id: TodoId,
        text: &TodoText,
        updated_at: DateTime<Utc>,
    ) -> TodoRepositoryResult<Option<TodoItem>> {
        let mut state = self.state.write().map_err(lock_error)?;
        let updated = state.items.get_mut(&id).map(|item| {
            item.replace_text(text.clone(), updated_at);
            item.clone()
        });
        Ok(updated)
    }

    async fn mark_complete(
        &self,
        id: TodoId,
        completed_at: DateTime<Utc>,
    ) -> TodoRepositoryResult<Option<TodoItem>> {
        let mut state = self.state.write().map_err(lock_error)?;
        let completed = state.items.get_mut(&id).map(|item| {
            item.complete(completed_at);
            item.clone()
        });
        Ok(completed)
    }

    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<bool> {
        let mut state = self.state.write().map_err(lock_error)?;
        Ok(state.items.remove(&id).is_some())
    }

    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<TodoItem>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.items.get(&id).cloned())
    }
}
