//! Todo item aggregate root.

use super::{TodoId, TodoText};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Unsaved todo item awaiting a store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodoItem {
    text: TodoText,
    created_at: DateTime<Utc>,
}

impl NewTodoItem {
    /// Creates a pending item stamped with the current clock time.
    #[must_use]
    pub fn new(text: TodoText, clock: &impl Clock) -> Self {
        Self {
            text,
            created_at: clock.utc(),
        }
    }

    /// Returns the validated text.
    #[must_use]
    pub const fn text(&self) -> &TodoText {
        &self.text
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Todo item aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    id: TodoId,
    text: TodoText,
    is_completed: bool,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted todo item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTodoData {
    /// Persisted identifier.
    pub id: TodoId,
    /// Persisted text.
    pub text: TodoText,
    /// Persisted completion flag.
    pub is_completed: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted last-modification timestamp, if any.
    pub updated_at: Option<DateTime<Utc>>,
}

impl TodoItem {
    /// Materialises a pending item once the store has allocated its
    /// identifier.
    #[must_use]
    pub fn from_new(id: TodoId, new_item: NewTodoItem) -> Self {
        Self {
            id,
            text: new_item.text,
            is_completed: false,
            created_at: new_item.created_at,
            updated_at: None,
        }
    }

    /// Reconstructs an item from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTodoData) -> Self {
        Self {
            id: data.id,
            text: data.text,
            is_completed: data.is_completed,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the item identifier.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the item text.
    #[must_use]
    pub const fn text(&self) -> &TodoText {
        &self.text
    }

    /// Returns whether the item has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last-modification timestamp, if the item was ever edited
    /// or completed.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Replaces the item text and stamps the modification time.
    pub fn replace_text(&mut self, text: TodoText, at: DateTime<Utc>) {
        self.text = text;
        self.touch(at);
    }

    /// Marks the item as completed.
    ///
    /// Returns `false` without touching the item when it is already
    /// completed.
    pub fn complete(&mut self, at: DateTime<Utc>) -> bool {
        if self.is_completed {
            return false;
        }
        self.is_completed = true;
        self.touch(at);
        true
    }

    /// Listing order: pending items first, newest first within each group.
    #[must_use]
    pub fn listing_order(left: &Self, right: &Self) -> Ordering {
        left.is_completed
            .cmp(&right.is_completed)
            .then_with(|| right.created_at.cmp(&left.created_at))
            .then_with(|| right.id.cmp(&left.id))
    }

    /// `updated_at` never precedes `created_at`, even under clock skew.
    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = Some(at.max(self.created_at));
    }
}
