//! Derived completion statistics.

use super::TodoItem;
use serde::{Deserialize, Serialize};

/// Aggregate counts over the current set of todo items.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoStatistics {
    /// Number of items.
    pub total_todos: usize,
    /// Number of completed items.
    pub completed_todos: usize,
    /// Number of items still pending.
    pub pending_todos: usize,
    /// Share of completed items in percent, `0.0` when there are no items.
    pub completion_percentage: f64,
}

impl TodoStatistics {
    /// Computes statistics over a slice of items.
    #[must_use]
    pub fn from_items(items: &[TodoItem]) -> Self {
        if items.is_empty() {
            return Self::empty();
        }
        let total_todos = items.len();
        let completed_todos = items.iter().filter(|item| item.is_completed()).count();
        Self {
            total_todos,
            completed_todos,
            pending_todos: total_todos - completed_todos,
            completion_percentage: completion_percentage(completed_todos, total_todos),
        }
    }

    /// Returns statistics for an empty item set.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            total_todos: 0,
            completed_todos: 0,
            pending_todos: 0,
            completion_percentage: 0.0,
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "percentages are reported as floating point; item counts stay far below 2^52"
)]
fn completion_percentage(completed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    completed as f64 / total as f64 * 100.0
}
