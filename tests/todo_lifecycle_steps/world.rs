//! Shared world state for todo lifecycle BDD scenarios.

use std::sync::Arc;

use canopy::todo::{
    adapters::memory::InMemoryTodoRepository,
    domain::TodoItem,
    services::{TodoLifecycleService, TodoServiceError},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestTodoService = TodoLifecycleService<InMemoryTodoRepository, DefaultClock>;

/// Scenario world for todo lifecycle behaviour tests.
pub struct TodoWorld {
    pub service: TestTodoService,
    pub added: Vec<TodoItem>,
    pub last_item: Option<TodoItem>,
    pub last_error: Option<TodoServiceError>,
}

impl TodoWorld {
    /// Creates a world over an empty store.
    #[must_use]
    pub fn new() -> Self {
        let service = TodoLifecycleService::new(
            Arc::new(InMemoryTodoRepository::new()),
            Arc::new(DefaultClock),
        );
        Self {
            service,
            added: Vec::new(),
            last_item: None,
            last_error: None,
        }
    }

    /// Records the outcome of a lifecycle call.
    pub fn record(&mut self, outcome: Result<TodoItem, TodoServiceError>) {
        match outcome {
            Ok(item) => {
                self.last_item = Some(item);
                self.last_error = None;
            }
            Err(err) => self.last_error = Some(err),
        }
    }

    /// Returns the most recent successful item.
    ///
    /// # Errors
    ///
    /// Returns an error when no call has succeeded yet.
    pub fn last_item(&self) -> Result<&TodoItem, eyre::Report> {
        self.last_item
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no todo item recorded in scenario world"))
    }
}

impl Default for TodoWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TodoWorld {
    TodoWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
