//! Shared handler state.

use crate::todo::{ports::TodoRepository, services::TodoLifecycleService};
use crate::tools::TodoToolRegistry;
use mockable::Clock;

/// State shared by every HTTP handler.
pub struct AppState<R, C>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    pub(super) service: TodoLifecycleService<R, C>,
    pub(super) tools: TodoToolRegistry<R, C>,
}

impl<R, C> AppState<R, C>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    /// Builds the state around `service`, registering the todo tools against
    /// the same service instance.
    #[must_use]
    pub fn new(service: TodoLifecycleService<R, C>) -> Self {
        let tools = TodoToolRegistry::new(service.clone());
        Self { service, tools }
    }
}

impl<R, C> Clone for AppState<R, C>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            tools: self.tools.clone(),
        }
    }
}
