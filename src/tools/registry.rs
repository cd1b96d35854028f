//! Name-indexed dispatch from tool invocations to lifecycle operations.

use super::{TodoTool, ToolDefinition, ToolInvocationError, ToolInvocationResult};
use crate::todo::{
    domain::TodoId,
    ports::TodoRepository,
    services::{TodoLifecycleService, TodoServiceError},
};
use mockable::Clock;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct AddArguments {
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateArguments {
    id: i64,
    new_text: String,
}

#[derive(Debug, Deserialize)]
struct IdArguments {
    id: i64,
}

/// Registry of the todo tools, bound to one lifecycle service.
pub struct TodoToolRegistry<R, C>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    service: TodoLifecycleService<R, C>,
    definitions: Vec<ToolDefinition>,
}

impl<R, C> Clone for TodoToolRegistry<R, C>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            definitions: self.definitions.clone(),
        }
    }
}

impl<R, C> TodoToolRegistry<R, C>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    /// Creates a registry dispatching to `service`.
    #[must_use]
    pub fn new(service: TodoLifecycleService<R, C>) -> Self {
        let definitions: Vec<ToolDefinition> =
            TodoTool::ALL.into_iter().map(TodoTool::definition).collect();
        tracing::debug!(count = definitions.len(), "registered todo tools");
        Self {
            service,
            definitions,
        }
    }

    /// Lists the definitions of every registered tool.
    #[must_use]
    pub fn list_tools(&self) -> &[ToolDefinition] {
        &self.definitions
    }

    /// Invokes the tool registered under `name` with JSON `arguments`.
    ///
    /// Tools addressing a single item report a missing identifier as `null`
    /// (update, complete) or `false` (delete) rather than as an error.
    ///
    /// # Errors
    ///
    /// Returns [`ToolInvocationError::UnknownTool`] for an unregistered name,
    /// [`ToolInvocationError::InvalidArguments`] when `arguments` do not
    /// match the tool's schema, [`ToolInvocationError::Rejected`] when the
    /// text fails validation, and [`ToolInvocationError::Storage`] when the
    /// store fails.
    pub async fn invoke(&self, name: &str, arguments: Value) -> ToolInvocationResult<Value> {
        let Some(tool) = TodoTool::from_name(name) else {
            tracing::warn!(tool = name, "unknown tool requested");
            return Err(ToolInvocationError::UnknownTool(name.to_owned()));
        };
        tracing::debug!(tool = tool.name(), "invoking tool");

        match tool {
            TodoTool::AddTodoItem => {
                let args: AddArguments = parse(tool, arguments)?;
                let created = self
                    .service
                    .create(&args.text)
                    .await
                    .map_err(|err| service_failure(tool, err))?;
                render(tool, &created)
            }
            TodoTool::GetTodoItems => {
                let items = self
                    .service
                    .list()
                    .await
                    .map_err(|err| service_failure(tool, err))?;
                render(tool, &items)
            }
            TodoTool::UpdateTodoItem => {
                let args: UpdateArguments = parse(tool, arguments)?;
                let updated = missing_as_none(
                    self.service
                        .update(TodoId::new(args.id), &args.new_text)
                        .await,
                )
                .map_err(|err| service_failure(tool, err))?;
                render(tool, &updated)
            }
            TodoTool::CompleteTodoItem => {
                let args: IdArguments = parse(tool, arguments)?;
                let completed = missing_as_none(self.service.complete(TodoId::new(args.id)).await)
                    .map_err(|err| service_failure(tool, err))?;
                render(tool, &completed)
            }
            TodoTool::DeleteTodoItem => {
                let args: IdArguments = parse(tool, arguments)?;
                let deleted = missing_as_none(self.service.delete(TodoId::new(args.id)).await)
                    .map_err(|err| service_failure(tool, err))?;
                Ok(Value::Bool(deleted.is_some()))
            }
        }
    }
}

fn parse<T: DeserializeOwned>(tool: TodoTool, arguments: Value) -> ToolInvocationResult<T> {
    serde_json::from_value(arguments).map_err(|source| ToolInvocationError::InvalidArguments {
        tool: tool.name(),
        source,
    })
}

fn render<T: Serialize + ?Sized>(tool: TodoTool, value: &T) -> ToolInvocationResult<Value> {
    serde_json::to_value(value).map_err(|source| ToolInvocationError::Serialization {
        tool: tool.name(),
        source,
    })
}

fn missing_as_none<T>(
    outcome: Result<T, TodoServiceError>,
) -> Result<Option<T>, TodoServiceError> {
    match outcome {
        Ok(value) => Ok(Some(value)),
        Err(TodoServiceError::NotFound(_)) => Ok(None),
        Err(err) => Err(err),
    }
}

fn service_failure(tool: TodoTool, err: TodoServiceError) -> ToolInvocationError {
    match err {
        TodoServiceError::Storage(source) => ToolInvocationError::Storage {
            tool: tool.name(),
            source,
        },
        TodoServiceError::Validation(_) | TodoServiceError::NotFound(_) => {
            ToolInvocationError::Rejected {
                tool: tool.name(),
                reason: err.to_string(),
            }
        }
    }
}
