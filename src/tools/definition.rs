//! Tool names, descriptions and input schemas.

use serde::Serialize;
use serde_json::{Value, json};

/// Metadata advertised for a tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    name: &'static str,
    title: &'static str,
    description: &'static str,
    input_schema: Value,
}

impl ToolDefinition {
    /// Returns the invocation name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the human-readable title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.title
    }

    /// Returns the description shown to agents.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.description
    }

    /// Returns the JSON Schema for the tool arguments.
    #[must_use]
    pub const fn input_schema(&self) -> &Value {
        &self.input_schema
    }
}

/// The tools exposed over the todo lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TodoTool {
    /// `add_todo_item { text }`
    AddTodoItem,
    /// `get_todo_items {}`
    GetTodoItems,
    /// `update_todo_item { id, newText }`
    UpdateTodoItem,
    /// `complete_todo_item { id }`
    CompleteTodoItem,
    /// `delete_todo_item { id }`
    DeleteTodoItem,
}

impl TodoTool {
    /// Every tool, in advertised order.
    pub const ALL: [Self; 5] = [
        Self::AddTodoItem,
        Self::GetTodoItems,
        Self::UpdateTodoItem,
        Self::CompleteTodoItem,
        Self::DeleteTodoItem,
    ];

    /// Resolves a tool from its invocation name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }

    /// Returns the invocation name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AddTodoItem => "add_todo_item",
            Self::GetTodoItems => "get_todo_items",
            Self::UpdateTodoItem => "update_todo_item",
            Self::CompleteTodoItem => "complete_todo_item",
            Self::DeleteTodoItem => "delete_todo_item",
        }
    }

    const fn title(self) -> &'static str {
        match self {
            Self::AddTodoItem => "Add a to-do item",
            Self::GetTodoItems => "Get a list of to-do items",
            Self::UpdateTodoItem => "Update a to-do item",
            Self::CompleteTodoItem => "Complete a to-do item",
            Self::DeleteTodoItem => "Delete a to-do item",
        }
    }

    const fn description(self) -> &'static str {
        match self {
            Self::AddTodoItem => "Adds a to-do item to the database.",
            Self::GetTodoItems => {
                "Gets the to-do items from the database, pending items first and newest first."
            }
            Self::UpdateTodoItem => {
                "Updates the text of a to-do item. Returns null when the item does not exist."
            }
            Self::CompleteTodoItem => {
                "Marks a to-do item as completed. Returns null when the item does not exist."
            }
            Self::DeleteTodoItem => {
                "Deletes a to-do item. Returns false when the item does not exist."
            }
        }
    }

    fn input_schema(self) -> Value {
        let id = json!({
            "type": "integer",
            "description": "Identifier of the to-do item"
        });
        let text = json!({
            "type": "string",
            "minLength": 1,
            "maxLength": 500,
            "description": "Text of the to-do item; surrounding whitespace is trimmed"
        });

        match self {
            Self::AddTodoItem => json!({
                "type": "object",
                "properties": { "text": text },
                "required": ["text"]
            }),
            Self::GetTodoItems => json!({
                "type": "object",
                "properties": {}
            }),
            Self::UpdateTodoItem => json!({
                "type": "object",
                "properties": { "id": id, "newText": text },
                "required": ["id", "newText"]
            }),
            Self::CompleteTodoItem | Self::DeleteTodoItem => json!({
                "type": "object",
                "properties": { "id": id },
                "required": ["id"]
            }),
        }
    }

    /// Builds the advertised definition.
    #[must_use]
    pub fn definition(self) -> ToolDefinition {
        ToolDefinition {
            name: self.name(),
            title: self.title(),
            description: self.description(),
            input_schema: self.input_schema(),
        }
    }
}
