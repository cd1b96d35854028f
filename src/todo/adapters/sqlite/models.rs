//! Diesel row models for todo persistence.

use super::schema::todo_items;
use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Query result row for todo records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = todo_items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TodoRow {
    /// Store-assigned identifier.
    pub id: i64,
    /// Trimmed item text.
    pub text: String,
    /// Completion flag.
    pub is_completed: bool,
    /// Creation timestamp (UTC, naive).
    pub created_at: NaiveDateTime,
    /// Last modification timestamp (UTC, naive).
    pub updated_at: Option<NaiveDateTime>,
}

/// Insert model for todo records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todo_items)]
pub struct NewTodoRow<'a> {
    /// Trimmed item text.
    pub text: &'a str,
    /// Completion flag.
    pub is_completed: bool,
    /// Creation timestamp (UTC, naive).
    pub created_at: NaiveDateTime,
}
