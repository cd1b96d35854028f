//! Diesel schema for todo item persistence.

diesel::table! {
    /// Todo item records.
    todo_items (id) {
        /// Store-assigned identifier.
        id -> BigInt,
        /// Trimmed item text.
        text -> Text,
        /// Completion flag.
        is_completed -> Bool,
        /// Creation timestamp (UTC).
        created_at -> Timestamp,
        /// Last modification timestamp (UTC).
        updated_at -> Nullable<Timestamp>,
    }
}

/// DDL applied when a repository is opened.
pub const CREATE_TODO_ITEMS: &str = concat!(
    "CREATE TABLE IF NOT EXISTS todo_items (",
    "id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL, ",
    "text TEXT NOT NULL CHECK (length(text) BETWEEN 1 AND 500), ",
    "is_completed BOOLEAN NOT NULL DEFAULT 0, ",
    "created_at TIMESTAMP NOT NULL, ",
    "updated_at TIMESTAMP NULL",
    "); ",
    "CREATE INDEX IF NOT EXISTS ix_todo_items_is_completed ON todo_items (is_completed); ",
    "CREATE INDEX IF NOT EXISTS ix_todo_items_created_at ON todo_items (created_at);",
);
