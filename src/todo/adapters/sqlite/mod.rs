//! Embedded `SQLite` adapters for todo lifecycle persistence.

mod models;
mod repository;
mod schema;

pub use repository::{SqliteTodoRepository, TodoSqlitePool, build_pool};
