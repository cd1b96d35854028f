//! Shared adapter selection and builders for store contract tests.

use canopy::todo::{
    adapters::{memory::InMemoryTodoRepository, sqlite::SqliteTodoRepository},
    domain::{NewTodoItem, TodoText},
    ports::TodoRepository,
};
use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;

/// Repository adapters under test.
#[derive(Debug, Clone, Copy)]
pub enum StoreKind {
    /// `InMemoryTodoRepository`.
    Memory,
    /// `SqliteTodoRepository` over a private `:memory:` database.
    Sqlite,
}

/// Opens a fresh, empty repository of the requested kind.
///
/// # Errors
///
/// Returns an error when the `SQLite` store cannot be opened.
pub fn open_store(kind: StoreKind) -> Result<Box<dyn TodoRepository>, eyre::Report> {
    Ok(match kind {
        StoreKind::Memory => Box::new(InMemoryTodoRepository::new()),
        StoreKind::Sqlite => Box::new(SqliteTodoRepository::connect(":memory:")?),
    })
}

/// Whole-second reference instant; `SQLite` round-trips these exactly.
#[must_use]
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53)
        .single()
        .unwrap_or_default()
}

/// Returns `base_time()` shifted by `seconds`.
#[must_use]
pub fn at(seconds: i64) -> DateTime<Utc> {
    base_time() + Duration::seconds(seconds)
}

/// Clock frozen at a single instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Builds an unsaved item created `seconds` after the base time.
///
/// # Errors
///
/// Returns an error when `text` fails validation.
pub fn new_item(text: &str, seconds: i64) -> Result<NewTodoItem, eyre::Report> {
    Ok(NewTodoItem::new(
        TodoText::new(text)?,
        &FixedClock(at(seconds)),
    ))
}
