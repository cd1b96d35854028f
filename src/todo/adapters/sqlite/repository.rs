//! `SQLite` repository implementation for todo lifecycle storage.

use super::{
    models::{NewTodoRow, TodoRow},
    schema::{CREATE_TODO_ITEMS, todo_items},
};
use crate::todo::{
    domain::{NewTodoItem, PersistedTodoData, TodoId, TodoItem, TodoText},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::Error as DieselError;
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

/// `SQLite` connection pool type used by todo adapters.
pub type TodoSqlitePool = Pool<ConnectionManager<SqliteConnection>>;

/// Builds a pool holding exactly one long-lived connection.
///
/// A `:memory:` database exists only as long as its connection, so the pool
/// never retires or recycles the connection. Concurrent callers queue for it,
/// which also serialises writers.
///
/// # Errors
///
/// Returns [`TodoRepositoryError::Persistence`] when the connection cannot be
/// opened.
pub fn build_pool(database_url: &str) -> TodoRepositoryResult<TodoSqlitePool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .max_size(1)
        .min_idle(Some(1))
        .idle_timeout(None)
        .max_lifetime(None)
        .build(manager)
        .map_err(TodoRepositoryError::persistence)
}

/// `SQLite`-backed todo repository.
#[derive(Debug, Clone)]
pub struct SqliteTodoRepository {
    pool: TodoSqlitePool,
}

impl SqliteTodoRepository {
    /// Creates a repository from an existing pool.
    ///
    /// The caller is responsible for having applied the schema; prefer
    /// [`SqliteTodoRepository::connect`].
    #[must_use]
    pub const fn new(pool: TodoSqlitePool) -> Self {
        Self { pool }
    }

    /// Opens `database_url` (`:memory:` or a file path) and applies the
    /// schema.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Persistence`] when the connection cannot
    /// be opened or the schema cannot be applied.
    pub fn connect(database_url: &str) -> TodoRepositoryResult<Self> {
        let repository = Self::with_schema(build_pool(database_url)?)?;
        tracing::info!(database_url, "todo store schema ready");
        Ok(repository)
    }

    /// Applies the schema through `pool` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Persistence`] when no connection is
    /// available or the schema cannot be applied.
    pub fn with_schema(pool: TodoSqlitePool) -> TodoRepositoryResult<Self> {
        {
            let mut connection = pool.get().map_err(TodoRepositoryError::persistence)?;
            connection
                .batch_execute(CREATE_TODO_ITEMS)
                .map_err(TodoRepositoryError::persistence)?;
        }
        Ok(Self::new(pool))
    }

    /// Runs `f` on a pooled connection off the async runtime.
    ///
    /// If the returned future is dropped before the closure finishes, the
    /// closure gives up at its next ticket check and any open transaction
    /// rolls back.
    async fn run_blocking<F, T>(&self, f: F) -> TodoRepositoryResult<T>
    where
        F: FnOnce(&mut SqliteConnection, &CallTicket) -> TodoRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        let ticket = CallTicket::default();
        let guard = AbandonOnDrop(Some(ticket.clone()));

        let joined = tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TodoRepositoryError::persistence)?;
            ticket.ensure_live()?;
            f(&mut connection, &ticket)
        })
        .await;

        guard.disarm();
        joined.map_err(TodoRepositoryError::persistence)?
    }
}

const PENDING: u8 = 0;
const COMMITTING: u8 = 1;
const ABANDONED: u8 = 2;

/// Shared state between an awaiting caller and its blocking closure.
#[derive(Debug, Clone, Default)]
struct CallTicket(Arc<AtomicU8>);

impl CallTicket {
    fn ensure_live(&self) -> TodoRepositoryResult<()> {
        if self.0.load(Ordering::Acquire) == ABANDONED {
            return Err(TodoRepositoryError::TimedOut);
        }
        Ok(())
    }

    /// Claims the right to commit. Fails once the caller has gone, which
    /// rolls back the surrounding transaction.
    fn begin_commit(&self) -> QueryResult<()> {
        match self
            .0
            .compare_exchange(PENDING, COMMITTING, Ordering::AcqRel, Ordering::Acquire)
        {
            Ok(_) | Err(COMMITTING) => Ok(()),
            Err(_) => Err(DieselError::RollbackTransaction),
        }
    }

    fn abandon(&self) {
        let claimed = self
            .0
            .compare_exchange(PENDING, ABANDONED, Ordering::AcqRel, Ordering::Acquire);
        if claimed == Err(COMMITTING) {
            tracing::warn!("caller gave up on a storage call that was already committing");
        }
    }
}

/// Abandons the ticket when the awaiting future is dropped early.
struct AbandonOnDrop(Option<CallTicket>);

impl AbandonOnDrop {
    fn disarm(mut self) {
        self.0 = None;
    }
}

impl Drop for AbandonOnDrop {
    fn drop(&mut self) {
        if let Some(ticket) = self.0.take() {
            ticket.abandon();
        }
    }
}

/// Maps a transaction failure, treating a ticket rollback as a timeout.
fn transaction_failure(err: DieselError) -> TodoRepositoryError {
    match err {
        DieselError::RollbackTransaction => TodoRepositoryError::TimedOut,
        other => TodoRepositoryError::persistence(other),
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn create(&self, new_item: &NewTodoItem) -> TodoRepositoryResult<TodoItem> {
        let text = new_item.text().as_str().to_owned();
        let created_at = new_item.created_at().naive_utc();

        self.run_blocking(move |connection, ticket| {
            let row = connection
                .transaction::<_, DieselError, _>(|tx| {
                    let inserted = diesel::insert_into(todo_items::table)
                        .values(&NewTodoRow {
                            text: &text,
                            is_completed: false,
                            created_at,
                        })
                        .returning(TodoRow::as_returning())
                        .get_result::<TodoRow>(tx)?;
                    ticket.begin_commit()?;
                    Ok(inserted)
                })
                .map_err(transaction_failure)?;
            row_to_item(row)
        })
        .await
    }

    async fn list(&self) -> TodoRepositoryResult<Vec<TodoItem>> {
        self.run_blocking(|connection, _ticket| {
            let rows = todo_items::table
                .select(TodoRow::as_select())
                .order(todo_items::id.asc())
                .load::<TodoRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            rows.into_iter().map(row_to_item).collect()
        })
        .await
    }

    async fn update_text(
        &self,
        id: TodoId,
        text: &TodoText,
        updated_at: DateTime<Utc>,
    ) -> TodoRepositoryResult<Option<TodoItem>> {
        let new_text = text.as_str().to_owned();
        let stamp = updated_at.naive_utc();

        self.run_blocking(move |connection, ticket| {
            let row = connection
                .transaction::<_, DieselError, _>(|tx| {
                    let Some(existing) = find_row(tx, id)? else {
                        return Ok(None);
                    };
                    let updated = diesel::update(todo_items::table.find(id.value()))
                        .set((
                            todo_items::text.eq(&new_text),
                            todo_items::updated_at.eq(Some(not_before(stamp, &existing))),
                        ))
                        .returning(TodoRow::as_returning())
                        .get_result::<TodoRow>(tx)?;
                    ticket.begin_commit()?;
                    Ok(Some(updated))
                })
                .map_err(transaction_failure)?;
            row.map(row_to_item).transpose()
        })
        .await
    }

    async fn mark_complete(
        &self,
        id: TodoId,
        completed_at: DateTime<Utc>,
    ) -> TodoRepositoryResult<Option<TodoItem>> {
        let stamp = completed_at.naive_utc();

        self.run_blocking(move |connection, ticket| {
            let row = connection
                .transaction::<_, DieselError, _>(|tx| {
                    let Some(existing) = find_row(tx, id)? else {
                        return Ok(None);
                    };
                    if existing.is_completed {
                        return Ok(Some(existing));
                    }
                    let completed = diesel::update(todo_items::table.find(id.value()))
                        .set((
                            todo_items::is_completed.eq(true),
                            todo_items::updated_at.eq(Some(not_before(stamp, &existing))),
                        ))
                        .returning(TodoRow::as_returning())
                        .get_result::<TodoRow>(tx)?;
                    ticket.begin_commit()?;
                    Ok(Some(completed))
                })
                .map_err(transaction_failure)?;
            row.map(row_to_item).transpose()
        })
        .await
    }

    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<bool> {
        self.run_blocking(move |connection, ticket| {
            let affected = connection
                .transaction::<_, DieselError, _>(|tx| {
                    let removed = diesel::delete(todo_items::table.find(id.value())).execute(tx)?;
                    ticket.begin_commit()?;
                    Ok(removed)
                })
                .map_err(transaction_failure)?;
            Ok(affected > 0)
        })
        .await
    }

    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<TodoItem>> {
        self.run_blocking(move |connection, _ticket| {
            let row = find_row(connection, id).map_err(TodoRepositoryError::persistence)?;
            row.map(row_to_item).transpose()
        })
        .await
    }
}

fn find_row(connection: &mut SqliteConnection, id: TodoId) -> QueryResult<Option<TodoRow>> {
    todo_items::table
        .find(id.value())
        .select(TodoRow::as_select())
        .first::<TodoRow>(connection)
        .optional()
}

/// Clamps a modification stamp so it never precedes the creation time.
fn not_before(stamp: NaiveDateTime, existing: &TodoRow) -> NaiveDateTime {
    stamp.max(existing.created_at)
}

fn row_to_item(row: TodoRow) -> TodoRepositoryResult<TodoItem> {
    let TodoRow {
        id,
        text: persisted_text,
        is_completed,
        created_at,
        updated_at,
    } = row;

    let text = TodoText::new(persisted_text).map_err(TodoRepositoryError::persistence)?;

    Ok(TodoItem::from_persisted(PersistedTodoData {
        id: TodoId::new(id),
        text,
        is_completed,
        created_at: created_at.and_utc(),
        updated_at: updated_at.map(|stamp| stamp.and_utc()),
    }))
}
