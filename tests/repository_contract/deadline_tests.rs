//! Storage deadline tests against the `SQLite` adapter.
//!
//! A call that misses its deadline must leave the store untouched, even when
//! its blocking work is still queued behind the single pooled connection.

use std::sync::Arc;
use std::time::Duration;

use super::helpers::{FixedClock, at, new_item};
use canopy::todo::{
    adapters::sqlite::{SqliteTodoRepository, build_pool},
    ports::{TodoRepository, TodoRepositoryError},
    services::{TodoLifecycleService, TodoServiceError},
};
use rstest::rstest;

type SqliteService = TodoLifecycleService<SqliteTodoRepository, FixedClock>;

fn service_with_deadline(repository: &SqliteTodoRepository, millis: u64) -> SqliteService {
    TodoLifecycleService::new(
        Arc::new(repository.clone()),
        Arc::new(FixedClock(at(0))),
    )
    .with_storage_timeout(Duration::from_millis(millis))
}

fn is_timeout<T>(result: &Result<T, TodoServiceError>) -> bool {
    matches!(
        result,
        Err(TodoServiceError::Storage(TodoRepositoryError::TimedOut))
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn timed_out_create_behind_a_busy_connection_is_never_written()
-> Result<(), eyre::Report> {
    let pool = build_pool(":memory:")?;
    let repository = SqliteTodoRepository::with_schema(pool.clone())?;
    let service = service_with_deadline(&repository, 50);

    let held = pool.get()?;
    let result = service.create("ghost").await;
    drop(held);

    eyre::ensure!(is_timeout(&result), "expected a timeout, got {result:?}");
    let after = repository.create(&new_item("after", 1)?).await?;
    let items = repository.list().await?;
    eyre::ensure!(
        items.iter().all(|item| item.text().as_str() != "ghost"),
        "timed-out create must not be persisted"
    );
    eyre::ensure!(items == vec![after], "only the later item should be stored");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn timed_out_update_and_delete_leave_the_item_unchanged() -> Result<(), eyre::Report> {
    let pool = build_pool(":memory:")?;
    let repository = SqliteTodoRepository::with_schema(pool.clone())?;
    let original = repository
        .create(&new_item("Original", 0)?)
        .await?;
    let service = service_with_deadline(&repository, 50);

    let held = pool.get()?;
    let update = service.update(original.id(), "Rewritten").await;
    let complete = service.complete(original.id()).await;
    let delete = service.delete(original.id()).await;
    drop(held);

    eyre::ensure!(is_timeout(&update), "expected update timeout, got {update:?}");
    eyre::ensure!(is_timeout(&complete), "expected complete timeout, got {complete:?}");
    eyre::ensure!(is_timeout(&delete), "expected delete timeout, got {delete:?}");
    let stored = repository.find_by_id(original.id()).await?;
    eyre::ensure!(
        stored.as_ref() == Some(&original),
        "item should be untouched, found {stored:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_outcome_matches_store_under_write_contention() -> Result<(), eyre::Report> {
    let repository = SqliteTodoRepository::connect(":memory:")?;
    let background = TodoLifecycleService::new(
        Arc::new(repository.clone()),
        Arc::new(FixedClock(at(0))),
    );

    let mut writers = Vec::new();
    for index in 0..200 {
        let writer = background.clone();
        writers.push(tokio::spawn(async move {
            writer.create(&format!("queued {index}")).await
        }));
    }
    let result = service_with_deadline(&repository, 1).create("ghost").await;
    for writer in writers {
        writer.await??;
    }

    let items = repository.list().await?;
    let ghost_stored = items.iter().any(|item| item.text().as_str() == "ghost");
    if is_timeout(&result) {
        eyre::ensure!(!ghost_stored, "timed-out create must not be persisted");
        eyre::ensure!(items.len() == 200, "expected 200 items, found {}", items.len());
    } else {
        result?;
        eyre::ensure!(ghost_stored, "successful create must be persisted");
    }
    Ok(())
}
