//! Then steps for todo lifecycle BDD scenarios.

use super::world::{TodoWorld, run_async};
use canopy::todo::services::TodoServiceError;
use eyre::WrapErr;
use rstest_bdd_macros::then;

#[then(r#"the last item has text "{text}""#)]
fn last_item_has_text(world: &TodoWorld, text: String) -> Result<(), eyre::Report> {
    let item = world.last_item()?;
    eyre::ensure!(
        item.text().as_str() == text,
        "expected text {text:?}, found {:?}",
        item.text().as_str()
    );
    Ok(())
}

#[then("the last item is pending")]
fn last_item_is_pending(world: &TodoWorld) -> Result<(), eyre::Report> {
    let item = world.last_item()?;
    eyre::ensure!(!item.is_completed(), "expected a pending item");
    eyre::ensure!(item.updated_at().is_none(), "pending item should be unmodified");
    Ok(())
}

#[then("the last item is completed with a modification time")]
fn last_item_is_completed(world: &TodoWorld) -> Result<(), eyre::Report> {
    let item = world.last_item()?;
    eyre::ensure!(item.is_completed(), "expected a completed item");
    let stamp = item
        .updated_at()
        .ok_or_else(|| eyre::eyre!("completed item should carry a modification time"))?;
    eyre::ensure!(stamp >= item.created_at(), "modification precedes creation");
    Ok(())
}

#[then("the operation fails with a validation error")]
fn fails_with_validation_error(world: &TodoWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        matches!(world.last_error, Some(TodoServiceError::Validation(_))),
        "expected a validation error, got {:?}",
        world.last_error
    );
    Ok(())
}

#[then("the operation fails with a not found error")]
fn fails_with_not_found_error(world: &TodoWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        matches!(world.last_error, Some(TodoServiceError::NotFound(_))),
        "expected a not found error, got {:?}",
        world.last_error
    );
    Ok(())
}

#[then("the todo list is empty")]
fn todo_list_is_empty(world: &TodoWorld) -> Result<(), eyre::Report> {
    let items = run_async(world.service.list()).wrap_err("list todo items")?;
    eyre::ensure!(items.is_empty(), "expected no items, found {}", items.len());
    Ok(())
}

#[then(r#"the todo list order is "{order}""#)]
fn todo_list_order(world: &TodoWorld, order: String) -> Result<(), eyre::Report> {
    let items = run_async(world.service.list()).wrap_err("list todo items")?;
    let actual: Vec<&str> = items.iter().map(|item| item.text().as_str()).collect();
    let expected: Vec<&str> = order.split(", ").collect();
    eyre::ensure!(actual == expected, "expected {expected:?}, found {actual:?}");
    Ok(())
}

#[then("{completed:usize} of {total:usize} todo items are completed")]
fn completion_counts(world: &TodoWorld, completed: usize, total: usize) -> Result<(), eyre::Report> {
    let statistics = run_async(world.service.statistics()).wrap_err("compute statistics")?;
    eyre::ensure!(
        statistics.completed_todos == completed && statistics.total_todos == total,
        "expected {completed} of {total}, found {} of {}",
        statistics.completed_todos,
        statistics.total_todos
    );
    Ok(())
}
