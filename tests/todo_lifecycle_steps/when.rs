//! When steps for todo lifecycle BDD scenarios.

use super::world::{TodoWorld, run_async};
use canopy::todo::domain::TodoId;
use rstest_bdd_macros::when;

#[when(r#"a todo item is added with text "{text}""#)]
fn add_todo_item(world: &mut TodoWorld, text: String) {
    let outcome = run_async(world.service.create(&text));
    if let Ok(item) = &outcome {
        world.added.push(item.clone());
    }
    world.record(outcome);
}

#[when("the last item is completed")]
fn complete_last_item(world: &mut TodoWorld) -> Result<(), eyre::Report> {
    let id = world.last_item()?.id();
    let outcome = run_async(world.service.complete(id));
    world.record(outcome);
    Ok(())
}

#[when(r#"the last item is renamed to "{text}""#)]
fn rename_last_item(world: &mut TodoWorld, text: String) -> Result<(), eyre::Report> {
    let id = world.last_item()?.id();
    let outcome = run_async(world.service.update(id, &text));
    world.record(outcome);
    Ok(())
}

#[when("todo item {id:i64} is completed")]
fn complete_item_by_id(world: &mut TodoWorld, id: i64) {
    let outcome = run_async(world.service.complete(TodoId::new(id)));
    world.record(outcome);
}

#[when(r#"the todo item "{text}" is completed"#)]
fn complete_item_by_text(world: &mut TodoWorld, text: String) -> Result<(), eyre::Report> {
    let id = world
        .added
        .iter()
        .find(|item| item.text().as_str() == text)
        .map(|item| item.id())
        .ok_or_else(|| eyre::eyre!("no added item with text {text:?}"))?;
    let outcome = run_async(world.service.complete(id));
    world.record(outcome);
    Ok(())
}
