//! Given steps for todo lifecycle BDD scenarios.

use super::world::{TodoWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("an empty todo list")]
fn empty_todo_list(world: &mut TodoWorld) -> Result<(), eyre::Report> {
    let items = run_async(world.service.list()).wrap_err("list todo items")?;
    eyre::ensure!(items.is_empty(), "expected an empty store");
    Ok(())
}

#[given(r#"a todo item "{text}" was added"#)]
fn todo_item_was_added(world: &mut TodoWorld, text: String) -> Result<(), eyre::Report> {
    let created = run_async(world.service.create(&text)).wrap_err("create todo item")?;
    world.added.push(created.clone());
    world.last_item = Some(created);
    Ok(())
}
