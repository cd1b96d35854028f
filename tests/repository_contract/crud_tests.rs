//! Creation, lookup, listing and deletion contract tests.

use super::helpers::{StoreKind, at, new_item, open_store};
use canopy::todo::domain::TodoId;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_assigns_fresh_ids_and_pending_state(
    #[values(StoreKind::Memory, StoreKind::Sqlite)] kind: StoreKind,
) -> Result<(), eyre::Report> {
    let store = open_store(kind)?;

    let first = store.create(&new_item("Feed the baboons", 0)?).await?;
    let second = store.create(&new_item("Count the tamarins", 1)?).await?;

    eyre::ensure!(first.id() != second.id(), "ids must differ");
    eyre::ensure!(second.id() > first.id(), "ids must increase");
    eyre::ensure!(first.text().as_str() == "Feed the baboons", "text mismatch");
    eyre::ensure!(!first.is_completed(), "new items start pending");
    eyre::ensure!(first.created_at() == at(0), "created_at mismatch");
    eyre::ensure!(first.updated_at().is_none(), "new items have no update stamp");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_by_id_returns_stored_item_or_none(
    #[values(StoreKind::Memory, StoreKind::Sqlite)] kind: StoreKind,
) -> Result<(), eyre::Report> {
    let store = open_store(kind)?;
    let created = store.create(&new_item("Find me", 0)?).await?;

    let found = store.find_by_id(created.id()).await?;
    let missing = store.find_by_id(TodoId::new(9_999)).await?;

    eyre::ensure!(found.as_ref() == Some(&created), "lookup should match creation");
    eyre::ensure!(missing.is_none(), "unknown id should not be found");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_returns_every_item(
    #[values(StoreKind::Memory, StoreKind::Sqlite)] kind: StoreKind,
) -> Result<(), eyre::Report> {
    let store = open_store(kind)?;
    eyre::ensure!(store.list().await?.is_empty(), "new store should be empty");

    for (offset, text) in ["one", "two", "three"].into_iter().enumerate() {
        let seconds = i64::try_from(offset)?;
        store.create(&new_item(text, seconds)?).await?;
    }

    let mut texts: Vec<String> = store
        .list()
        .await?
        .iter()
        .map(|item| item.text().as_str().to_owned())
        .collect();
    texts.sort();
    eyre::ensure!(texts == ["one", "three", "two"], "unexpected items: {texts:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_once_and_never_reuses_ids(
    #[values(StoreKind::Memory, StoreKind::Sqlite)] kind: StoreKind,
) -> Result<(), eyre::Report> {
    let store = open_store(kind)?;
    let doomed = store.create(&new_item("Short lived", 0)?).await?;

    eyre::ensure!(store.delete(doomed.id()).await?, "first delete should succeed");
    eyre::ensure!(!store.delete(doomed.id()).await?, "second delete should miss");
    eyre::ensure!(
        store.find_by_id(doomed.id()).await?.is_none(),
        "deleted item should be gone"
    );

    let replacement = store.create(&new_item("Next", 1)?).await?;
    eyre::ensure!(replacement.id() > doomed.id(), "ids must not be reused");
    Ok(())
}
