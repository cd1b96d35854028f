//! Text replacement and completion contract tests.

use super::helpers::{StoreKind, at, new_item, open_store};
use canopy::todo::domain::{TodoId, TodoText};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_text_replaces_text_and_stamps(
    #[values(StoreKind::Memory, StoreKind::Sqlite)] kind: StoreKind,
) -> Result<(), eyre::Report> {
    let store = open_store(kind)?;
    let created = store.create(&new_item("Draft", 0)?).await?;

    let updated = store
        .update_text(created.id(), &TodoText::new("Final")?, at(30))
        .await?
        .ok_or_else(|| eyre::eyre!("existing item should update"))?;

    eyre::ensure!(updated.text().as_str() == "Final", "text should change");
    eyre::ensure!(updated.updated_at() == Some(at(30)), "stamp should be set");
    eyre::ensure!(updated.created_at() == created.created_at(), "created_at is fixed");
    eyre::ensure!(
        store.find_by_id(created.id()).await?.as_ref() == Some(&updated),
        "update should be persisted"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_stamp_is_clamped_to_creation_time(
    #[values(StoreKind::Memory, StoreKind::Sqlite)] kind: StoreKind,
) -> Result<(), eyre::Report> {
    let store = open_store(kind)?;
    let created = store.create(&new_item("Skewed", 60)?).await?;

    let updated = store
        .update_text(created.id(), &TodoText::new("Still skewed")?, at(0))
        .await?
        .ok_or_else(|| eyre::eyre!("existing item should update"))?;

    eyre::ensure!(
        updated.updated_at() == Some(created.created_at()),
        "stamp must not precede creation"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn mark_complete_is_idempotent(
    #[values(StoreKind::Memory, StoreKind::Sqlite)] kind: StoreKind,
) -> Result<(), eyre::Report> {
    let store = open_store(kind)?;
    let created = store.create(&new_item("Finish me", 0)?).await?;

    let first = store
        .mark_complete(created.id(), at(10))
        .await?
        .ok_or_else(|| eyre::eyre!("existing item should complete"))?;
    let second = store
        .mark_complete(created.id(), at(20))
        .await?
        .ok_or_else(|| eyre::eyre!("existing item should still be found"))?;

    eyre::ensure!(first.is_completed(), "item should be completed");
    eyre::ensure!(first.updated_at() == Some(at(10)), "first stamp recorded");
    eyre::ensure!(second == first, "second completion must not change the item");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn mutations_on_unknown_ids_report_none(
    #[values(StoreKind::Memory, StoreKind::Sqlite)] kind: StoreKind,
) -> Result<(), eyre::Report> {
    let store = open_store(kind)?;
    let missing = TodoId::new(404);

    let updated = store
        .update_text(missing, &TodoText::new("Ghost")?, at(1))
        .await?;
    let completed = store.mark_complete(missing, at(1)).await?;

    eyre::ensure!(updated.is_none(), "update of unknown id should be None");
    eyre::ensure!(completed.is_none(), "completion of unknown id should be None");
    eyre::ensure!(store.list().await?.is_empty(), "store should stay empty");
    Ok(())
}
