//! Bootstrapping matrices from a legacy task snapshot.

use super::helpers::{open, saved_tasks, storage, task, titles};
use dcyde::matrix::domain::MIGRATED_MATRIX_NAME;
use dcyde::persistence::{SnapshotStore, StorageConfig, adapters::InMemorySnapshotStore, codec};
use dcyde::task::domain::{Bin, TaskState};
use rstest::rstest;

fn seed_legacy(storage: &InMemorySnapshotStore, state: &TaskState) -> eyre::Result<()> {
    let document = codec::encode_tasks(state)?;
    storage.save(&StorageConfig::default().task_key, &document)?;
    Ok(())
}

#[rstest]
fn legacy_tasks_become_selected_migrated_matrix(
    storage: InMemorySnapshotStore,
) -> eyre::Result<()> {
    let legacy = TaskState::new()
        .with_bin(Bin::DoFirst, [task(1, "Ship")?])
        .with_bin(Bin::Eliminate, [task(2, "Doomscroll")?]);
    seed_legacy(&storage, &legacy)?;

    let workspace = open(&storage)?;

    let current = workspace
        .matrices()
        .current_matrix()
        .ok_or_else(|| eyre::eyre!("migrated matrix selected"))?;
    eyre::ensure!(current.name().as_str() == MIGRATED_MATRIX_NAME, "wrong name");
    eyre::ensure!(current.tasks() == &legacy, "tasks changed in migration");
    eyre::ensure!(titles(&workspace, Bin::DoFirst) == ["Ship"], "not loaded");
    eyre::ensure!(saved_tasks(&storage)?.is_empty(), "legacy snapshot kept");
    Ok(())
}

#[rstest]
fn empty_legacy_snapshot_creates_no_matrix(storage: InMemorySnapshotStore) -> eyre::Result<()> {
    seed_legacy(&storage, &TaskState::new())?;

    let workspace = open(&storage)?;

    eyre::ensure!(workspace.matrices().matrices().is_empty(), "matrix created");
    Ok(())
}

#[rstest]
fn deleted_matrices_are_not_resurrected(storage: InMemorySnapshotStore) -> eyre::Result<()> {
    seed_legacy(
        &storage,
        &TaskState::new().with_bin(Bin::Schedule, [task(1, "Old")?]),
    )?;
    let mut workspace = open(&storage)?;
    let migrated = workspace
        .matrices()
        .current_matrix_id()
        .cloned()
        .ok_or_else(|| eyre::eyre!("migrated matrix selected"))?;

    workspace.delete_matrix(&migrated);
    drop(workspace);

    let reopened = open(&storage)?;
    eyre::ensure!(reopened.matrices().matrices().is_empty(), "matrix resurrected");
    eyre::ensure!(reopened.tasks().state().is_empty(), "tasks resurrected");
    Ok(())
}

#[rstest]
fn deleting_through_matrix_operations_does_not_resurrect_tasks(
    storage: InMemorySnapshotStore,
) -> eyre::Result<()> {
    let mut workspace = open(&storage)?;
    let work = workspace.create_matrix("Work");
    workspace.update_tasks(|tasks| tasks.add_task("Secret"));

    workspace.update_matrices(|matrices| matrices.delete_matrix(&work));

    eyre::ensure!(workspace.tasks().state().is_empty(), "stale task store");
    eyre::ensure!(saved_tasks(&storage)?.is_empty(), "stale tasks saved");
    drop(workspace);

    let reopened = open(&storage)?;
    eyre::ensure!(reopened.matrices().matrices().is_empty(), "matrix resurrected");
    eyre::ensure!(reopened.tasks().state().is_empty(), "tasks resurrected");
    Ok(())
}

#[rstest]
fn deselecting_through_matrix_operations_keeps_remaining_matrices(
    storage: InMemorySnapshotStore,
) -> eyre::Result<()> {
    let mut workspace = open(&storage)?;
    let home = workspace.create_matrix("Home");
    workspace.update_tasks(|tasks| tasks.add_task("Groceries"));
    let work = workspace.create_matrix("Work");
    workspace.update_tasks(|tasks| tasks.add_task("Report"));

    workspace.update_matrices(|matrices| matrices.delete_matrix(&work));

    eyre::ensure!(workspace.tasks().state().is_empty(), "deleted tasks shown");
    let kept = workspace
        .matrices()
        .matrix(&home)
        .ok_or_else(|| eyre::eyre!("home matrix kept"))?;
    eyre::ensure!(kept.tasks().total_tasks() == 1, "home tasks changed");
    Ok(())
}

#[rstest]
fn unfiled_tasks_are_migrated_on_next_open(storage: InMemorySnapshotStore) -> eyre::Result<()> {
    let mut workspace = open(&storage)?;
    workspace.update_tasks(|tasks| tasks.add_task("Before any matrix"));
    drop(workspace);

    let reopened = open(&storage)?;
    eyre::ensure!(reopened.matrices().matrices().len() == 1, "not migrated");
    eyre::ensure!(
        titles(&reopened, Bin::Unassigned) == ["Before any matrix"],
        "task lost"
    );
    Ok(())
}
