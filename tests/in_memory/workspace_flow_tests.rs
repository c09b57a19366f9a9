//! Task and matrix operations driven through the workspace.

use super::helpers::{TestWorkspace, open, saved_matrices, storage, titles};
use dcyde::matrix::services::MatrixDeletion;
use dcyde::persistence::adapters::InMemorySnapshotStore;
use dcyde::sync::SyncOutcome;
use dcyde::task::domain::{Bin, TaskNotes, TaskStatus};
use dcyde::task::services::{MoveAllError, TaskDetails};
use rstest::rstest;

fn workspace_with_matrix(storage: &InMemorySnapshotStore) -> eyre::Result<TestWorkspace> {
    let mut workspace = open(storage)?;
    workspace.create_matrix("Work");
    Ok(workspace)
}

#[rstest]
fn task_edits_land_in_selected_matrix_and_storage(
    storage: InMemorySnapshotStore,
) -> eyre::Result<()> {
    let mut workspace = workspace_with_matrix(&storage)?;

    let id = workspace
        .update_tasks(|tasks| tasks.add_task("Write report"))
        .ok_or_else(|| eyre::eyre!("title is not blank"))?;
    workspace.update_tasks(|tasks| tasks.move_task(id, Bin::Unassigned, Bin::DoFirst, None));

    let current = workspace
        .matrices()
        .current_matrix()
        .ok_or_else(|| eyre::eyre!("matrix selected"))?;
    eyre::ensure!(current.tasks().locate(id) == Some(Bin::DoFirst), "not pushed");

    let saved = saved_matrices(&storage)?;
    let persisted = saved
        .matrices
        .first()
        .ok_or_else(|| eyre::eyre!("matrix saved"))?;
    eyre::ensure!(persisted.tasks().locate(id) == Some(Bin::DoFirst), "not saved");
    Ok(())
}

#[rstest]
fn switching_matrices_swaps_task_store(storage: InMemorySnapshotStore) -> eyre::Result<()> {
    let mut workspace = open(&storage)?;
    let work = workspace.create_matrix("Work");
    workspace.update_tasks(|tasks| tasks.add_task("Work item"));
    let home = workspace.create_matrix("Home");

    eyre::ensure!(workspace.tasks().state().is_empty(), "new matrix starts empty");
    workspace.update_tasks(|tasks| tasks.add_task("Home item"));

    eyre::ensure!(
        workspace.select_matrix(Some(work)) == SyncOutcome::Copied,
        "selection did not load tasks"
    );
    eyre::ensure!(titles(&workspace, Bin::Unassigned) == ["Work item"], "wrong tasks");

    workspace.select_matrix(Some(home));
    eyre::ensure!(titles(&workspace, Bin::Unassigned) == ["Home item"], "wrong tasks");
    Ok(())
}

#[rstest]
fn reopening_restores_selection_and_tasks(storage: InMemorySnapshotStore) -> eyre::Result<()> {
    let mut workspace = workspace_with_matrix(&storage)?;
    workspace.update_tasks(|tasks| tasks.add_task("Persisted"));
    drop(workspace);

    let reopened = open(&storage)?;
    eyre::ensure!(titles(&reopened, Bin::Unassigned) == ["Persisted"], "not restored");
    Ok(())
}

#[rstest]
fn move_all_and_undo_round_trip_through_workspace(
    storage: InMemorySnapshotStore,
) -> eyre::Result<()> {
    let mut workspace = workspace_with_matrix(&storage)?;
    for title in ["A", "B"] {
        workspace.update_tasks(|tasks| {
            let id = tasks.add_task(title)?;
            Some(tasks.move_task(id, Bin::Unassigned, Bin::DoFirst, None))
        });
    }

    let moved = workspace.update_tasks(|tasks| {
        tasks.move_all_between_quadrants(Bin::DoFirst, Bin::Schedule)
    });
    eyre::ensure!(moved == Ok(2), "unexpected result {moved:?}");
    eyre::ensure!(titles(&workspace, Bin::Schedule) == ["A", "B"], "order lost");

    let again = workspace.update_tasks(|tasks| {
        tasks.move_all_between_quadrants(Bin::DoFirst, Bin::Schedule)
    });
    eyre::ensure!(again == Err(MoveAllError::NoTasksToMove), "empty source accepted");

    eyre::ensure!(
        workspace.update_tasks(|tasks| tasks.undo_last_move_all()),
        "undo unavailable"
    );
    eyre::ensure!(titles(&workspace, Bin::DoFirst) == ["A", "B"], "undo incomplete");
    let current = workspace
        .matrices()
        .current_matrix()
        .ok_or_else(|| eyre::eyre!("matrix selected"))?;
    eyre::ensure!(current.tasks().bin(Bin::Schedule).is_empty(), "matrix not synced");
    Ok(())
}

#[rstest]
fn deleting_selected_matrix_clears_task_store(
    storage: InMemorySnapshotStore,
) -> eyre::Result<()> {
    let mut workspace = open(&storage)?;
    let keep = workspace.create_matrix("Keep");
    let doomed = workspace.create_matrix("Doomed");
    workspace.update_tasks(|tasks| tasks.add_task("Gone with it"));

    let outcome = workspace.delete_matrix(&doomed);

    eyre::ensure!(
        outcome == MatrixDeletion::Deleted { was_current: true },
        "unexpected {outcome:?}"
    );
    eyre::ensure!(workspace.tasks().state().is_empty(), "stale tasks visible");
    eyre::ensure!(workspace.matrices().current_matrix_id().is_none(), "dangling");
    eyre::ensure!(workspace.matrices().matrix(&keep).is_some(), "wrong matrix removed");
    Ok(())
}

#[rstest]
fn move_task_to_new_matrix_keeps_current_selection(
    storage: InMemorySnapshotStore,
) -> eyre::Result<()> {
    let mut workspace = workspace_with_matrix(&storage)?;
    let current = workspace
        .matrices()
        .current_matrix_id()
        .cloned()
        .ok_or_else(|| eyre::eyre!("matrix selected"))?;
    let id = workspace
        .update_tasks(|tasks| {
            let id = tasks.add_task("Side quest")?;
            tasks.move_task(id, Bin::Unassigned, Bin::Delegate, None);
            Some(id)
        })
        .ok_or_else(|| eyre::eyre!("task added"))?;

    let created = workspace
        .move_task_to_new_matrix(id, Bin::Delegate, "Side Projects")
        .ok_or_else(|| eyre::eyre!("task should move"))?;

    eyre::ensure!(
        workspace.matrices().current_matrix_id() == Some(&current),
        "selection changed"
    );
    eyre::ensure!(titles(&workspace, Bin::Delegate).is_empty(), "task still shown");
    let target = workspace
        .matrix_by_slug("side-projects")
        .ok_or_else(|| eyre::eyre!("slug should resolve"))?;
    eyre::ensure!(target.id() == &created, "slug resolved elsewhere");
    eyre::ensure!(target.tasks().locate(id) == Some(Bin::Delegate), "task not moved");
    Ok(())
}

#[rstest]
fn move_task_to_new_matrix_requires_task_in_bin(
    storage: InMemorySnapshotStore,
) -> eyre::Result<()> {
    let mut workspace = workspace_with_matrix(&storage)?;
    let id = workspace
        .update_tasks(|tasks| tasks.add_task("Inbox"))
        .ok_or_else(|| eyre::eyre!("task added"))?;

    eyre::ensure!(
        workspace
            .move_task_to_new_matrix(id, Bin::Schedule, "Nowhere")
            .is_none(),
        "moved from wrong bin"
    );
    eyre::ensure!(workspace.matrices().matrices().len() == 1, "matrix created anyway");
    Ok(())
}

#[rstest]
fn saving_details_updates_matrix(storage: InMemorySnapshotStore) -> eyre::Result<()> {
    let mut workspace = workspace_with_matrix(&storage)?;
    let id = workspace
        .update_tasks(|tasks| tasks.add_task("Draft"))
        .ok_or_else(|| eyre::eyre!("task added"))?;
    let details = TaskDetails::new(TaskStatus::InReview, TaskNotes::new("check figures")?);

    eyre::ensure!(
        workspace.update_tasks(|tasks| tasks.save_details(id, details)),
        "details not saved"
    );

    let current = workspace
        .matrices()
        .current_matrix()
        .ok_or_else(|| eyre::eyre!("matrix selected"))?;
    let saved = current
        .tasks()
        .find(id, Bin::Unassigned)
        .ok_or_else(|| eyre::eyre!("task present"))?;
    eyre::ensure!(saved.status() == TaskStatus::InReview, "status not synced");
    eyre::ensure!(saved.notes_last_modified().is_some(), "notes not stamped");
    Ok(())
}
