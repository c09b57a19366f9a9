//! Then steps for matrix transfer BDD scenarios.

use super::world::{MatrixTransferWorld, parse_bin};
use dcyde::task::domain::{Task, TaskId};
use rstest_bdd_macros::then;
use std::collections::HashSet;

fn bin_titles(
    world: &MatrixTransferWorld,
    bin: &str,
    name: &str,
) -> Result<Vec<String>, eyre::Report> {
    let parsed = parse_bin(bin)?;
    let id = world.existing_matrix(name)?;
    let matrix = world
        .store
        .matrix(&id)
        .ok_or_else(|| eyre::eyre!("matrix {name} missing from store"))?;
    Ok(matrix
        .tasks()
        .bin(parsed)
        .iter()
        .map(|task| task.title().as_str().to_owned())
        .collect())
}

#[then("the move succeeds")]
fn move_succeeds(world: &MatrixTransferWorld) -> Result<(), eyre::Report> {
    if world.last_moved != Some(true) {
        return Err(eyre::eyre!("expected a successful move, got {:?}", world.last_moved));
    }
    Ok(())
}

#[then("the move is rejected")]
fn move_rejected(world: &MatrixTransferWorld) -> Result<(), eyre::Report> {
    if world.last_moved != Some(false) {
        return Err(eyre::eyre!("expected a rejected move, got {:?}", world.last_moved));
    }
    Ok(())
}

#[then("{count:u64} tasks were moved")]
fn tasks_were_moved(world: &MatrixTransferWorld, count: u64) -> Result<(), eyre::Report> {
    let expected = usize::try_from(count)?;
    if world.last_count != Some(expected) {
        return Err(eyre::eyre!("expected {count} moved, got {:?}", world.last_count));
    }
    Ok(())
}

#[then(r#"bin "{bin}" of matrix "{name}" does not contain "{title}""#)]
fn bin_does_not_contain(
    world: &MatrixTransferWorld,
    bin: String,
    name: String,
    title: String,
) -> Result<(), eyre::Report> {
    let titles = bin_titles(world, &bin, &name)?;
    if titles.contains(&title) {
        return Err(eyre::eyre!("{title} still in {name}/{bin}: {titles:?}"));
    }
    Ok(())
}

#[then(r#"bin "{bin}" of matrix "{name}" contains exactly "{title}""#)]
fn bin_contains_exactly(
    world: &MatrixTransferWorld,
    bin: String,
    name: String,
    title: String,
) -> Result<(), eyre::Report> {
    let titles = bin_titles(world, &bin, &name)?;
    if titles != [title.clone()] {
        return Err(eyre::eyre!("expected only {title} in {name}/{bin}, found {titles:?}"));
    }
    Ok(())
}

#[then(r#"bin "{bin}" of matrix "{name}" lists "{expected}""#)]
fn bin_lists(
    world: &MatrixTransferWorld,
    bin: String,
    name: String,
    expected: String,
) -> Result<(), eyre::Report> {
    let titles = bin_titles(world, &bin, &name)?;
    let wanted: Vec<&str> = expected.split(", ").collect();
    if titles != wanted {
        return Err(eyre::eyre!("expected {wanted:?} in {name}/{bin}, found {titles:?}"));
    }
    Ok(())
}

#[then("every task appears exactly once")]
fn every_task_once(world: &MatrixTransferWorld) -> Result<(), eyre::Report> {
    let all: Vec<TaskId> = world
        .store
        .matrices()
        .iter()
        .flat_map(|matrix| matrix.tasks().tasks().map(Task::id))
        .collect();
    let unique: HashSet<TaskId> = all.iter().copied().collect();
    if unique.len() != all.len() {
        return Err(eyre::eyre!("duplicate task ids across matrices: {all:?}"));
    }
    if unique.len() != world.tasks.len() {
        return Err(eyre::eyre!(
            "expected {} tasks, found {}",
            world.tasks.len(),
            unique.len()
        ));
    }
    Ok(())
}
