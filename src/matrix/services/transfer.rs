//! Moving tasks between matrices.

use super::MatrixStore;
use crate::matrix::domain::MatrixId;
use crate::task::domain::{Bin, Task, TaskId, TaskState};
use mockable::Clock;
use tracing::debug;

impl<C> MatrixStore<C>
where
    C: Clock + Send + Sync,
{
    /// Moves one task from a bin of one matrix to the end of a bin of
    /// another. The target bin defaults to the source bin.
    ///
    /// Returns `false` when either matrix or the task is missing. Moving a
    /// task onto the bin it already occupies changes nothing and succeeds.
    pub fn move_task_to_matrix(
        &mut self,
        task_id: TaskId,
        from_matrix: &MatrixId,
        from_bin: Bin,
        to_matrix: &MatrixId,
        to_bin: Option<Bin>,
    ) -> bool {
        if from_matrix == to_matrix && to_bin.unwrap_or(from_bin) == from_bin {
            return self
                .matrix(from_matrix)
                .is_some_and(|matrix| matrix.tasks().find(task_id, from_bin).is_some());
        }
        let moved = self.transfer(from_matrix, from_bin, to_matrix, to_bin, |tasks| {
            tasks.take(task_id, from_bin).into_iter().collect()
        });
        moved == 1
    }

    /// Moves every task of a bin to the end of a bin of another matrix,
    /// preserving order. The target bin defaults to the source bin.
    ///
    /// Returns the number of tasks moved: zero when the bin is empty or
    /// either matrix is missing.
    pub fn move_all_tasks_to_matrix(
        &mut self,
        from_matrix: &MatrixId,
        from_bin: Bin,
        to_matrix: &MatrixId,
        to_bin: Option<Bin>,
    ) -> usize {
        self.transfer(from_matrix, from_bin, to_matrix, to_bin, |tasks| {
            std::mem::take(tasks.bin_mut(from_bin))
        })
    }

    /// Removes the tasks chosen by `select` from the source matrix and
    /// appends them to the target bin within one call, so no observer can
    /// see a task in both matrices or in neither.
    fn transfer(
        &mut self,
        from_matrix: &MatrixId,
        from_bin: Bin,
        to_matrix: &MatrixId,
        to_bin: Option<Bin>,
        select: impl FnOnce(&mut TaskState) -> Vec<Task>,
    ) -> usize {
        let target_bin = to_bin.unwrap_or(from_bin);
        if from_matrix == to_matrix && from_bin == target_bin {
            return 0;
        }
        let (Some(source_index), Some(target_index)) =
            (self.position(from_matrix), self.position(to_matrix))
        else {
            return 0;
        };
        let Some(source) = self.matrices.get_mut(source_index) else {
            return 0;
        };
        let moved = select(source.tasks_mut());
        if moved.is_empty() {
            return 0;
        }
        let moved_count = moved.len();
        source.touch(&*self.clock);
        if let Some(target) = self.matrices.get_mut(target_index) {
            target.tasks_mut().bin_mut(target_bin).extend(moved);
            target.touch(&*self.clock);
        }
        debug!(
            from_matrix = %from_matrix,
            to_matrix = %to_matrix,
            from_bin = %from_bin,
            to_bin = %target_bin,
            moved_count,
            "transferred tasks between matrices"
        );
        moved_count
    }
}
