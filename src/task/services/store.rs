//! Working-set store for the tasks of the active matrix.

use super::{MoveAllError, MoveAllUndo};
use crate::task::domain::{
    Bin, Task, TaskId, TaskNotes, TaskPatch, TaskState, TaskStatus, TaskTitle,
};
use mockable::Clock;
use std::sync::Arc;
use tracing::debug;

/// Status, notes and optional title saved together from a task detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDetails {
    status: TaskStatus,
    notes: TaskNotes,
    title: Option<TaskTitle>,
}

impl TaskDetails {
    /// Creates details with status and notes.
    #[must_use]
    pub const fn new(status: TaskStatus, notes: TaskNotes) -> Self {
        Self {
            status,
            notes,
            title: None,
        }
    }

    /// Sets a replacement title.
    #[must_use]
    pub fn with_title(mut self, title: TaskTitle) -> Self {
        self.title = Some(title);
        self
    }
}

/// Flat five-bin task store that every task gesture runs against.
///
/// The store holds exactly one matrix's [`TaskState`] at a time; the
/// [`sync`](crate::sync) functions keep it aligned with the selected
/// matrix. Invalid references (unknown ids, redundant moves, blank titles)
/// are silent no-ops: mutators report whether anything changed rather than
/// failing. Bulk moves are the exception and return [`MoveAllError`].
#[derive(Debug, Clone)]
pub struct TaskStore<C>
where
    C: Clock + Send + Sync,
{
    state: TaskState,
    pending_undo: Option<MoveAllUndo>,
    last_issued: Option<TaskId>,
    clock: Arc<C>,
}

impl<C> TaskStore<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a store with five empty bins.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self::with_state(TaskState::new(), clock)
    }

    /// Creates a store holding `state`.
    #[must_use]
    pub const fn with_state(state: TaskState, clock: Arc<C>) -> Self {
        Self {
            state,
            pending_undo: None,
            last_issued: None,
            clock,
        }
    }

    /// Returns the current five-bin state.
    #[must_use]
    pub const fn state(&self) -> &TaskState {
        &self.state
    }

    /// Returns the recorded inverse of the last bulk move, if any.
    #[must_use]
    pub const fn pending_undo(&self) -> Option<&MoveAllUndo> {
        self.pending_undo.as_ref()
    }

    /// Returns the bin holding the task with `id`.
    #[must_use]
    pub fn locate(&self, id: TaskId) -> Option<Bin> {
        self.state.locate(id)
    }

    /// Appends a new task to the unassigned bin.
    ///
    /// Returns `None` without changing anything when the title is blank.
    pub fn add_task(&mut self, title: &str) -> Option<TaskId> {
        let validated = TaskTitle::new(title).ok()?;
        let id = self.next_task_id();
        let task = Task::new(id, validated, &*self.clock);
        self.state.insert(Bin::Unassigned, task, None);
        debug!(task_id = %id, "added task");
        Some(id)
    }

    /// Merges `patch` into the task with `id` in `bin`.
    pub fn update_task(&mut self, id: TaskId, bin: Bin, patch: &TaskPatch) -> bool {
        let clock = Arc::clone(&self.clock);
        let Some(task) = self.task_mut(id, bin) else {
            return false;
        };
        task.apply(patch, &*clock);
        true
    }

    /// Removes the task with `id` from `bin`.
    pub fn delete_task(&mut self, id: TaskId, bin: Bin) -> bool {
        let removed = self.state.take(id, bin).is_some();
        if removed {
            debug!(task_id = %id, bin = %bin, "deleted task");
        }
        removed
    }

    /// Flips the completion flag of the task with `id` in `bin`.
    pub fn toggle_complete(&mut self, id: TaskId, bin: Bin) -> bool {
        let Some(task) = self.task_mut(id, bin) else {
            return false;
        };
        task.toggle_completed();
        true
    }

    /// Moves a task between bins, or reorders it within one bin.
    ///
    /// Within a bin the move is a no-op unless `insert_index` names a new
    /// position. Across bins the task is inserted at `insert_index`, or
    /// appended when none is given. Indices past the end append.
    pub fn move_task(
        &mut self,
        id: TaskId,
        from: Bin,
        to: Bin,
        insert_index: Option<usize>,
    ) -> bool {
        if from == to {
            return insert_index.is_some_and(|index| self.reorder_task(id, from, index));
        }
        let Some(task) = self.state.take(id, from) else {
            return false;
        };
        self.state.insert(to, task, insert_index);
        debug!(task_id = %id, from = %from, to = %to, "moved task");
        true
    }

    /// Moves the task with `id` to `new_index` within `bin`.
    pub fn reorder_task(&mut self, id: TaskId, bin: Bin, new_index: usize) -> bool {
        let tasks = self.state.bin(bin);
        let Some(current) = tasks.iter().position(|task| task.id() == id) else {
            return false;
        };
        let last = tasks.len().saturating_sub(1);
        if new_index.min(last) == current {
            return false;
        }
        let Some(task) = self.state.take(id, bin) else {
            return false;
        };
        self.state.insert(bin, task, Some(new_index));
        debug!(task_id = %id, bin = %bin, index = new_index, "reordered task");
        true
    }

    /// Removes every completed task from `bin`, returning how many went.
    pub fn clear_completed(&mut self, bin: Bin) -> usize {
        let tasks = self.state.bin_mut(bin);
        let before = tasks.len();
        tasks.retain(|task| !task.is_completed());
        before.saturating_sub(tasks.len())
    }

    /// Moves every task of `from` to the end of `to`, preserving order.
    ///
    /// On success the inverse is recorded as the pending undo, replacing
    /// any earlier record.
    ///
    /// # Errors
    ///
    /// Returns [`MoveAllError::SameQuadrant`] when `from == to` and
    /// [`MoveAllError::NoTasksToMove`] when `from` is empty.
    pub fn move_all_between_quadrants(
        &mut self,
        from: Bin,
        to: Bin,
    ) -> Result<usize, MoveAllError> {
        if from == to {
            return Err(MoveAllError::SameQuadrant);
        }
        let moved = std::mem::take(self.state.bin_mut(from));
        if moved.is_empty() {
            return Err(MoveAllError::NoTasksToMove);
        }
        let task_ids: Vec<TaskId> = moved.iter().map(Task::id).collect();
        let moved_count = moved.len();
        self.state.bin_mut(to).extend(moved);
        self.pending_undo = Some(MoveAllUndo::new(from, to, task_ids));
        debug!(from = %from, to = %to, moved_count, "moved all tasks");
        Ok(moved_count)
    }

    /// Replays the inverse of the last bulk move and clears the undo slot.
    ///
    /// Returns `false` when nothing was recorded.
    pub fn undo_last_move_all(&mut self) -> bool {
        let Some(undo) = self.pending_undo.take() else {
            return false;
        };
        for id in undo.task_ids() {
            if let Some(task) = self.state.take(*id, undo.target()) {
                self.state.insert(undo.source(), task, None);
            }
        }
        debug!(from = %undo.target(), to = %undo.source(), "undid move all");
        true
    }

    /// Saves status, notes and an optional new title for the task with `id`,
    /// wherever it currently sits.
    pub fn save_details(&mut self, id: TaskId, details: TaskDetails) -> bool {
        let Some(bin) = self.locate(id) else {
            return false;
        };
        let mut patch = TaskPatch::new()
            .with_status(details.status)
            .with_notes(details.notes);
        if let Some(title) = details.title {
            let unchanged = self
                .state
                .find(id, bin)
                .is_some_and(|task| task.title() == &title);
            if !unchanged {
                patch = patch.with_title(title);
            }
        }
        self.update_task(id, bin, &patch)
    }

    /// Replaces the whole state, as done when another matrix is loaded.
    ///
    /// Returns `false` when `state` equals the current contents. A real
    /// replacement drops the pending undo, which refers to the old contents.
    pub fn replace_state(&mut self, state: TaskState) -> bool {
        if self.state == state {
            return false;
        }
        self.state = state;
        self.pending_undo = None;
        true
    }

    /// Empties all five bins and the undo slot.
    pub fn clear(&mut self) {
        self.state = TaskState::new();
        self.pending_undo = None;
    }

    fn task_mut(&mut self, id: TaskId, bin: Bin) -> Option<&mut Task> {
        self.state
            .bin_mut(bin)
            .iter_mut()
            .find(|task| task.id() == id)
    }

    fn next_task_id(&mut self) -> TaskId {
        let candidate = TaskId::from_timestamp(self.clock.utc());
        let floor = self
            .last_issued
            .max(self.state.max_task_id())
            .map(TaskId::successor);
        let id = floor.map_or(candidate, |minimum| candidate.max(minimum));
        self.last_issued = Some(id);
        id
    }
}
