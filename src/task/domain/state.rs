//! The five-bin task layout of a single matrix.

use super::{Bin, Task, TaskId};
use serde::{Deserialize, Serialize};

/// Ordered task lists for each of the five bins.
///
/// Order within a bin is the drag order shown to the user. This is also
/// the persisted shape of the legacy task snapshot, so missing bins load as
/// empty lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskState {
    #[serde(default)]
    unassigned: Vec<Task>,
    #[serde(default)]
    do_first: Vec<Task>,
    #[serde(default)]
    schedule: Vec<Task>,
    #[serde(default)]
    delegate: Vec<Task>,
    #[serde(default)]
    eliminate: Vec<Task>,
}

impl TaskState {
    /// Creates a state with five empty bins.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of `bin`, returning the updated state.
    #[must_use]
    pub fn with_bin(mut self, bin: Bin, tasks: impl IntoIterator<Item = Task>) -> Self {
        *self.bin_mut(bin) = tasks.into_iter().collect();
        self
    }

    /// Returns the tasks of `bin` in order.
    #[must_use]
    pub fn bin(&self, bin: Bin) -> &[Task] {
        match bin {
            Bin::Unassigned => &self.unassigned,
            Bin::DoFirst => &self.do_first,
            Bin::Schedule => &self.schedule,
            Bin::Delegate => &self.delegate,
            Bin::Eliminate => &self.eliminate,
        }
    }

    pub(crate) fn bin_mut(&mut self, bin: Bin) -> &mut Vec<Task> {
        match bin {
            Bin::Unassigned => &mut self.unassigned,
            Bin::DoFirst => &mut self.do_first,
            Bin::Schedule => &mut self.schedule,
            Bin::Delegate => &mut self.delegate,
            Bin::Eliminate => &mut self.eliminate,
        }
    }

    /// Iterates over every bin with its tasks, in document order.
    pub fn bins(&self) -> impl Iterator<Item = (Bin, &[Task])> {
        Bin::ALL.into_iter().map(|bin| (bin, self.bin(bin)))
    }

    /// Iterates over every task in every bin.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.bins().flat_map(|(_, tasks)| tasks.iter())
    }

    /// Returns the number of tasks across all five bins.
    #[must_use]
    pub fn total_tasks(&self) -> usize {
        self.bins().map(|(_, tasks)| tasks.len()).sum()
    }

    /// Returns `true` when every bin is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bins().all(|(_, tasks)| tasks.is_empty())
    }

    /// Returns the task with `id` if it sits in `bin`.
    #[must_use]
    pub fn find(&self, id: TaskId, bin: Bin) -> Option<&Task> {
        self.bin(bin).iter().find(|task| task.id() == id)
    }

    /// Returns the bin holding the task with `id`.
    #[must_use]
    pub fn locate(&self, id: TaskId) -> Option<Bin> {
        self.bins()
            .find(|(_, tasks)| tasks.iter().any(|task| task.id() == id))
            .map(|(bin, _)| bin)
    }

    /// Returns the largest task identifier present, if any.
    #[must_use]
    pub fn max_task_id(&self) -> Option<TaskId> {
        self.tasks().map(Task::id).max()
    }

    /// Removes and returns the task with `id` from `bin`.
    pub(crate) fn take(&mut self, id: TaskId, bin: Bin) -> Option<Task> {
        let tasks = self.bin_mut(bin);
        let position = tasks.iter().position(|task| task.id() == id)?;
        Some(tasks.remove(position))
    }

    /// Inserts `task` into `bin` at `index`, appending when the index is
    /// absent or past the end.
    pub(crate) fn insert(&mut self, bin: Bin, task: Task, index: Option<usize>) {
        let tasks = self.bin_mut(bin);
        let position = index.map_or(tasks.len(), |requested| requested.min(tasks.len()));
        tasks.insert(position, task);
    }
}
