//! In-memory task list state.
//!
//! [`TaskList`] is the single source of truth for what the UI renders: an
//! ordered sequence of validated tasks, a loading flag, and an error slot.
//! Every mutation is a minimal local patch applied after a confirmed server
//! response — append on create, replace-in-place on update, remove on
//! delete — never a re-fetch. The list order is whatever order the server
//! returned on the last full load, with created tasks appended.

use taskpad_api::task::{Task, TaskId};

/// Ordered task list with loading and error state.
///
/// Mutated only through the patch methods below, each corresponding to the
/// outcome of one REST operation. A failed operation sets the error slot and
/// leaves the list untouched; the next successful operation clears it.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    loading: bool,
    error: Option<String>,
}

impl TaskList {
    /// Creates an empty task list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true if the list holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns true while the initial full fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the message from the most recent failed operation, if no
    /// operation has succeeded since.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Marks the start of a full fetch: loading set, error cleared.
    pub fn load_started(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Applies a successful full fetch: replaces the list wholesale.
    ///
    /// The caller is expected to have validated the records already
    /// (see `TaskApi::list_tasks`); order is preserved as given.
    pub fn loaded(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.loading = false;
        self.error = None;
    }

    /// Applies a failed full fetch: the list keeps whatever it held.
    pub fn load_failed(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Appends a newly created task to the end of the list.
    pub fn task_added(&mut self, task: Task) {
        self.tasks.push(task);
        self.error = None;
    }

    /// Replaces the entry with a matching id, in place, preserving order.
    ///
    /// If no entry matches (e.g. the task was deleted while the update was
    /// in flight), the list is left unchanged; the update still counts as a
    /// successful operation and clears the error slot.
    pub fn task_updated(&mut self, task: Task) {
        if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == task.id) {
            *slot = task;
        }
        self.error = None;
    }

    /// Removes the entry with the given id, if present.
    pub fn task_deleted(&mut self, id: &TaskId) {
        self.tasks.retain(|t| &t.id != id);
        self.error = None;
    }

    /// Records a failed add/toggle/delete: state untouched, error set.
    pub fn operation_failed(&mut self, message: String) {
        self.error = Some(message);
    }
}
