//! In-memory task list use-case model.
//!
//! # Responsibility
//! - Own the ordered task sequence for one app session.
//! - Apply add/toggle/remove/edit with trim-and-validate rules.
//! - Notify subscribers after every effective mutation.
//!
//! # Invariants
//! - Insertion order is preserved; mutations replace tasks in place.
//! - Invalid input (blank text, unknown ID) is a silent no-op: no state
//!   change, no notification, no revision bump, no error.
//! - `revision()` grows by exactly one per effective mutation.
//! - IDs are allocated from a monotonic counter and never reused.

use crate::model::task::{normalize_task_text, Task, TaskId};
use log::debug;
use std::fmt::{Debug, Formatter};

/// Change emitted to subscribers after a mutation is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskListChange {
    /// A task was appended at the end of the list.
    Added { id: TaskId },
    /// A task's done flag was flipped to `is_done`.
    Toggled { id: TaskId, is_done: bool },
    /// A task was removed.
    Removed { id: TaskId },
    /// A task's text was replaced.
    Edited { id: TaskId },
}

impl TaskListChange {
    /// Returns the task ID the change applies to.
    pub fn task_id(&self) -> TaskId {
        match self {
            Self::Added { id }
            | Self::Toggled { id, .. }
            | Self::Removed { id }
            | Self::Edited { id } => *id,
        }
    }
}

/// Handle returned by [`TaskListModel::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&TaskListChange) + Send>;

/// Ordered, mutable to-do list for a single session.
pub struct TaskListModel {
    tasks: Vec<Task>,
    next_id: u64,
    revision: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Default for TaskListModel {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for TaskListModel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskListModel")
            .field("tasks", &self.tasks)
            .field("next_id", &self.next_id)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl TaskListModel {
    /// Creates an empty list. IDs start at 1.
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
            revision: 0,
            listeners: Vec::new(),
            next_subscription: 1,
        }
    }

    /// Appends a new active task with trimmed `raw_text`.
    ///
    /// Returns the new ID, or `None` when the trimmed text is empty and
    /// nothing changed. The return value is informational; ignoring it is
    /// fine.
    pub fn add(&mut self, raw_text: &str) -> Option<TaskId> {
        let Some(text) = normalize_task_text(raw_text) else {
            debug!("event=task_add module=task_list status=skipped reason=blank_text");
            return None;
        };

        let id = self.allocate_id();
        self.tasks.push(Task::new(id, text));
        debug!(
            "event=task_add module=task_list status=ok id={} len={}",
            id,
            self.tasks.len()
        );
        self.commit(TaskListChange::Added { id });
        Some(id)
    }

    /// Flips `is_done` on the first task with `id`. Unknown IDs are ignored.
    pub fn toggle(&mut self, id: TaskId) {
        let Some(index) = self.position(id) else {
            debug!("event=task_toggle module=task_list status=skipped reason=not_found id={id}");
            return;
        };

        let current = &self.tasks[index];
        let updated = Task {
            is_done: !current.is_done,
            ..current.clone()
        };
        let is_done = updated.is_done;
        self.tasks[index] = updated;
        debug!("event=task_toggle module=task_list status=ok id={id} is_done={is_done}");
        self.commit(TaskListChange::Toggled { id, is_done });
    }

    /// Removes every task with `id`. Unknown IDs are ignored.
    pub fn remove(&mut self, id: TaskId) {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            debug!("event=task_remove module=task_list status=skipped reason=not_found id={id}");
            return;
        }

        debug!(
            "event=task_remove module=task_list status=ok id={} len={}",
            id,
            self.tasks.len()
        );
        self.commit(TaskListChange::Removed { id });
    }

    /// Replaces the text of task `id` with trimmed `new_text`.
    ///
    /// Blank text never clears a task; it leaves the list untouched, as does
    /// an unknown ID.
    pub fn edit(&mut self, id: TaskId, new_text: &str) {
        let Some(text) = normalize_task_text(new_text) else {
            debug!("event=task_edit module=task_list status=skipped reason=blank_text id={id}");
            return;
        };
        let Some(index) = self.position(id) else {
            debug!("event=task_edit module=task_list status=skipped reason=not_found id={id}");
            return;
        };

        let current = &self.tasks[index];
        self.tasks[index] = Task {
            text,
            ..current.clone()
        };
        debug!("event=task_edit module=task_list status=ok id={id}");
        self.commit(TaskListChange::Edited { id });
    }

    /// Full sequence in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Owned copy of the current sequence for readers outside the model.
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Tasks with `is_done == false`, in sequence order.
    pub fn active(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.is_active()).collect()
    }

    /// Tasks with `is_done == true`, in sequence order.
    pub fn completed(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.is_completed()).collect()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Count of effective mutations since creation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Registers a listener invoked synchronously after each effective
    /// mutation, in subscription order.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&TaskListChange) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Drops a listener. Returns `false` when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(subscription, _)| *subscription != id);
        self.listeners.len() != before
    }

    fn allocate_id(&mut self) -> TaskId {
        let id = TaskId::from_raw(self.next_id);
        self.next_id += 1;
        id
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    fn commit(&mut self, change: TaskListChange) {
        self.revision += 1;
        for (_, listener) in self.listeners.iter_mut() {
            listener(&change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{TaskListChange, TaskListModel};
    use crate::model::task::TaskId;
    use std::sync::{Arc, Mutex};

    #[test]
    fn ids_are_not_reused_after_remove() {
        let mut model = TaskListModel::new();
        let first = model.add("one").unwrap();
        model.remove(first);
        let second = model.add("two").unwrap();
        assert_ne!(first, second);
        assert!(second > first);
    }

    #[test]
    fn no_op_does_not_notify_or_bump_revision() {
        let mut model = TaskListModel::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        model.subscribe(move |change| sink.lock().unwrap().push(change.clone()));

        model.add("   ");
        model.toggle(TaskId::from_raw(99));
        model.remove(TaskId::from_raw(99));
        model.edit(TaskId::from_raw(99), "x");

        assert_eq!(model.revision(), 0);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let mut model = TaskListModel::new();
        let seen = Arc::new(Mutex::new(0_usize));
        let sink = Arc::clone(&seen);
        let subscription = model.subscribe(move |_| *sink.lock().unwrap() += 1);

        model.add("a");
        assert!(model.unsubscribe(subscription));
        assert!(!model.unsubscribe(subscription));
        model.add("b");

        assert_eq!(*seen.lock().unwrap(), 1);
    }

    #[test]
    fn change_reports_task_id() {
        let id = TaskId::from_raw(4);
        assert_eq!(TaskListChange::Toggled { id, is_done: true }.task_id(), id);
        assert_eq!(TaskListChange::Removed { id }.task_id(), id);
    }
}
