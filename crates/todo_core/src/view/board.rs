//! Two-group board projection and add-field state.
//!
//! # Responsibility
//! - Split the task sequence into the active and completed sections a screen
//!   renders, with their fixed titles and empty-state messages.
//! - Track the add-field draft and its inline validation message.
//!
//! # Invariants
//! - Projection is pure and recomputed on every call.
//! - Each task lands in exactly one section, keeping sequence order.
//! - Field validation and model validation share `normalize_task_text`.

use crate::model::task::{normalize_task_text, Task};
use serde::Serialize;

pub const APP_TITLE: &str = "To-Do App";
pub const INPUT_PLACEHOLDER: &str = "Add task";
pub const ADD_BUTTON_LABEL: &str = "Add";
pub const ACTIVE_SECTION_TITLE: &str = "Items";
pub const COMPLETED_SECTION_TITLE: &str = "Completed Items";
pub const NO_ACTIVE_MESSAGE: &str = "No items yet";
pub const NO_COMPLETED_MESSAGE: &str = "No completed items yet";
pub const EMPTY_INPUT_MESSAGE: &str = "You must enter a task";

/// One titled group of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskSection {
    pub title: &'static str,
    pub tasks: Vec<Task>,
    /// Placeholder shown instead of rows, when the screen shows one.
    pub empty_message: Option<&'static str>,
}

/// Screen-ready projection of the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskBoard {
    pub active: TaskSection,
    pub completed: TaskSection,
}

impl TaskBoard {
    /// Builds both sections from a task sequence.
    ///
    /// The completed placeholder only appears once the list has at least one
    /// task; an empty list shows just the active placeholder.
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let (completed, active): (Vec<Task>, Vec<Task>) =
            tasks.iter().cloned().partition(Task::is_completed);

        let active_empty = active.is_empty().then_some(NO_ACTIVE_MESSAGE);
        let completed_empty =
            (completed.is_empty() && !tasks.is_empty()).then_some(NO_COMPLETED_MESSAGE);

        Self {
            active: TaskSection {
                title: ACTIVE_SECTION_TITLE,
                tasks: active,
                empty_message: active_empty,
            },
            completed: TaskSection {
                title: COMPLETED_SECTION_TITLE,
                tasks: completed,
                empty_message: completed_empty,
            },
        }
    }

    pub fn total(&self) -> usize {
        self.active.tasks.len() + self.completed.tasks.len()
    }
}

/// Validation message for a draft, or `None` when it can be submitted.
pub fn input_error(draft: &str) -> Option<&'static str> {
    match normalize_task_text(draft) {
        Some(_) => None,
        None => Some(EMPTY_INPUT_MESSAGE),
    }
}

/// Add-field draft with inline validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskInput {
    text: String,
    show_validation: bool,
}

impl TaskInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the draft. Typing hides a visible validation message.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.show_validation = false;
    }

    /// Takes the trimmed draft for submission.
    ///
    /// On blank input the draft is kept and the validation message becomes
    /// visible.
    pub fn submit(&mut self) -> Option<String> {
        match normalize_task_text(&self.text) {
            Some(text) => {
                self.text.clear();
                self.show_validation = false;
                Some(text)
            }
            None => {
                self.show_validation = true;
                None
            }
        }
    }

    pub fn validation_message(&self) -> Option<&'static str> {
        self.show_validation.then_some(EMPTY_INPUT_MESSAGE)
    }
}
