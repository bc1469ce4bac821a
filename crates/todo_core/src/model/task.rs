//! Task domain model.
//!
//! # Responsibility
//! - Define the record rendered as one to-do row.
//! - Own the trim-and-validate rule shared by every text entry path.
//!
//! # Invariants
//! - `TaskId` is unique within one `TaskListModel` and never reused.
//! - `text` is never empty or whitespace-only while a task exists.
//! - `is_done` starts as `false`.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Session-scoped task identifier.
///
/// Allocated from a monotonic counter owned by the list model, so two tasks
/// created back to back never share an ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Wraps a raw ID received from an outer layer (FFI, CLI).
    ///
    /// No existence check happens here; unknown IDs are no-ops downstream.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw numeric form for DTOs.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Trimmed, non-empty display text.
    pub text: String,
    pub is_done: bool,
}

impl Task {
    /// Creates a task from already-normalized text.
    ///
    /// Callers must pass text produced by [`normalize_task_text`].
    pub(crate) fn new(id: TaskId, text: String) -> Self {
        Self {
            id,
            text,
            is_done: false,
        }
    }

    /// Returns whether this task belongs to the active group.
    pub fn is_active(&self) -> bool {
        !self.is_done
    }

    /// Returns whether this task belongs to the completed group.
    pub fn is_completed(&self) -> bool {
        self.is_done
    }
}

/// Trims user input and rejects blank results.
///
/// Returns `None` for empty or whitespace-only input.
pub fn normalize_task_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
