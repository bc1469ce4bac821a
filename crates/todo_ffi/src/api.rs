//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the to-do list operations to Dart via FRB.
//! - Return a full board snapshot after each call so the screen can re-render
//!   without holding Rust state.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - One process-wide `TaskListModel` backs every call.
//! - Blank text and unknown IDs are silent no-ops, mirroring core.

use log::warn;
use std::sync::{Mutex, MutexGuard, OnceLock};
use todo_core::view::board::{
    ACTIVE_SECTION_TITLE, ADD_BUTTON_LABEL, APP_TITLE, COMPLETED_SECTION_TITLE,
    INPUT_PLACEHOLDER,
};
use todo_core::{
    core_version as core_version_inner, init_logging as init_logging_inner,
    input_error as input_error_inner, Task, TaskBoard, TaskId, TaskListModel, TaskSection,
};

static SESSION: OnceLock<Mutex<TaskListModel>> = OnceLock::new();

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One task row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItemDto {
    pub id: u64,
    pub text: String,
    pub is_done: bool,
}

/// One titled group of rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSectionDto {
    pub title: String,
    pub items: Vec<TaskItemDto>,
    /// Placeholder text to show instead of rows, if any.
    pub empty_message: Option<String>,
}

/// Everything the screen needs to render the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskBoardSnapshot {
    /// Bumped once per effective mutation; unchanged after a no-op.
    pub revision: u64,
    pub active: TaskSectionDto,
    pub completed: TaskSectionDto,
}

/// Adds a task from raw field input.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Blank input leaves the board unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn task_add(text: String) -> TaskBoardSnapshot {
    with_session(|model| {
        model.add(&text);
    })
}

/// Flips the done flag of task `id`.
#[flutter_rust_bridge::frb(sync)]
pub fn task_toggle(id: u64) -> TaskBoardSnapshot {
    with_session(|model| model.toggle(TaskId::from_raw(id)))
}

/// Deletes task `id`.
#[flutter_rust_bridge::frb(sync)]
pub fn task_remove(id: u64) -> TaskBoardSnapshot {
    with_session(|model| model.remove(TaskId::from_raw(id)))
}

/// Replaces the text of task `id`; blank text keeps the old value.
#[flutter_rust_bridge::frb(sync)]
pub fn task_edit(id: u64, text: String) -> TaskBoardSnapshot {
    with_session(|model| model.edit(TaskId::from_raw(id), &text))
}

/// Current board without mutating anything.
#[flutter_rust_bridge::frb(sync)]
pub fn task_board() -> TaskBoardSnapshot {
    with_session(|_| {})
}

/// Inline validation message for the add field draft.
///
/// Returns `None` when the draft can be submitted.
#[flutter_rust_bridge::frb(sync)]
pub fn task_input_error(text: String) -> Option<String> {
    input_error_inner(&text).map(str::to_owned)
}

/// Fixed screen strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLabels {
    pub app_title: String,
    pub input_placeholder: String,
    pub add_button: String,
    pub active_title: String,
    pub completed_title: String,
}

/// Static labels so the Dart screen renders the same text as other front ends.
///
/// # FFI contract
/// - Sync call, no state access.
#[flutter_rust_bridge::frb(sync)]
pub fn screen_labels() -> ScreenLabels {
    ScreenLabels {
        app_title: APP_TITLE.to_string(),
        input_placeholder: INPUT_PLACEHOLDER.to_string(),
        add_button: ADD_BUTTON_LABEL.to_string(),
        active_title: ACTIVE_SECTION_TITLE.to_string(),
        completed_title: COMPLETED_SECTION_TITLE.to_string(),
    }
}

fn with_session(f: impl FnOnce(&mut TaskListModel)) -> TaskBoardSnapshot {
    let mut model = lock_session();
    f(&mut model);
    to_snapshot(&model)
}

fn lock_session() -> MutexGuard<'static, TaskListModel> {
    let session = SESSION.get_or_init(|| Mutex::new(TaskListModel::new()));
    session.lock().unwrap_or_else(|poisoned| {
        // Model mutations are single-step; state behind a poisoned lock is
        // still consistent.
        warn!("event=session_lock module=ffi status=recovered reason=poisoned");
        poisoned.into_inner()
    })
}

fn to_snapshot(model: &TaskListModel) -> TaskBoardSnapshot {
    let board = TaskBoard::from_tasks(model.tasks());
    TaskBoardSnapshot {
        revision: model.revision(),
        active: to_section_dto(board.active),
        completed: to_section_dto(board.completed),
    }
}

fn to_section_dto(section: TaskSection) -> TaskSectionDto {
    TaskSectionDto {
        title: section.title.to_string(),
        items: section.tasks.into_iter().map(to_item_dto).collect(),
        empty_message: section.empty_message.map(str::to_owned),
    }
}

fn to_item_dto(task: Task) -> TaskItemDto {
    TaskItemDto {
        id: task.id.get(),
        text: task.text,
        is_done: task.is_done,
    }
}
