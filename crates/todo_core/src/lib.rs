//! Core domain logic for the to-do list app.
//! This crate is the single source of truth for list invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{normalize_task_text, Task, TaskId};
pub use service::task_list::{SubscriptionId, TaskListChange, TaskListModel};
pub use view::board::{input_error, TaskBoard, TaskInput, TaskSection};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
