//! Domain model for the to-do list.
//!
//! # Responsibility
//! - Define canonical data structures used by core list logic.
//!
//! # Invariants
//! - Every task is identified by a session-unique `TaskId`.
//! - Task text is normalized before it enters the model.

pub mod task;
