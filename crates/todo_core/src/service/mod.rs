//! Core use-case services.
//!
//! # Responsibility
//! - Expose list mutations as use-case level APIs.
//! - Keep UI/FFI layers decoupled from list internals.

pub mod task_list;
