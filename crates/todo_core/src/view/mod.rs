//! Presentation projections over the task list.

pub mod board;
