//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors)
//! - `task` - Tasks, workflow status and dependencies
//! - `user` - People responsible for tasks
//! - `dashboard` - Deadline warnings and the board/timeline read models

pub mod dashboard;
pub mod foundation;
pub mod task;
pub mod user;
