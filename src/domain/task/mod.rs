//! Task module - tasks, their workflow status and dependencies.

mod dependency;
mod errors;
mod status;
#[allow(clippy::module_inception)]
mod task;

pub use dependency::{
    would_create_cycle, DependencyInsert, DependencyType, TaskDependency, TaskWithDependency,
};
pub use errors::TaskError;
pub use status::TaskStatus;
pub use task::{
    completion_days, ActualDates, NewTask, ShortTask, Task, TaskDetails, MAX_DAYS_FOR_COMPLETION,
    MAX_DESCRIPTION_LEN, MAX_TITLE_LEN,
};
