//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod dashboard;
pub mod dependency;
pub mod task;
pub mod user;

pub use dashboard::{DashboardQuery, GetDashboardHandler, GetTimelineHandler, TimelineQuery};
pub use dependency::{
    AddDependencyCommand, AddDependencyHandler, ListDependenciesHandler, RemoveDependencyCommand,
    RemoveDependencyHandler,
};
pub use task::{
    ArchiveTaskCommand, ArchiveTaskHandler, ChangeTaskDeadlineCommand, ChangeTaskDeadlineHandler,
    ChangeTaskStatusCommand, ChangeTaskStatusHandler, CreateTaskHandler, GetTaskHandler,
    ListTasksHandler, SetTaskDatesCommand, SetTaskDatesHandler, UpdateTaskCommand,
    UpdateTaskHandler,
};
pub use user::{CreateUserHandler, DeleteUserHandler, GetUserHandler, ListUsersHandler};
