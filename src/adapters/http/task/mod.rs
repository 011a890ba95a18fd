//! HTTP adapter for task and dependency endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AddDependencyRequest, ArchiveRequest, ChangeDeadlineRequest, ChangeStatusRequest,
    CreateTaskRequest, SetDatesRequest, UpdateTaskRequest,
};
pub use handlers::TaskHandlers;
pub use routes::task_routes;
