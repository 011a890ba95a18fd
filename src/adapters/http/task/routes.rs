//! HTTP routes for task endpoints.

use axum::routing::{delete, get, patch};
use axum::Router;

use super::handlers::{
    add_dependency, archive_task, change_deadline, change_status, create_task, get_task,
    list_dependencies, list_tasks, remove_dependency, set_dates, update_task, TaskHandlers,
};

/// Creates the task router, dependencies included.
pub fn task_routes(handlers: TaskHandlers) -> Router {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/:id", get(get_task).put(update_task))
        .route("/tasks/:id/status", patch(change_status))
        .route("/tasks/:id/deadline", patch(change_deadline))
        .route("/tasks/:id/archive", patch(archive_task))
        .route("/tasks/:id/dates", patch(set_dates))
        .route(
            "/tasks/:id/dependencies",
            get(list_dependencies).post(add_dependency),
        )
        .route(
            "/tasks/:id/dependencies/:depends_id",
            delete(remove_dependency),
        )
        .with_state(handlers)
}
