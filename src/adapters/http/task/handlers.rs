//! HTTP handlers for task and dependency endpoints.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

use super::dto::{
    AddDependencyRequest, ArchiveRequest, ChangeDeadlineRequest, ChangeStatusRequest,
    CreateTaskRequest, SetDatesRequest, UpdateTaskRequest,
};
use crate::adapters::http::error::{parse_task_id, ApiError};
use crate::application::handlers::{
    AddDependencyCommand, AddDependencyHandler, ArchiveTaskCommand, ArchiveTaskHandler,
    ChangeTaskDeadlineCommand, ChangeTaskDeadlineHandler, ChangeTaskStatusCommand,
    ChangeTaskStatusHandler, CreateTaskHandler, GetTaskHandler, ListDependenciesHandler,
    ListTasksHandler, RemoveDependencyCommand, RemoveDependencyHandler, SetTaskDatesCommand,
    SetTaskDatesHandler, UpdateTaskCommand, UpdateTaskHandler,
};
use crate::ports::{TaskRepository, UserRepository};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct TaskHandlers {
    create: Arc<CreateTaskHandler>,
    get: Arc<GetTaskHandler>,
    list: Arc<ListTasksHandler>,
    update: Arc<UpdateTaskHandler>,
    change_status: Arc<ChangeTaskStatusHandler>,
    change_deadline: Arc<ChangeTaskDeadlineHandler>,
    archive: Arc<ArchiveTaskHandler>,
    set_dates: Arc<SetTaskDatesHandler>,
    add_dependency: Arc<AddDependencyHandler>,
    remove_dependency: Arc<RemoveDependencyHandler>,
    list_dependencies: Arc<ListDependenciesHandler>,
}

impl TaskHandlers {
    pub fn new(tasks: Arc<dyn TaskRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self {
            create: Arc::new(CreateTaskHandler::new(tasks.clone(), users.clone())),
            get: Arc::new(GetTaskHandler::new(tasks.clone())),
            list: Arc::new(ListTasksHandler::new(tasks.clone())),
            update: Arc::new(UpdateTaskHandler::new(tasks.clone(), users)),
            change_status: Arc::new(ChangeTaskStatusHandler::new(tasks.clone())),
            change_deadline: Arc::new(ChangeTaskDeadlineHandler::new(tasks.clone())),
            archive: Arc::new(ArchiveTaskHandler::new(tasks.clone())),
            set_dates: Arc::new(SetTaskDatesHandler::new(tasks.clone())),
            add_dependency: Arc::new(AddDependencyHandler::new(tasks.clone())),
            remove_dependency: Arc::new(RemoveDependencyHandler::new(tasks.clone())),
            list_dependencies: Arc::new(ListDependenciesHandler::new(tasks)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tasks
// ════════════════════════════════════════════════════════════════════════════

/// POST /tasks
pub async fn create_task(
    State(handlers): State<TaskHandlers>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload?;
    let task = handlers.create.handle(req.into()).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /tasks
pub async fn list_tasks(
    State(handlers): State<TaskHandlers>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(handlers.list.handle().await?))
}

/// GET /tasks/:id
pub async fn get_task(
    State(handlers): State<TaskHandlers>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_task_id(&id)?;
    Ok(Json(handlers.get.handle(id).await?))
}

/// PUT /tasks/:id
pub async fn update_task(
    State(handlers): State<TaskHandlers>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let task_id = parse_task_id(&id)?;
    let Json(req) = payload?;
    let cmd = UpdateTaskCommand {
        task_id,
        details: req.into(),
    };
    Ok(Json(handlers.update.handle(cmd).await?))
}

/// PATCH /tasks/:id/status
pub async fn change_status(
    State(handlers): State<TaskHandlers>,
    Path(id): Path<String>,
    payload: Result<Json<ChangeStatusRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let task_id = parse_task_id(&id)?;
    let Json(req) = payload?;
    let cmd = ChangeTaskStatusCommand {
        task_id,
        status: req.status,
        today: Utc::now().date_naive(),
    };
    Ok(Json(handlers.change_status.handle(cmd).await?))
}

/// PATCH /tasks/:id/deadline
pub async fn change_deadline(
    State(handlers): State<TaskHandlers>,
    Path(id): Path<String>,
    payload: Result<Json<ChangeDeadlineRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let task_id = parse_task_id(&id)?;
    let Json(req) = payload?;
    let cmd = ChangeTaskDeadlineCommand {
        task_id,
        deadline: req.deadline,
    };
    handlers.change_deadline.handle(cmd).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /tasks/:id/archive
pub async fn archive_task(
    State(handlers): State<TaskHandlers>,
    Path(id): Path<String>,
    payload: Result<Json<ArchiveRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let task_id = parse_task_id(&id)?;
    let Json(req) = payload?;
    let cmd = ArchiveTaskCommand {
        task_id,
        is_archived: req.is_archived,
    };
    handlers.archive.handle(cmd).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /tasks/:id/dates
pub async fn set_dates(
    State(handlers): State<TaskHandlers>,
    Path(id): Path<String>,
    payload: Result<Json<SetDatesRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let task_id = parse_task_id(&id)?;
    let Json(req) = payload?;
    let cmd = SetTaskDatesCommand {
        task_id,
        dates: req.into(),
    };
    Ok(Json(handlers.set_dates.handle(cmd).await?))
}

// ════════════════════════════════════════════════════════════════════════════
// Dependencies
// ════════════════════════════════════════════════════════════════════════════

/// GET /tasks/:id/dependencies
pub async fn list_dependencies(
    State(handlers): State<TaskHandlers>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let task_id = parse_task_id(&id)?;
    Ok(Json(handlers.list_dependencies.handle(task_id).await?))
}

/// POST /tasks/:id/dependencies
pub async fn add_dependency(
    State(handlers): State<TaskHandlers>,
    Path(id): Path<String>,
    payload: Result<Json<AddDependencyRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let task_id = parse_task_id(&id)?;
    let Json(req) = payload?;
    let cmd = AddDependencyCommand {
        task_id,
        depends_task_id: req.depends_task_id,
    };
    handlers.add_dependency.handle(cmd).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /tasks/:id/dependencies/:depends_id
pub async fn remove_dependency(
    State(handlers): State<TaskHandlers>,
    Path((id, depends_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = RemoveDependencyCommand {
        task_id: parse_task_id(&id)?,
        depends_task_id: parse_task_id(&depends_id)?,
    };
    handlers.remove_dependency.handle(cmd).await?;
    Ok(StatusCode::NO_CONTENT)
}
