//! HTTP handlers for user endpoints.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use super::dto::CreateUserRequest;
use crate::adapters::http::error::{parse_user_id, ApiError};
use crate::application::handlers::{
    CreateUserHandler, DeleteUserHandler, GetUserHandler, ListUsersHandler,
};
use crate::ports::{TaskRepository, UserRepository};

#[derive(Clone)]
pub struct UserHandlers {
    create: Arc<CreateUserHandler>,
    get: Arc<GetUserHandler>,
    list: Arc<ListUsersHandler>,
    delete: Arc<DeleteUserHandler>,
}

impl UserHandlers {
    pub fn new(users: Arc<dyn UserRepository>, tasks: Arc<dyn TaskRepository>) -> Self {
        Self {
            create: Arc::new(CreateUserHandler::new(users.clone())),
            get: Arc::new(GetUserHandler::new(users.clone())),
            list: Arc::new(ListUsersHandler::new(users.clone())),
            delete: Arc::new(DeleteUserHandler::new(users, tasks)),
        }
    }
}

/// POST /users
pub async fn create_user(
    State(handlers): State<UserHandlers>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload?;
    let user = handlers.create.handle(req.into()).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users
pub async fn list_users(
    State(handlers): State<UserHandlers>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(handlers.list.handle().await?))
}

/// GET /users/:id
pub async fn get_user(
    State(handlers): State<UserHandlers>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_user_id(&id)?;
    Ok(Json(handlers.get.handle(id).await?))
}

/// DELETE /users/:id
pub async fn delete_user(
    State(handlers): State<UserHandlers>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_user_id(&id)?;
    handlers.delete.handle(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
