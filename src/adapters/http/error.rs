//! API error type shared by all HTTP handlers.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::foundation::{ErrorCode, TaskId, UserId};
use crate::domain::task::TaskError;
use crate::domain::user::UserError;

/// JSON body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

/// API error that implements IntoResponse.
#[derive(Debug)]
pub enum ApiError {
    BadRequest { code: ErrorCode, message: String },
    NotFound { code: ErrorCode, message: String },
    Conflict { code: ErrorCode, message: String },
    Internal(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            code: ErrorCode::ValidationFailed,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::BadRequest { code, message }
            | ApiError::NotFound { code, message }
            | ApiError::Conflict { code, message } => ErrorResponse {
                code: code.to_string(),
                message,
            },
            ApiError::Internal(message) => {
                error!(%message, "request failed");
                ErrorResponse {
                    code: ErrorCode::InternalError.to_string(),
                    message: "Internal server error".to_string(),
                }
            }
        };
        (status, Json(body)).into_response()
    }
}

impl From<TaskError> for ApiError {
    fn from(err: TaskError) -> Self {
        let code = err.code();
        let message = err.to_string();
        match err {
            TaskError::NotFound(_)
            | TaskError::ResponsibleNotFound(_)
            | TaskError::DependencyNotFound { .. } => ApiError::NotFound { code, message },
            TaskError::DependencyCycle { .. } => ApiError::Conflict { code, message },
            TaskError::SelfDependency(_) | TaskError::ValidationFailed { .. } => {
                ApiError::BadRequest { code, message }
            }
            TaskError::Infrastructure(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        let code = err.code();
        let message = err.to_string();
        match err {
            UserError::NotFound(_) => ApiError::NotFound { code, message },
            UserError::ValidationFailed { .. } => ApiError::BadRequest { code, message },
            UserError::Infrastructure(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

pub fn parse_task_id(raw: &str) -> Result<TaskId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request(format!("Invalid task ID: {raw}")))
}

pub fn parse_user_id(raw: &str) -> Result<UserId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request(format!("Invalid user ID: {raw}")))
}
