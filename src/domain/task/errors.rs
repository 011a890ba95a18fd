//! Task-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, TaskId, UserId, ValidationError};

/// Errors raised by task commands and queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("Task not found: {0}")]
    NotFound(TaskId),

    #[error("Responsible user not found: {0}")]
    ResponsibleNotFound(UserId),

    #[error("Task {task_id} does not depend on task {depends_task_id}")]
    DependencyNotFound {
        task_id: TaskId,
        depends_task_id: TaskId,
    },

    #[error("Task {0} cannot depend on itself")]
    SelfDependency(TaskId),

    #[error("Making task {task_id} depend on task {depends_task_id} would create a cycle")]
    DependencyCycle {
        task_id: TaskId,
        depends_task_id: TaskId,
    },

    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl TaskError {
    pub fn not_found(id: TaskId) -> Self {
        TaskError::NotFound(id)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        TaskError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            TaskError::NotFound(_) => ErrorCode::TaskNotFound,
            TaskError::ResponsibleNotFound(_) => ErrorCode::UserNotFound,
            TaskError::DependencyNotFound { .. } => ErrorCode::DependencyNotFound,
            TaskError::SelfDependency(_) => ErrorCode::ValidationFailed,
            TaskError::DependencyCycle { .. } => ErrorCode::DependencyCycle,
            TaskError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            TaskError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<ValidationError> for TaskError {
    fn from(err: ValidationError) -> Self {
        TaskError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for TaskError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => TaskError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => TaskError::Infrastructure(err.to_string()),
        }
    }
}
