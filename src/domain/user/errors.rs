//! User-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, UserId, ValidationError};

/// Errors raised by user commands and queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(UserId),

    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl UserError {
    pub fn code(&self) -> ErrorCode {
        match self {
            UserError::NotFound(_) => ErrorCode::UserNotFound,
            UserError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            UserError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<ValidationError> for UserError {
    fn from(err: ValidationError) -> Self {
        UserError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for UserError {
    fn from(err: DomainError) -> Self {
        UserError::Infrastructure(err.to_string())
    }
}
