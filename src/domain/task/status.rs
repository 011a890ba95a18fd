//! TaskStatus enum for tracking the workflow state of a task.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Workflow status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    ToDo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// All statuses in board order.
    pub const ALL: [TaskStatus; 3] = [TaskStatus::ToDo, TaskStatus::InProgress, TaskStatus::Done];

    /// Position of the status column on the dashboard, starting at 1.
    pub fn order_number(&self) -> u8 {
        match self {
            TaskStatus::ToDo => 1,
            TaskStatus::InProgress => 2,
            TaskStatus::Done => 3,
        }
    }

    /// Wire and storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::ToDo => "to_do",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Done => "done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "to_do" => Ok(TaskStatus::ToDo),
            "in_progress" => Ok(TaskStatus::InProgress),
            "done" => Ok(TaskStatus::Done),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown task status '{}'", other),
            )),
        }
    }
}
