//! Request bodies for task endpoints.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::foundation::{TaskId, UserId};
use crate::domain::task::{ActualDates, NewTask, TaskDetails, TaskStatus};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub status: TaskStatus,
    pub title: Option<String>,
    pub description: Option<String>,
    pub deadline: NaiveDate,
    pub responsible_user_id: UserId,
    pub days_for_completion: i32,
}

impl From<CreateTaskRequest> for NewTask {
    fn from(req: CreateTaskRequest) -> Self {
        NewTask {
            status: req.status,
            title: req.title,
            description: req.description,
            deadline: req.deadline,
            responsible_user_id: req.responsible_user_id,
            days_for_completion: req.days_for_completion,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub deadline: NaiveDate,
    pub responsible_user_id: UserId,
    pub days_for_completion: i32,
}

impl From<UpdateTaskRequest> for TaskDetails {
    fn from(req: UpdateTaskRequest) -> Self {
        TaskDetails {
            title: req.title,
            description: req.description,
            deadline: req.deadline,
            responsible_user_id: req.responsible_user_id,
            days_for_completion: req.days_for_completion,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChangeStatusRequest {
    pub status: TaskStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChangeDeadlineRequest {
    pub deadline: NaiveDate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArchiveRequest {
    pub is_archived: bool,
}

/// Both dates are replaced; an omitted date is cleared.
#[derive(Debug, Clone, Deserialize)]
pub struct SetDatesRequest {
    #[serde(default)]
    pub actual_start_date: Option<NaiveDate>,
    #[serde(default)]
    pub actual_finish_date: Option<NaiveDate>,
}

impl From<SetDatesRequest> for ActualDates {
    fn from(req: SetDatesRequest) -> Self {
        ActualDates::new(req.actual_start_date, req.actual_finish_date)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddDependencyRequest {
    pub depends_task_id: TaskId,
}
