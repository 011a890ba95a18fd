//! ChangeTaskDeadlineHandler - moves a task's deadline.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::domain::foundation::TaskId;
use crate::domain::task::TaskError;
use crate::ports::TaskRepository;

#[derive(Debug, Clone)]
pub struct ChangeTaskDeadlineCommand {
    pub task_id: TaskId,
    pub deadline: NaiveDate,
}

pub struct ChangeTaskDeadlineHandler {
    tasks: Arc<dyn TaskRepository>,
}

impl ChangeTaskDeadlineHandler {
    pub fn new(tasks: Arc<dyn TaskRepository>) -> Self {
        Self { tasks }
    }

    pub async fn handle(&self, cmd: ChangeTaskDeadlineCommand) -> Result<(), TaskError> {
        if !self
            .tasks
            .update_task_deadline(cmd.task_id, cmd.deadline)
            .await?
        {
            return Err(TaskError::not_found(cmd.task_id));
        }
        info!(task_id = %cmd.task_id, deadline = %cmd.deadline, "task deadline changed");
        Ok(())
    }
}
