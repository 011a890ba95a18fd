//! ChangeTaskStatusHandler - moves a task between workflow statuses.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::domain::foundation::TaskId;
use crate::domain::task::{Task, TaskError, TaskStatus};
use crate::ports::TaskRepository;

/// Command to change a task's status as of `today`.
#[derive(Debug, Clone)]
pub struct ChangeTaskStatusCommand {
    pub task_id: TaskId,
    pub status: TaskStatus,
    pub today: NaiveDate,
}

/// Handler for status changes.
///
/// The new status implies new actual dates: starting work records a start
/// date once, finishing records the finish date, and returning to `to_do`
/// clears both. Status and dates are stored in one repository write.
pub struct ChangeTaskStatusHandler {
    tasks: Arc<dyn TaskRepository>,
}

impl ChangeTaskStatusHandler {
    pub fn new(tasks: Arc<dyn TaskRepository>) -> Self {
        Self { tasks }
    }

    pub async fn handle(&self, cmd: ChangeTaskStatusCommand) -> Result<Task, TaskError> {
        let task = self
            .tasks
            .update_task_status(cmd.task_id, cmd.status, cmd.today)
            .await?
            .ok_or_else(|| TaskError::not_found(cmd.task_id))?;

        info!(task_id = %cmd.task_id, status = %cmd.status, "task status changed");
        Ok(task)
    }
}
