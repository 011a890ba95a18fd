//! CreateTaskHandler - Command handler for creating tasks.

use std::sync::Arc;

use tracing::info;

use crate::domain::task::{NewTask, Task, TaskError};
use crate::ports::{TaskRepository, UserRepository};

/// Handler for creating tasks.
pub struct CreateTaskHandler {
    tasks: Arc<dyn TaskRepository>,
    users: Arc<dyn UserRepository>,
}

impl CreateTaskHandler {
    pub fn new(tasks: Arc<dyn TaskRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { tasks, users }
    }

    pub async fn handle(&self, cmd: NewTask) -> Result<Task, TaskError> {
        let cmd = cmd.validated()?;

        let responsible = self.users.get_by_id(cmd.responsible_user_id).await?;
        if responsible.is_none() {
            return Err(TaskError::ResponsibleNotFound(cmd.responsible_user_id));
        }

        let task = self.tasks.create(&cmd).await?;
        info!(task_id = %task.id, status = %task.status, "task created");
        Ok(task)
    }
}
