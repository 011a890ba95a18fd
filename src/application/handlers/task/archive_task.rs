//! ArchiveTaskHandler - hides or restores a task.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::TaskId;
use crate::domain::task::TaskError;
use crate::ports::TaskRepository;

#[derive(Debug, Clone)]
pub struct ArchiveTaskCommand {
    pub task_id: TaskId,
    pub is_archived: bool,
}

/// Handler setting the archive flag. Archived tasks drop off the dashboard
/// and the timeline.
pub struct ArchiveTaskHandler {
    tasks: Arc<dyn TaskRepository>,
}

impl ArchiveTaskHandler {
    pub fn new(tasks: Arc<dyn TaskRepository>) -> Self {
        Self { tasks }
    }

    pub async fn handle(&self, cmd: ArchiveTaskCommand) -> Result<(), TaskError> {
        if !self
            .tasks
            .update_task_archive_status(cmd.task_id, cmd.is_archived)
            .await?
        {
            return Err(TaskError::not_found(cmd.task_id));
        }
        info!(task_id = %cmd.task_id, is_archived = cmd.is_archived, "task archive flag set");
        Ok(())
    }
}
