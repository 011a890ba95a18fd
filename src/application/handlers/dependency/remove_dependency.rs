//! RemoveDependencyHandler - deletes a dependency edge.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::TaskId;
use crate::domain::task::TaskError;
use crate::ports::TaskRepository;

/// Command deleting the edge `task_id -> depends_task_id`.
#[derive(Debug, Clone, Copy)]
pub struct RemoveDependencyCommand {
    pub task_id: TaskId,
    pub depends_task_id: TaskId,
}

/// Handler for removing dependency edges.
pub struct RemoveDependencyHandler {
    tasks: Arc<dyn TaskRepository>,
}

impl RemoveDependencyHandler {
    pub fn new(tasks: Arc<dyn TaskRepository>) -> Self {
        Self { tasks }
    }

    pub async fn handle(&self, cmd: RemoveDependencyCommand) -> Result<(), TaskError> {
        let removed = self
            .tasks
            .del_tasks_depends(cmd.task_id, cmd.depends_task_id)
            .await?;
        if !removed {
            return Err(TaskError::DependencyNotFound {
                task_id: cmd.task_id,
                depends_task_id: cmd.depends_task_id,
            });
        }
        info!(
            task_id = %cmd.task_id,
            depends_task_id = %cmd.depends_task_id,
            "dependency removed"
        );
        Ok(())
    }
}
