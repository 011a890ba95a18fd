//! AddDependencyHandler - records that one task depends on another.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::foundation::TaskId;
use crate::domain::task::{DependencyInsert, TaskError};
use crate::ports::TaskRepository;

/// Command making `task_id` depend on `depends_task_id`.
#[derive(Debug, Clone, Copy)]
pub struct AddDependencyCommand {
    pub task_id: TaskId,
    pub depends_task_id: TaskId,
}

/// Handler for adding dependency edges.
///
/// Both tasks must exist, a task cannot depend on itself, and an edge that
/// would close a cycle is rejected. Adding an existing edge succeeds without
/// changes.
pub struct AddDependencyHandler {
    tasks: Arc<dyn TaskRepository>,
}

impl AddDependencyHandler {
    pub fn new(tasks: Arc<dyn TaskRepository>) -> Self {
        Self { tasks }
    }

    pub async fn handle(&self, cmd: AddDependencyCommand) -> Result<(), TaskError> {
        if cmd.task_id == cmd.depends_task_id {
            return Err(TaskError::SelfDependency(cmd.task_id));
        }

        for id in [cmd.task_id, cmd.depends_task_id] {
            if self.tasks.get_by_id(id).await?.is_none() {
                return Err(TaskError::not_found(id));
            }
        }

        let outcome = self
            .tasks
            .add_task_depends(cmd.task_id, cmd.depends_task_id)
            .await?;
        match outcome {
            DependencyInsert::Added => {}
            DependencyInsert::AlreadyPresent => {
                debug!(
                    task_id = %cmd.task_id,
                    depends_task_id = %cmd.depends_task_id,
                    "dependency already present"
                );
                return Ok(());
            }
            DependencyInsert::WouldCycle => {
                return Err(TaskError::DependencyCycle {
                    task_id: cmd.task_id,
                    depends_task_id: cmd.depends_task_id,
                });
            }
        }

        info!(
            task_id = %cmd.task_id,
            depends_task_id = %cmd.depends_task_id,
            "dependency added"
        );
        Ok(())
    }
}
