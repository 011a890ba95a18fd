//! ListDependenciesHandler - the dependency neighbourhood of a task.

use std::sync::Arc;

use crate::domain::foundation::TaskId;
use crate::domain::task::{TaskError, TaskWithDependency};
use crate::ports::TaskRepository;

/// Handler listing the task itself plus every task it depends on or that
/// depends on it, ordered by deadline.
pub struct ListDependenciesHandler {
    tasks: Arc<dyn TaskRepository>,
}

impl ListDependenciesHandler {
    pub fn new(tasks: Arc<dyn TaskRepository>) -> Self {
        Self { tasks }
    }

    pub async fn handle(&self, task_id: TaskId) -> Result<Vec<TaskWithDependency>, TaskError> {
        if self.tasks.get_by_id(task_id).await?.is_none() {
            return Err(TaskError::not_found(task_id));
        }
        Ok(self.tasks.get_all_task_dependencies(task_id).await?)
    }
}
