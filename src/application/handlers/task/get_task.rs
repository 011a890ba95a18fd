//! GetTaskHandler - Query handler for a single task.

use std::sync::Arc;

use crate::domain::foundation::TaskId;
use crate::domain::task::{Task, TaskError};
use crate::ports::TaskRepository;

/// Handler for retrieving a task by id.
pub struct GetTaskHandler {
    tasks: Arc<dyn TaskRepository>,
}

impl GetTaskHandler {
    pub fn new(tasks: Arc<dyn TaskRepository>) -> Self {
        Self { tasks }
    }

    pub async fn handle(&self, id: TaskId) -> Result<Task, TaskError> {
        self.tasks
            .get_by_id(id)
            .await?
            .ok_or_else(|| TaskError::not_found(id))
    }
}
