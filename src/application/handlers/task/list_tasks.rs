//! ListTasksHandler - Query handler for the short task list.

use std::sync::Arc;

use crate::domain::task::{ShortTask, TaskError};
use crate::ports::TaskRepository;

/// Handler listing every task as `{id, title}`.
pub struct ListTasksHandler {
    tasks: Arc<dyn TaskRepository>,
}

impl ListTasksHandler {
    pub fn new(tasks: Arc<dyn TaskRepository>) -> Self {
        Self { tasks }
    }

    pub async fn handle(&self) -> Result<Vec<ShortTask>, TaskError> {
        Ok(self.tasks.get_all_short_tasks().await?)
    }
}
