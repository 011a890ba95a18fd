//! UpdateTaskHandler - Command handler for editing task data.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::TaskId;
use crate::domain::task::{Task, TaskDetails, TaskError};
use crate::ports::{TaskRepository, UserRepository};

/// Command to replace the editable fields of a task.
#[derive(Debug, Clone)]
pub struct UpdateTaskCommand {
    pub task_id: TaskId,
    pub details: TaskDetails,
}

/// Handler for editing task data.
pub struct UpdateTaskHandler {
    tasks: Arc<dyn TaskRepository>,
    users: Arc<dyn UserRepository>,
}

impl UpdateTaskHandler {
    pub fn new(tasks: Arc<dyn TaskRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { tasks, users }
    }

    pub async fn handle(&self, cmd: UpdateTaskCommand) -> Result<Task, TaskError> {
        let details = cmd.details.validated()?;

        let responsible = self.users.get_by_id(details.responsible_user_id).await?;
        if responsible.is_none() {
            return Err(TaskError::ResponsibleNotFound(details.responsible_user_id));
        }

        let task = self
            .tasks
            .update_task_data(cmd.task_id, &details)
            .await?
            .ok_or_else(|| TaskError::not_found(cmd.task_id))?;
        info!(task_id = %task.id, "task updated");
        Ok(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryTaskRepository, InMemoryUserRepository};
    use crate::domain::task::{NewTask, TaskStatus};
    use crate::domain::user::NewUser;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn replaces_editable_fields() {
        let tasks = InMemoryTaskRepository::new();
        let users = InMemoryUserRepository::new();
        let alice = users
            .create(&NewUser {
                name: "Alice".to_string(),
                email: None,
            })
            .await
            .unwrap();
        let bob = users
            .create(&NewUser {
                name: "Bob".to_string(),
                email: None,
            })
            .await
            .unwrap();
        let task = tasks
            .create(&NewTask {
                status: TaskStatus::ToDo,
                title: Some("Old".to_string()),
                description: None,
                deadline: date(2024, 5, 1),
                responsible_user_id: alice.id,
                days_for_completion: 2,
            })
            .await
            .unwrap();
        let handler = UpdateTaskHandler::new(Arc::new(tasks), Arc::new(users));

        let updated = handler
            .handle(UpdateTaskCommand {
                task_id: task.id,
                details: TaskDetails {
                    title: Some("New".to_string()),
                    description: Some("details".to_string()),
                    deadline: date(2024, 6, 1),
                    responsible_user_id: bob.id,
                    days_for_completion: 5,
                },
            })
            .await
            .unwrap();

        assert_eq!(updated.title.as_deref(), Some("New"));
        assert_eq!(updated.deadline, date(2024, 6, 1));
        assert_eq!(updated.responsible_user_id, Some(bob.id));
        assert_eq!(updated.days_for_completion, 5);
    }

    #[tokio::test]
    async fn missing_task_is_not_found() {
        let users = InMemoryUserRepository::new();
        let alice = users
            .create(&NewUser {
                name: "Alice".to_string(),
                email: None,
            })
            .await
            .unwrap();
        let handler =
            UpdateTaskHandler::new(Arc::new(InMemoryTaskRepository::new()), Arc::new(users));

        let result = handler
            .handle(UpdateTaskCommand {
                task_id: TaskId::new(3),
                details: TaskDetails {
                    title: None,
                    description: None,
                    deadline: date(2024, 6, 1),
                    responsible_user_id: alice.id,
                    days_for_completion: 1,
                },
            })
            .await;

        assert_eq!(result, Err(TaskError::NotFound(TaskId::new(3))));
    }
}
