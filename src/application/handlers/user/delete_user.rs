//! DeleteUserHandler - removes a user and unassigns their tasks.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::UserId;
use crate::domain::user::UserError;
use crate::ports::{TaskRepository, UserRepository};

pub struct DeleteUserHandler {
    users: Arc<dyn UserRepository>,
    tasks: Arc<dyn TaskRepository>,
}

impl DeleteUserHandler {
    pub fn new(users: Arc<dyn UserRepository>, tasks: Arc<dyn TaskRepository>) -> Self {
        Self { users, tasks }
    }

    /// Tasks of the user keep existing with no responsible user.
    pub async fn handle(&self, id: UserId) -> Result<(), UserError> {
        if self.users.get_by_id(id).await?.is_none() {
            return Err(UserError::NotFound(id));
        }

        let unassigned = self.tasks.del_responsible_user_id(id).await?;
        if !self.users.delete(id).await? {
            return Err(UserError::NotFound(id));
        }
        info!(user_id = %id, unassigned, "user deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryTaskRepository, InMemoryUserRepository};
    use crate::domain::task::{NewTask, TaskStatus};
    use crate::domain::user::NewUser;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn deleting_user_unassigns_tasks() {
        let users = InMemoryUserRepository::new();
        let tasks = InMemoryTaskRepository::new();
        let user = users
            .create(&NewUser {
                name: "Alice".to_string(),
                email: None,
            })
            .await
            .unwrap();
        let task = tasks
            .create(&NewTask {
                status: TaskStatus::ToDo,
                title: None,
                description: None,
                deadline: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                responsible_user_id: user.id,
                days_for_completion: 1,
            })
            .await
            .unwrap();
        let handler = DeleteUserHandler::new(Arc::new(users.clone()), Arc::new(tasks.clone()));

        handler.handle(user.id).await.unwrap();

        assert!(users.get_by_id(user.id).await.unwrap().is_none());
        let task = tasks.get_by_id(task.id).await.unwrap().unwrap();
        assert_eq!(task.responsible_user_id, None);
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let handler = DeleteUserHandler::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryTaskRepository::new()),
        );

        assert_eq!(
            handler.handle(UserId::new(3)).await,
            Err(UserError::NotFound(UserId::new(3)))
        );
    }
}
