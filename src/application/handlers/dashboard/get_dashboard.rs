//! GetDashboardHandler - the status board with progress and warnings.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use super::responsibles::load_responsibles;
use crate::domain::dashboard::DashboardBoard;
use crate::domain::task::TaskError;
use crate::ports::{TaskRepository, UserRepository};

/// Query for the board as seen on `as_of`.
#[derive(Debug, Clone, Copy)]
pub struct DashboardQuery {
    pub as_of: NaiveDate,
}

pub struct GetDashboardHandler {
    tasks: Arc<dyn TaskRepository>,
    users: Arc<dyn UserRepository>,
    time_reserve_coef: f64,
}

impl GetDashboardHandler {
    pub fn new(
        tasks: Arc<dyn TaskRepository>,
        users: Arc<dyn UserRepository>,
        time_reserve_coef: f64,
    ) -> Self {
        Self {
            tasks,
            users,
            time_reserve_coef,
        }
    }

    pub async fn handle(&self, query: DashboardQuery) -> Result<DashboardBoard, TaskError> {
        let tasks = self.tasks.get_tasks_ordered_by_deadline().await?;
        let responsibles = load_responsibles(self.users.as_ref(), &tasks).await?;
        debug!(tasks = tasks.len(), as_of = %query.as_of, "building dashboard");

        Ok(DashboardBoard::build(
            &tasks,
            &responsibles,
            query.as_of,
            self.time_reserve_coef,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryTaskRepository, InMemoryUserRepository};
    use crate::domain::dashboard::WarningType;
    use crate::domain::task::{NewTask, TaskStatus};
    use crate::domain::user::NewUser;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn empty_board_has_three_columns_and_zero_progress() {
        let handler = GetDashboardHandler::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(InMemoryUserRepository::new()),
            1.5,
        );

        let board = handler
            .handle(DashboardQuery {
                as_of: date(2024, 5, 1),
            })
            .await
            .unwrap();

        assert_eq!(board.progress, 0);
        let names: Vec<_> = board.statuses.iter().map(|c| c.status_name).collect();
        assert_eq!(
            names,
            vec![TaskStatus::ToDo, TaskStatus::InProgress, TaskStatus::Done]
        );
        assert!(board.statuses.iter().all(|c| c.tasks.is_empty()));
    }

    #[tokio::test]
    async fn cards_carry_responsible_and_warnings() {
        let tasks = InMemoryTaskRepository::new();
        let users = InMemoryUserRepository::new();
        let alice = users
            .create(&NewUser {
                name: "Alice".to_string(),
                email: Some("alice@example.com".to_string()),
            })
            .await
            .unwrap();
        for (status, deadline) in [
            (TaskStatus::ToDo, date(2024, 5, 12)),
            (TaskStatus::Done, date(2024, 5, 30)),
        ] {
            tasks
                .create(&NewTask {
                    status,
                    title: None,
                    description: None,
                    deadline,
                    responsible_user_id: alice.id,
                    days_for_completion: 3,
                })
                .await
                .unwrap();
        }
        let handler = GetDashboardHandler::new(Arc::new(tasks), Arc::new(users), 1.5);

        let board = handler
            .handle(DashboardQuery {
                as_of: date(2024, 5, 10),
            })
            .await
            .unwrap();

        assert_eq!(board.progress, 50);
        let card = &board.statuses[0].tasks[0];
        assert_eq!(card.responsible.as_ref().map(|u| u.id), Some(alice.id));
        // 2024-05-10 >= 2024-05-12 - 3 days
        assert_eq!(card.warnings[0].warning_type, WarningType::StartHard);
        assert_eq!(board.statuses[2].tasks.len(), 1);
    }
}
