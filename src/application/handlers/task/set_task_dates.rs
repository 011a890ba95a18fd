//! SetTaskDatesHandler - manual correction of actual start / finish dates.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::TaskId;
use crate::domain::task::{ActualDates, Task, TaskError};
use crate::ports::TaskRepository;

#[derive(Debug, Clone)]
pub struct SetTaskDatesCommand {
    pub task_id: TaskId,
    pub dates: ActualDates,
}

pub struct SetTaskDatesHandler {
    tasks: Arc<dyn TaskRepository>,
}

impl SetTaskDatesHandler {
    pub fn new(tasks: Arc<dyn TaskRepository>) -> Self {
        Self { tasks }
    }

    pub async fn handle(&self, cmd: SetTaskDatesCommand) -> Result<Task, TaskError> {
        cmd.dates.validate()?;

        if !self
            .tasks
            .update_task_start_finish_dates(cmd.task_id, cmd.dates.start, cmd.dates.finish)
            .await?
        {
            return Err(TaskError::not_found(cmd.task_id));
        }
        info!(task_id = %cmd.task_id, "task actual dates set");

        self.tasks
            .get_by_id(cmd.task_id)
            .await?
            .ok_or_else(|| TaskError::not_found(cmd.task_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryTaskRepository;
    use crate::domain::foundation::UserId;
    use crate::domain::task::{NewTask, TaskStatus};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn setup() -> (SetTaskDatesHandler, TaskId) {
        let tasks = InMemoryTaskRepository::new();
        let task = tasks
            .create(&NewTask {
                status: TaskStatus::InProgress,
                title: None,
                description: None,
                deadline: date(2024, 5, 20),
                responsible_user_id: UserId::new(1),
                days_for_completion: 4,
            })
            .await
            .unwrap();
        (SetTaskDatesHandler::new(Arc::new(tasks)), task.id)
    }

    #[tokio::test]
    async fn stores_dates_and_derives_completion_days() {
        let (handler, id) = setup().await;

        let task = handler
            .handle(SetTaskDatesCommand {
                task_id: id,
                dates: ActualDates::new(Some(date(2024, 5, 1)), Some(date(2024, 5, 3))),
            })
            .await
            .unwrap();

        assert_eq!(task.actual_completion_days, Some(3));
    }

    #[tokio::test]
    async fn finish_before_start_is_rejected() {
        let (handler, id) = setup().await;

        let result = handler
            .handle(SetTaskDatesCommand {
                task_id: id,
                dates: ActualDates::new(Some(date(2024, 5, 3)), Some(date(2024, 5, 1))),
            })
            .await;

        assert!(matches!(result, Err(TaskError::ValidationFailed { .. })));
    }
}
