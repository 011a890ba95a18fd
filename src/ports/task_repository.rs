//! Task repository port.
//!
//! Defines the contract for persisting tasks and the dependency edges
//! between them. Update methods report whether the task existed so that
//! handlers can turn a miss into `TaskError::NotFound`.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::foundation::{DomainError, TaskId, UserId};
use crate::domain::task::{
    DependencyInsert, NewTask, ShortTask, Task, TaskDependency, TaskDetails, TaskStatus,
    TaskWithDependency,
};

/// Repository port for tasks and task dependencies.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Inserts a task and returns it with its generated id and timestamp.
    async fn create(&self, task: &NewTask) -> Result<Task, DomainError>;

    /// Finds a task by id, archived or not.
    async fn get_by_id(&self, id: TaskId) -> Result<Option<Task>, DomainError>;

    /// Replaces the editable fields of a task.
    async fn update_task_data(
        &self,
        id: TaskId,
        details: &TaskDetails,
    ) -> Result<Option<Task>, DomainError>;

    /// Changes the workflow status together with the actual dates it implies
    /// (see [`crate::domain::task::ActualDates::for_status`]) in a single write.
    async fn update_task_status(
        &self,
        id: TaskId,
        status: TaskStatus,
        today: NaiveDate,
    ) -> Result<Option<Task>, DomainError>;

    /// Stores the actual start/finish dates and the derived completion days.
    async fn update_task_start_finish_dates(
        &self,
        id: TaskId,
        start: Option<NaiveDate>,
        finish: Option<NaiveDate>,
    ) -> Result<bool, DomainError>;

    async fn update_task_archive_status(
        &self,
        id: TaskId,
        is_archived: bool,
    ) -> Result<bool, DomainError>;

    async fn update_task_deadline(&self, id: TaskId, deadline: NaiveDate)
        -> Result<bool, DomainError>;

    /// All tasks, archived included, ordered by id.
    async fn get_all_short_tasks(&self) -> Result<Vec<ShortTask>, DomainError>;

    /// Non-archived tasks ordered by deadline, then id.
    async fn get_tasks_ordered_by_deadline(&self) -> Result<Vec<Task>, DomainError>;

    /// Edges where `id` is the dependent task.
    async fn get_task_depends(&self, id: TaskId) -> Result<Vec<TaskDependency>, DomainError>;

    /// Edges where `id` is the prerequisite.
    async fn get_tasks_dependent_of(&self, id: TaskId) -> Result<Vec<TaskDependency>, DomainError>;

    /// Every stored edge.
    async fn get_all_dependency_edges(&self) -> Result<Vec<TaskDependency>, DomainError>;

    /// Records that `id` depends on `depends_id` unless the edge exists or
    /// would close a cycle. The cycle check and the insert are atomic.
    async fn add_task_depends(
        &self,
        id: TaskId,
        depends_id: TaskId,
    ) -> Result<DependencyInsert, DomainError>;

    /// Removes an edge; returns false when it did not exist.
    async fn del_tasks_depends(&self, id: TaskId, depends_id: TaskId) -> Result<bool, DomainError>;

    /// Tasks related to `id` (both directions) plus the task itself,
    /// ordered by deadline.
    async fn get_all_task_dependencies(
        &self,
        id: TaskId,
    ) -> Result<Vec<TaskWithDependency>, DomainError>;

    /// Clears the responsible user on all of their tasks.
    async fn del_responsible_user_id(&self, user_id: UserId) -> Result<bool, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn TaskRepository) {}
    }
}
