//! In-memory task repository.
//!
//! Mirrors the PostgreSQL adapter's semantics for tests and for running the
//! service without a database.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, TaskId, UserId};
use crate::domain::task::{
    completion_days, ActualDates, DependencyInsert, DependencyType, NewTask, ShortTask, Task,
    TaskDependency, TaskDetails, TaskStatus, TaskWithDependency,
};
use crate::ports::TaskRepository;

#[derive(Debug, Default)]
struct State {
    tasks: BTreeMap<TaskId, Task>,
    edges: Vec<TaskDependency>,
    last_id: i64,
}

/// In-memory storage for tasks and dependency edges.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<State>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored tasks.
    #[cfg(test)]
    pub(crate) async fn task_count(&self) -> usize {
        self.state.read().await.tasks.len()
    }

    async fn modify<F>(&self, id: TaskId, apply: F) -> Option<Task>
    where
        F: FnOnce(&mut Task),
    {
        let mut state = self.state.write().await;
        state.tasks.get_mut(&id).map(|task| {
            apply(task);
            task.clone()
        })
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, new_task: &NewTask) -> Result<Task, DomainError> {
        let mut state = self.state.write().await;
        state.last_id += 1;
        let task = Task {
            id: TaskId::new(state.last_id),
            responsible_user_id: Some(new_task.responsible_user_id),
            status: new_task.status,
            title: new_task.title.clone(),
            description: new_task.description.clone(),
            deadline: new_task.deadline,
            days_for_completion: new_task.days_for_completion,
            actual_start_date: None,
            actual_finish_date: None,
            actual_completion_days: None,
            is_archived: false,
            created_timestamp: Utc::now(),
        };
        state.tasks.insert(task.id, task.clone());
        Ok(task)
    }

    async fn get_by_id(&self, id: TaskId) -> Result<Option<Task>, DomainError> {
        Ok(self.state.read().await.tasks.get(&id).cloned())
    }

    async fn update_task_data(
        &self,
        id: TaskId,
        details: &TaskDetails,
    ) -> Result<Option<Task>, DomainError> {
        Ok(self
            .modify(id, |task| {
                task.title = details.title.clone();
                task.description = details.description.clone();
                task.deadline = details.deadline;
                task.responsible_user_id = Some(details.responsible_user_id);
                task.days_for_completion = details.days_for_completion;
            })
            .await)
    }

    async fn update_task_status(
        &self,
        id: TaskId,
        status: TaskStatus,
        today: NaiveDate,
    ) -> Result<Option<Task>, DomainError> {
        Ok(self
            .modify(id, |task| {
                let dates = ActualDates::for_status(status, task.actual_dates(), today);
                task.status = status;
                task.actual_start_date = dates.start;
                task.actual_finish_date = dates.finish;
                task.actual_completion_days = dates.completion_days();
            })
            .await)
    }

    async fn update_task_start_finish_dates(
        &self,
        id: TaskId,
        start: Option<NaiveDate>,
        finish: Option<NaiveDate>,
    ) -> Result<bool, DomainError> {
        Ok(self
            .modify(id, |task| {
                task.actual_start_date = start;
                task.actual_finish_date = finish;
                task.actual_completion_days = completion_days(start, finish);
            })
            .await
            .is_some())
    }

    async fn update_task_archive_status(
        &self,
        id: TaskId,
        is_archived: bool,
    ) -> Result<bool, DomainError> {
        Ok(self
            .modify(id, |task| task.is_archived = is_archived)
            .await
            .is_some())
    }

    async fn update_task_deadline(
        &self,
        id: TaskId,
        deadline: NaiveDate,
    ) -> Result<bool, DomainError> {
        Ok(self
            .modify(id, |task| task.deadline = deadline)
            .await
            .is_some())
    }

    async fn get_all_short_tasks(&self) -> Result<Vec<ShortTask>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .tasks
            .values()
            .map(|task| ShortTask {
                id: task.id,
                title: task.title.clone(),
            })
            .collect())
    }

    async fn get_tasks_ordered_by_deadline(&self) -> Result<Vec<Task>, DomainError> {
        let state = self.state.read().await;
        let mut tasks: Vec<Task> = state
            .tasks
            .values()
            .filter(|task| !task.is_archived)
            .cloned()
            .collect();
        tasks.sort_by_key(|task| (task.deadline, task.id));
        Ok(tasks)
    }

    async fn get_task_depends(&self, id: TaskId) -> Result<Vec<TaskDependency>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .edges
            .iter()
            .filter(|edge| edge.task_id == id)
            .cloned()
            .collect())
    }

    async fn get_tasks_dependent_of(&self, id: TaskId) -> Result<Vec<TaskDependency>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .edges
            .iter()
            .filter(|edge| edge.depends_task_id == id)
            .cloned()
            .collect())
    }

    async fn get_all_dependency_edges(&self) -> Result<Vec<TaskDependency>, DomainError> {
        Ok(self.state.read().await.edges.clone())
    }

    async fn add_task_depends(
        &self,
        id: TaskId,
        depends_id: TaskId,
    ) -> Result<DependencyInsert, DomainError> {
        let mut state = self.state.write().await;
        let outcome = DependencyInsert::evaluate(&state.edges, id, depends_id);
        if outcome == DependencyInsert::Added {
            state.edges.push(TaskDependency {
                task_id: id,
                depends_task_id: depends_id,
                created_timestamp: Utc::now(),
            });
        }
        Ok(outcome)
    }

    async fn del_tasks_depends(&self, id: TaskId, depends_id: TaskId) -> Result<bool, DomainError> {
        let mut state = self.state.write().await;
        let before = state.edges.len();
        state
            .edges
            .retain(|edge| !(edge.task_id == id && edge.depends_task_id == depends_id));
        Ok(state.edges.len() != before)
    }

    async fn get_all_task_dependencies(
        &self,
        id: TaskId,
    ) -> Result<Vec<TaskWithDependency>, DomainError> {
        let state = self.state.read().await;

        let dependents = state
            .edges
            .iter()
            .filter(|edge| edge.depends_task_id == id)
            .map(|edge| (edge.task_id, DependencyType::DependsOf));
        let prerequisites = state
            .edges
            .iter()
            .filter(|edge| edge.task_id == id)
            .map(|edge| (edge.depends_task_id, DependencyType::DependentFor));
        let itself = std::iter::once((id, DependencyType::SelfTask));

        let mut rows: Vec<TaskWithDependency> = Vec::new();
        for (task_id, dependency_type) in dependents.chain(prerequisites).chain(itself) {
            let Some(task) = state.tasks.get(&task_id) else {
                continue;
            };
            let row = TaskWithDependency {
                id: task.id,
                dependency_type,
                responsible_user_id: task.responsible_user_id,
                title: task.title.clone(),
                deadline: task.deadline,
            };
            if !rows.contains(&row) {
                rows.push(row);
            }
        }
        rows.sort_by_key(|row| (row.deadline, row.id));
        Ok(rows)
    }

    async fn del_responsible_user_id(&self, user_id: UserId) -> Result<bool, DomainError> {
        let mut state = self.state.write().await;
        let mut cleared = false;
        for task in state.tasks.values_mut() {
            if task.responsible_user_id == Some(user_id) {
                task.responsible_user_id = None;
                cleared = true;
            }
        }
        Ok(cleared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_task(title: &str, deadline: NaiveDate) -> NewTask {
        NewTask {
            status: TaskStatus::ToDo,
            title: Some(title.to_string()),
            description: None,
            deadline,
            responsible_user_id: UserId::new(1),
            days_for_completion: 2,
        }
    }

    async fn insert(repo: &InMemoryTaskRepository, title: &str, deadline: NaiveDate) -> Task {
        repo.create(&new_task(title, deadline)).await.unwrap()
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let repo = InMemoryTaskRepository::new();
        let first = insert(&repo, "a", date(2024, 6, 1)).await;
        let second = insert(&repo, "b", date(2024, 6, 2)).await;
        assert_eq!(first.id, TaskId::new(1));
        assert_eq!(second.id, TaskId::new(2));
        assert_eq!(repo.task_count().await, 2);
    }

    #[tokio::test]
    async fn updates_on_missing_task_report_absence() {
        let repo = InMemoryTaskRepository::new();
        let missing = TaskId::new(42);
        assert!(repo
            .update_task_status(missing, TaskStatus::Done, date(2024, 6, 1))
            .await
            .unwrap()
            .is_none());
        assert!(!repo
            .update_task_deadline(missing, date(2024, 6, 1))
            .await
            .unwrap());
        let archived = repo.update_task_archive_status(missing, true).await;
        assert!(!archived.unwrap());
    }

    #[tokio::test]
    async fn start_finish_dates_derive_completion_days() {
        let repo = InMemoryTaskRepository::new();
        let task = insert(&repo, "a", date(2024, 6, 1)).await;
        let (start, finish) = (Some(date(2024, 5, 1)), Some(date(2024, 5, 3)));
        repo.update_task_start_finish_dates(task.id, start, finish)
            .await
            .unwrap();
        let stored = repo.get_by_id(task.id).await.unwrap().unwrap();
        assert_eq!(stored.actual_completion_days, Some(3));
    }

    #[tokio::test]
    async fn ordered_by_deadline_skips_archived() {
        let repo = InMemoryTaskRepository::new();
        let late = insert(&repo, "late", date(2024, 7, 1)).await;
        let early = insert(&repo, "early", date(2024, 6, 1)).await;
        let archived = insert(&repo, "old", date(2024, 5, 1)).await;
        repo.update_task_archive_status(archived.id, true)
            .await
            .unwrap();

        let ids: Vec<TaskId> = repo
            .get_tasks_ordered_by_deadline()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![early.id, late.id]);
    }

    #[tokio::test]
    async fn adding_dependency_twice_keeps_one_edge() {
        let repo = InMemoryTaskRepository::new();
        let (a, b) = (TaskId::new(1), TaskId::new(2));
        let first = repo.add_task_depends(a, b).await;
        let second = repo.add_task_depends(a, b).await;
        assert_eq!(first.unwrap(), DependencyInsert::Added);
        assert_eq!(second.unwrap(), DependencyInsert::AlreadyPresent);
        assert_eq!(repo.get_all_dependency_edges().await.unwrap().len(), 1);
        assert!(repo.del_tasks_depends(a, b).await.unwrap());
        assert!(!repo.del_tasks_depends(a, b).await.unwrap());
    }

    #[tokio::test]
    async fn opposite_edges_added_concurrently_store_only_one() {
        let repo = InMemoryTaskRepository::new();
        let (a, b) = (TaskId::new(1), TaskId::new(2));

        let (forward, backward) =
            tokio::join!(repo.add_task_depends(a, b), repo.add_task_depends(b, a));

        let mut outcomes = vec![forward.unwrap(), backward.unwrap()];
        outcomes.sort_by_key(|o| *o == DependencyInsert::WouldCycle);
        assert_eq!(
            outcomes,
            vec![DependencyInsert::Added, DependencyInsert::WouldCycle]
        );
        assert_eq!(repo.get_all_dependency_edges().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn status_and_dates_are_written_together() {
        let repo = InMemoryTaskRepository::new();
        let task = insert(&repo, "a", date(2024, 6, 30)).await;

        let done = repo
            .update_task_status(task.id, TaskStatus::Done, date(2024, 6, 3))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(done.status, TaskStatus::Done);
        assert_eq!(done.actual_start_date, Some(date(2024, 6, 3)));
        assert_eq!(done.actual_finish_date, Some(date(2024, 6, 3)));
        assert_eq!(done.actual_completion_days, Some(1));

        let reopened = repo
            .update_task_status(task.id, TaskStatus::ToDo, date(2024, 6, 4))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reopened.actual_dates(), ActualDates::default());
        assert_eq!(reopened.actual_completion_days, None);
    }

    #[tokio::test]
    async fn interleaved_status_changes_keep_dates_consistent() {
        let repo = InMemoryTaskRepository::new();
        let task = insert(&repo, "a", date(2024, 6, 30)).await;
        let today = date(2024, 6, 3);

        let (_, _, _, _) = tokio::join!(
            repo.update_task_status(task.id, TaskStatus::Done, today),
            repo.update_task_status(task.id, TaskStatus::ToDo, today),
            repo.update_task_status(task.id, TaskStatus::InProgress, today),
            repo.update_task_status(task.id, TaskStatus::Done, today),
        );

        let stored = repo.get_by_id(task.id).await.unwrap().unwrap();
        let dates = stored.actual_dates();
        match stored.status {
            TaskStatus::ToDo => assert_eq!(dates, ActualDates::default()),
            TaskStatus::InProgress => {
                assert!(dates.start.is_some());
                assert!(dates.finish.is_none());
            }
            TaskStatus::Done => {
                assert!(dates.start.is_some());
                assert!(dates.finish.is_some());
            }
        }
        assert!(dates.validate().is_ok());
    }

    #[tokio::test]
    async fn all_task_dependencies_labels_both_directions() {
        let repo = InMemoryTaskRepository::new();
        let prerequisite = insert(&repo, "design", date(2024, 6, 1)).await;
        let subject = insert(&repo, "build", date(2024, 6, 10)).await;
        let dependent = insert(&repo, "ship", date(2024, 6, 20)).await;
        repo.add_task_depends(subject.id, prerequisite.id)
            .await
            .unwrap();
        repo.add_task_depends(dependent.id, subject.id)
            .await
            .unwrap();

        let rows = repo.get_all_task_dependencies(subject.id).await.unwrap();
        let labels: Vec<(TaskId, DependencyType)> =
            rows.iter().map(|r| (r.id, r.dependency_type)).collect();
        assert_eq!(
            labels,
            vec![
                (prerequisite.id, DependencyType::DependentFor),
                (subject.id, DependencyType::SelfTask),
                (dependent.id, DependencyType::DependsOf),
            ]
        );
    }

    #[tokio::test]
    async fn deleting_responsible_clears_assignments() {
        let repo = InMemoryTaskRepository::new();
        let task = insert(&repo, "a", date(2024, 6, 1)).await;
        assert!(repo.del_responsible_user_id(UserId::new(1)).await.unwrap());
        assert!(!repo.del_responsible_user_id(UserId::new(1)).await.unwrap());
        let stored = repo.get_by_id(task.id).await.unwrap().unwrap();
        assert!(stored.responsible_user_id.is_none());
    }
}
