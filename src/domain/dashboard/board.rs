//! Dashboard and timeline read models.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::schedule::Schedule;
use super::warnings::{cross_warnings, warnings_for, Warning};
use crate::domain::foundation::{TaskId, UserId};
use crate::domain::task::{Task, TaskDependency, TaskStatus};
use crate::domain::user::User;

/// A task card inside a status column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardCard {
    pub id: TaskId,
    pub title: Option<String>,
    pub deadline: NaiveDate,
    pub responsible: Option<User>,
    pub warnings: Vec<Warning>,
}

/// All cards sharing a status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusColumn {
    pub status_name: TaskStatus,
    pub order_number: u8,
    pub tasks: Vec<DashboardCard>,
}

/// The dashboard: progress plus one column per status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardBoard {
    pub progress: u8,
    pub statuses: Vec<StatusColumn>,
}

impl DashboardBoard {
    /// Builds the board from tasks already ordered by deadline.
    ///
    /// Every status gets a column, empty or not, in workflow order.
    pub fn build(
        tasks: &[Task],
        responsibles: &HashMap<UserId, User>,
        today: NaiveDate,
        time_reserve_coef: f64,
    ) -> Self {
        let statuses = TaskStatus::ALL
            .iter()
            .map(|status| StatusColumn {
                status_name: *status,
                order_number: status.order_number(),
                tasks: tasks
                    .iter()
                    .filter(|task| task.status == *status)
                    .map(|task| DashboardCard {
                        id: task.id,
                        title: task.title.clone(),
                        deadline: task.deadline,
                        responsible: responsible_of(task, responsibles),
                        warnings: warnings_for(task, today, time_reserve_coef),
                    })
                    .collect(),
            })
            .collect();

        Self {
            progress: progress(tasks),
            statuses,
        }
    }
}

/// Share of done tasks, in whole percent rounded down.
pub fn progress(tasks: &[Task]) -> u8 {
    if tasks.is_empty() {
        return 0;
    }
    let done = tasks
        .iter()
        .filter(|task| task.status == TaskStatus::Done)
        .count();
    (done * 100 / tasks.len()) as u8
}

/// A task row on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineTask {
    pub id: TaskId,
    pub status: TaskStatus,
    pub title: Option<String>,
    pub deadline: NaiveDate,
    pub start_date: NaiveDate,
    pub finish_date: NaiveDate,
    pub responsible: Option<User>,
    pub warnings: Vec<Warning>,
}

/// The timeline of all active tasks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timeline {
    pub tasks: Vec<TimelineTask>,
}

impl Timeline {
    /// Builds the timeline from tasks already ordered by deadline.
    ///
    /// Prerequisites missing from `tasks` (archived or deleted) never
    /// produce cross warnings.
    pub fn build(
        tasks: &[Task],
        edges: &[TaskDependency],
        responsibles: &HashMap<UserId, User>,
        today: NaiveDate,
        time_reserve_coef: f64,
    ) -> Self {
        let by_id: HashMap<TaskId, &Task> = tasks.iter().map(|task| (task.id, task)).collect();

        let rows = tasks
            .iter()
            .map(|task| {
                let prerequisites = edges
                    .iter()
                    .filter(|edge| edge.task_id == task.id)
                    .filter_map(|edge| by_id.get(&edge.depends_task_id).copied());

                let mut warnings = warnings_for(task, today, time_reserve_coef);
                warnings.extend(cross_warnings(task, prerequisites));

                let schedule = Schedule::for_task(task);
                TimelineTask {
                    id: task.id,
                    status: task.status,
                    title: task.title.clone(),
                    deadline: task.deadline,
                    start_date: schedule.start,
                    finish_date: schedule.finish,
                    responsible: responsible_of(task, responsibles),
                    warnings,
                }
            })
            .collect();

        Self { tasks: rows }
    }
}

fn responsible_of(task: &Task, responsibles: &HashMap<UserId, User>) -> Option<User> {
    task.responsible_user_id
        .and_then(|id| responsibles.get(&id))
        .cloned()
}
