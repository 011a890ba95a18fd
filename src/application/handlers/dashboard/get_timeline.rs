//! GetTimelineHandler - scheduled bars with regular and cross warnings.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use super::responsibles::load_responsibles;
use crate::domain::dashboard::Timeline;
use crate::domain::task::TaskError;
use crate::ports::{TaskRepository, UserRepository};

/// Query for the timeline as seen on `as_of`.
#[derive(Debug, Clone, Copy)]
pub struct TimelineQuery {
    pub as_of: NaiveDate,
}

pub struct GetTimelineHandler {
    tasks: Arc<dyn TaskRepository>,
    users: Arc<dyn UserRepository>,
    time_reserve_coef: f64,
}

impl GetTimelineHandler {
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

    pub async fn handle(&self, query: TimelineQuery) -> Result<Timeline, TaskError> {
        let tasks = self.tasks.get_tasks_ordered_by_deadline().await?;
        let edges = self.tasks.get_all_dependency_edges().await?;
        let responsibles = load_responsibles(self.users.as_ref(), &tasks).await?;
        debug!(tasks = tasks.len(), edges = edges.len(), as_of = %query.as_of, "building timeline");

        Ok(Timeline::build(
            &tasks,
            &edges,
            &responsibles,
            query.as_of,
            self.time_reserve_coef,
        ))
    }
}
