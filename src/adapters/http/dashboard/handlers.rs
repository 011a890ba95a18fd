//! HTTP handlers for dashboard endpoints.
//!
//! These handlers connect Axum routes to application layer query handlers.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

use super::dto::AsOfParams;
use crate::adapters::http::error::ApiError;
use crate::application::handlers::{
    DashboardQuery, GetDashboardHandler, GetTimelineHandler, TimelineQuery,
};
use crate::ports::{TaskRepository, UserRepository};

#[derive(Clone)]
pub struct DashboardHandlers {
    dashboard: Arc<GetDashboardHandler>,
    timeline: Arc<GetTimelineHandler>,
}

impl DashboardHandlers {
    pub fn new(
        tasks: Arc<dyn TaskRepository>,
        users: Arc<dyn UserRepository>,
        time_reserve_coef: f64,
    ) -> Self {
        Self {
            dashboard: Arc::new(GetDashboardHandler::new(
                tasks.clone(),
                users.clone(),
                time_reserve_coef,
            )),
            timeline: Arc::new(GetTimelineHandler::new(tasks, users, time_reserve_coef)),
        }
    }
}

/// GET /dashboard_tasks
pub async fn get_dashboard(
    State(handlers): State<DashboardHandlers>,
    params: Result<Query<AsOfParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = params?;
    let query = DashboardQuery {
        as_of: params.date(),
    };
    Ok(Json(handlers.dashboard.handle(query).await?))
}

/// GET /timeline_tasks
pub async fn get_timeline(
    State(handlers): State<DashboardHandlers>,
    params: Result<Query<AsOfParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = params?;
    let query = TimelineQuery {
        as_of: params.date(),
    };
    Ok(Json(handlers.timeline.handle(query).await?))
}
