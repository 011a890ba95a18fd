//! HTTP routes for dashboard endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_dashboard, get_timeline, DashboardHandlers};

/// Creates the dashboard router with all routes.
pub fn dashboard_routes(handlers: DashboardHandlers) -> Router {
    Router::new()
        .route("/dashboard_tasks", get(get_dashboard))
        .route("/timeline_tasks", get(get_timeline))
        .with_state(handlers)
}
