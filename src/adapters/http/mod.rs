//! HTTP adapters - REST API implementations.
//!
//! Each area has its own adapter module with DTOs, handlers and routes.
//! [`api_router`] merges them and applies the shared middleware stack.

pub mod dashboard;
pub mod error;
pub mod task;
pub mod user;

pub use dashboard::{dashboard_routes, DashboardHandlers};
pub use error::{ApiError, ErrorResponse};
pub use task::{task_routes, TaskHandlers};
pub use user::{user_routes, UserHandlers};

use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::{Json, Router};
use http::{HeaderName, HeaderValue};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::ports::{TaskRepository, UserRepository};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Everything the HTTP layer needs to build its handlers.
#[derive(Clone)]
pub struct AppState {
    pub tasks: Arc<dyn TaskRepository>,
    pub users: Arc<dyn UserRepository>,
    pub time_reserve_coef: f64,
}

impl AppState {
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
}

/// Builds the full API router.
pub fn api_router(state: AppState, server: &ServerConfig) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(request_id))
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .layer(cors_layer(&server.cors_origins_list()));

    Router::new()
        .route("/health", get(health))
        .merge(task_routes(TaskHandlers::new(
            state.tasks.clone(),
            state.users.clone(),
        )))
        .merge(user_routes(UserHandlers::new(
            state.users.clone(),
            state.tasks.clone(),
        )))
        .merge(dashboard_routes(DashboardHandlers::new(
            state.tasks,
            state.users,
            state.time_reserve_coef,
        )))
        .layer(middleware)
}

/// GET /health
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// No configured origins means any origin is allowed.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}
