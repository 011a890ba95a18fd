//! HTTP routes for user endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{create_user, delete_user, get_user, list_users, UserHandlers};

pub fn user_routes(handlers: UserHandlers) -> Router {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/:id", get(get_user).delete(delete_user))
        .with_state(handlers)
}
