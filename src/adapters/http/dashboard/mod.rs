//! Dashboard HTTP adapter module.

mod dto;
mod handlers;
mod routes;

pub use dto::AsOfParams;
pub use handlers::DashboardHandlers;
pub use routes::dashboard_routes;
