//! Dashboard and timeline query handlers.

mod get_dashboard;
mod get_timeline;
mod responsibles;

pub use get_dashboard::{DashboardQuery, GetDashboardHandler};
pub use get_timeline::{GetTimelineHandler, TimelineQuery};
