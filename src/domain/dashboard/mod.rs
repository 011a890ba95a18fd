//! Dashboard module - deadline warnings, schedules and the board/timeline
//! read models built from the active task list.

mod board;
mod schedule;
mod warnings;

pub use board::{progress, DashboardBoard, DashboardCard, StatusColumn, Timeline, TimelineTask};
pub use schedule::Schedule;
pub use warnings::{cross_warnings, warnings_for, Warning, WarningType};

/// Default multiplier for the soft warning window.
pub const DEFAULT_TIME_RESERVE_COEF: f64 = 1.5;
