//! turlalead - project planning backend
//!
//! Tasks with deadlines, effort estimates and prerequisites, a status board
//! with progress and schedule warnings, and a timeline that flags tasks
//! scheduled to start before their prerequisites finish.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
