//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers write through the repositories; query handlers read and
//! assemble read models.

pub mod handlers;

pub use handlers::*;
