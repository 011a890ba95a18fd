//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - PostgreSQL repositories (sqlx)
//! - `memory` - In-memory repositories for tests and database-less runs
//! - `http` - REST API (axum)

pub mod http;
pub mod memory;
pub mod postgres;
