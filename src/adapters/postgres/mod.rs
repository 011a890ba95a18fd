//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresTaskRepository` - Tasks and dependency edges
//! - `PostgresUserRepository` - Users
//! - `connect` / `run_migrations` - Pool setup and embedded migrations

mod pool;
mod task_repository;
mod user_repository;

pub use pool::{connect, run_migrations};
pub use task_repository::PostgresTaskRepository;
pub use user_repository::PostgresUserRepository;

use sqlx::postgres::PgRow;
use sqlx::{Postgres, Row};
use tracing::error;

use crate::domain::foundation::DomainError;

/// Wraps a sqlx failure into a `DatabaseError`, logging it once here.
fn db_error(action: &str, err: sqlx::Error) -> DomainError {
    error!(action, error = %err, "Database operation failed");
    DomainError::database(format!("Failed to {}: {}", action, err))
}

/// Reads a typed column, reporting the column name on failure.
fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, Postgres> + sqlx::Type<Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(format!("Failed to get {}: {}", name, e)))
}
