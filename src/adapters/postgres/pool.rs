//! Connection pool and schema migrations.

use secrecy::ExposeSecret;
use sqlx::migrate::MigrateError;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use crate::config::DatabaseConfig;

/// Opens a PostgreSQL pool sized and timed from configuration.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .max_lifetime(config.max_lifetime())
        .connect(config.url.expose_secret())
        .await?;

    info!(
        min_connections = config.min_connections,
        max_connections = config.max_connections,
        "Connected to PostgreSQL"
    );

    Ok(pool)
}

/// Applies the embedded `migrations/` directory.
///
/// sqlx takes an advisory lock, so concurrent replicas apply each
/// migration once.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    info!("Running database migrations");
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations completed");
    Ok(())
}
