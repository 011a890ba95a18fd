//! turlalead API server.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};

use turlalead::adapters::http::{api_router, AppState};
use turlalead::adapters::memory::{InMemoryTaskRepository, InMemoryUserRepository};
use turlalead::adapters::postgres::{
    connect, run_migrations, PostgresTaskRepository, PostgresUserRepository,
};
use turlalead::config::{AppConfig, DatabaseBackend};
use turlalead::ports::{TaskRepository, UserRepository};
use turlalead::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("loading configuration")?;
    config.validate().context("validating configuration")?;

    init_tracing(&config.server.log_level, config.is_production())?;

    let tasks: Arc<dyn TaskRepository>;
    let users: Arc<dyn UserRepository>;
    match config.database.backend {
        DatabaseBackend::Postgres => {
            let pool = connect(&config.database)
                .await
                .context("connecting to PostgreSQL")?;
            if config.database.run_migrations {
                run_migrations(&pool).await.context("running migrations")?;
            }
            tasks = Arc::new(PostgresTaskRepository::new(pool.clone()));
            users = Arc::new(PostgresUserRepository::new(pool));
        }
        DatabaseBackend::Memory => {
            warn!("using in-memory storage, data is lost on restart");
            tasks = Arc::new(InMemoryTaskRepository::new());
            users = Arc::new(InMemoryUserRepository::new());
        }
    }

    let state = AppState::new(tasks, users, config.dashboard.time_reserve_coef);
    let app = api_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, environment = ?config.server.environment, "turlalead listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
    }
}
