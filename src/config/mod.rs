//! Application configuration module
//!
//! Configuration is loaded from environment variables using the `config` and
//! `dotenvy` crates. Variables carry the `TURLALEAD` prefix and nested values
//! are separated with a double underscore.
//!
//! # Example
//!
//! ```no_run
//! use turlalead::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod dashboard;
mod database;
mod error;
mod server;

pub use dashboard::DashboardConfig;
pub use database::{DatabaseBackend, DatabaseConfig};
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Storage configuration (backend selection and PostgreSQL pool)
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Dashboard warning settings
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// `deployments/.env` and then `.env` are read first when present.
    /// Variables already set in the process environment win.
    ///
    /// # Environment Variable Format
    ///
    /// - `TURLALEAD__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `TURLALEAD__DATABASE__URL=...` -> `database.url = ...`
    /// - `TURLALEAD__DASHBOARD__TIME_RESERVE_COEF=1.5`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::from_filename("deployments/.env").ok();
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TURLALEAD")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.dashboard.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
