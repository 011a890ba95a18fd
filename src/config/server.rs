//! HTTP listener settings: bind address, deployment environment, log
//! filter and the request limits applied by the router middleware.

use serde::Deserialize;
use std::net::SocketAddr;

use super::error::ValidationError;

/// Longest request timeout the router accepts.
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// `TURLALEAD__SERVER__*`
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface the listener binds, `0.0.0.0` inside containers.
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Switches log output to JSON when set to `production`.
    #[serde(default = "default_environment")]
    pub environment: Environment,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Per-request deadline enforced by `TimeoutLayer`.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Comma separated list of allowed origins. Unset allows any origin.
    pub cors_origins: Option<String>,
}

/// Deployment the process runs in.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl ServerConfig {
    /// Address handed to the TCP listener.
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ValidationError::InvalidHost(self.host.clone()))
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Allowed CORS origins with blanks dropped. Empty means permissive.
    pub fn cors_origins_list(&self) -> Vec<String> {
        let Some(raw) = self.cors_origins.as_deref() else {
            return Vec::new();
        };
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect()
    }

    /// Rejects a zero port, a timeout outside `1..=300` seconds and a host
    /// that does not form a socket address.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        self.socket_addr().map(|_| ())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: default_environment(),
            log_level: default_log_level(),
            request_timeout_secs: default_request_timeout(),
            cors_origins: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_environment() -> Environment {
    Environment::Development
}

fn default_log_level() -> String {
    "info,turlalead=debug,sqlx=warn,tower_http=info".to_string()
}

fn default_request_timeout() -> u64 {
    30
}
