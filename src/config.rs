//! Runtime settings read from the environment.

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Address the HTTP server binds when none is configured.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8000";

/// Service settings.
///
/// Each field maps to the upper-cased environment variable of the same
/// name, e.g. `DATABASE_URL` or `LISTEN_ADDR`.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// `PostgreSQL` connection URL.
    pub database_url: String,
    /// Socket address for the HTTP listener.
    pub listen_addr: String,
    /// Upper bound on pooled database connections.
    pub database_pool_max_connections: u32,
    /// Fallback `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Settings {
    /// Loads settings from the process environment, after merging an
    /// optional `.env` file from the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `DATABASE_URL` is missing or a value
    /// cannot be converted to its field type.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is the normal case outside development.
        drop(dotenvy::dotenv());
        Self::from_source(Environment::default().try_parsing(true))
    }

    /// Loads settings from an explicit environment source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required value is missing or invalid.
    pub fn from_source(source: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("listen_addr", DEFAULT_LISTEN_ADDR)?
            .set_default("database_pool_max_connections", 10)?
            .set_default("log_filter", "info")?
            .add_source(source)
            .build()?
            .try_deserialize()
    }
}
