//! Layered service configuration.
//!
//! Sources, lowest precedence first: built-in defaults, an optional TOML file
//! (path from `TODO_SERVICE_CONFIG`, default `todo-service.toml`), then
//! `TODO_SERVICE_*` environment variables. A `.env` file is loaded into the
//! environment first when present.

use crate::grpc::BoundaryOptions;
use ::config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_VAR: &str = "TODO_SERVICE_CONFIG";
/// Configuration file used when [`CONFIG_PATH_VAR`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "todo-service.toml";
/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "TODO_SERVICE";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or a value had the wrong type.
    #[error("failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    /// `storage = "postgres"` without a `database_url`.
    #[error("database_url is required when storage is postgres")]
    MissingDatabaseUrl,

    /// The pool would hold no connections.
    #[error("pool_max_size must be greater than zero")]
    InvalidPoolSize,

    /// Every call would time out immediately.
    #[error("request_timeout_ms must be greater than zero")]
    InvalidRequestTimeout,

    /// Opening the pool would give up immediately.
    #[error("pool_connect_timeout_ms must be greater than zero")]
    InvalidPoolConnectTimeout,
}

/// Storage backend behind the repository ports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local storage; contents are lost on exit.
    #[default]
    Memory,
    /// `PostgreSQL` via a connection pool.
    Postgres,
}

/// Validated service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceConfig {
    /// Address the gRPC server binds.
    pub listen_addr: SocketAddr,
    /// Selected storage backend.
    pub storage: StorageBackend,
    /// Connection string, required for [`StorageBackend::Postgres`].
    pub database_url: Option<String>,
    /// Maximum pooled database connections.
    pub pool_max_size: u32,
    /// How long opening the pool waits for its first connections, in
    /// milliseconds.
    pub pool_connect_timeout_ms: u64,
    /// Per-call deadline in milliseconds.
    pub request_timeout_ms: u64,
    /// Default `tracing` filter; `RUST_LOG` takes precedence.
    pub log_filter: String,
    /// Return internal error detail to callers. Development only.
    pub expose_error_details: bool,
}

impl ServiceConfig {
    /// Loads configuration from `.env`, the configuration file and the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source is malformed or the resulting
    /// configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env file is normal.
        let _dotenv = dotenvy::dotenv();

        let path =
            std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_owned());
        let config = defaults()?
            .add_source(File::with_name(&path).format(FileFormat::Toml).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;
        Self::from_config(config)
    }

    /// Builds configuration from TOML text layered over the defaults.
    ///
    /// The environment is not consulted.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the text is malformed or the resulting
    /// configuration is invalid.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config = defaults()?
            .add_source(File::from_str(contents, FileFormat::Toml))
            .build()?;
        Self::from_config(config)
    }

    fn from_config(config: Config) -> Result<Self, ConfigError> {
        let parsed: Self = config.try_deserialize()?;
        parsed.validate()?;
        Ok(parsed)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.storage == StorageBackend::Postgres
            && self
                .database_url
                .as_deref()
                .is_none_or(|url| url.trim().is_empty())
        {
            return Err(ConfigError::MissingDatabaseUrl);
        }
        if self.pool_max_size == 0 {
            return Err(ConfigError::InvalidPoolSize);
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidRequestTimeout);
        }
        if self.pool_connect_timeout_ms == 0 {
            return Err(ConfigError::InvalidPoolConnectTimeout);
        }
        Ok(())
    }

    /// Returns the per-call deadline.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Returns how long opening the pool may wait for connections.
    #[must_use]
    pub const fn pool_connect_timeout(&self) -> Duration {
        Duration::from_millis(self.pool_connect_timeout_ms)
    }

    /// Returns the boundary options derived from this configuration.
    #[must_use]
    pub const fn boundary_options(&self) -> BoundaryOptions {
        BoundaryOptions {
            request_timeout: self.request_timeout(),
            expose_error_details: self.expose_error_details,
        }
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ::config::ConfigError> {
    Config::builder()
        .set_default("listen_addr", "0.0.0.0:50051")?
        .set_default("storage", "memory")?
        .set_default("pool_max_size", 8)?
        .set_default("pool_connect_timeout_ms", 30_000)?
        .set_default("request_timeout_ms", 30_000)?
        .set_default("log_filter", "info")?
        .set_default("expose_error_details", false)
}
