//! Database configuration loaded from the environment.

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable {0}")]
    MissingVar(&'static str),

    #[error("Invalid value {value:?} for environment variable {name}")]
    InvalidVar { name: &'static str, value: String },

    #[error("Connection to database failed: {0}")]
    Connection(#[from] DbErr),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub sqlx_logging: bool,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 1,
            sqlx_logging: true,
        }
    }

    pub fn with_pool_size(mut self, min_connections: u32, max_connections: u32) -> Self {
        self.min_connections = min_connections;
        self.max_connections = max_connections;
        self
    }

    pub fn with_sqlx_logging(mut self, enabled: bool) -> Self {
        self.sqlx_logging = enabled;
        self
    }

    /// Read `DATABASE_URL` and the optional pool settings, loading `.env` first
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| dotenvy::var(name).ok())
    }

    /// Build a config from any variable source.
    ///
    /// Recognised keys: `DATABASE_URL` (required), `DATABASE_MAX_CONNECTIONS`,
    /// `DATABASE_MIN_CONNECTIONS`, `DATABASE_SQLX_LOGGING`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?;
        let mut config = Self::new(url);

        if let Some(value) = lookup("DATABASE_MAX_CONNECTIONS") {
            config.max_connections = parse_var("DATABASE_MAX_CONNECTIONS", value)?;
        }
        if let Some(value) = lookup("DATABASE_MIN_CONNECTIONS") {
            config.min_connections = parse_var("DATABASE_MIN_CONNECTIONS", value)?;
        }
        if let Some(value) = lookup("DATABASE_SQLX_LOGGING") {
            config.sqlx_logging = parse_var("DATABASE_SQLX_LOGGING", value)?;
        }

        if config.min_connections > config.max_connections {
            return Err(ConfigError::InvalidVar {
                name: "DATABASE_MIN_CONNECTIONS",
                value: config.min_connections.to_string(),
            });
        }

        Ok(config)
    }

    pub fn connect_options(&self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(self.url.clone());
        opt.max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .sqlx_logging(self.sqlx_logging);
        opt
    }

    pub async fn connect(&self) -> Result<DatabaseConnection, ConfigError> {
        tracing::info!(
            max_connections = self.max_connections,
            min_connections = self.min_connections,
            "connecting to database"
        );
        Ok(Database::connect(self.connect_options()).await?)
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidVar { name, value })
}
