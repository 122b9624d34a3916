//! Configuration module for moviestore
//!
//! This module handles loading and validating configuration from environment
//! variables, providing strongly-typed configuration structures for the
//! server and the database.

use envconfig::Envconfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Error, Result};

/// Main configuration structure for moviestore
#[derive(Debug, Clone, Deserialize, Serialize, Envconfig)]
pub struct Config {
    /// Server configuration
    #[serde(flatten)]
    #[envconfig(nested = true)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(flatten)]
    #[envconfig(nested = true)]
    pub database: DatabaseConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize, Envconfig)]
pub struct ServerConfig {
    /// Host to bind to
    #[envconfig(from = "HOST", default = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[envconfig(from = "PORT", default = "4000")]
    pub port: u16,

    /// Log level
    #[envconfig(from = "LOG_LEVEL", default = "info")]
    pub log_level: String,

    /// Environment (development, staging, production)
    #[envconfig(from = "ENVIRONMENT", default = "development")]
    pub environment: String,

    /// Request timeout in seconds
    #[envconfig(from = "REQUEST_TIMEOUT_SECS", default = "30")]
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Get the server address as a string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Check if running in production mode
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize, Envconfig)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    #[envconfig(from = "DATABASE_URL")]
    pub url: String,

    /// Maximum pool size
    #[envconfig(from = "DATABASE_POOL_MAX_SIZE", default = "25")]
    pub pool_max_size: u32,

    /// Minimum idle connections
    #[envconfig(from = "DATABASE_POOL_MIN_IDLE", default = "2")]
    pub pool_min_idle: u32,

    /// Pool acquire timeout in seconds
    #[envconfig(from = "DATABASE_POOL_TIMEOUT_SECONDS", default = "30")]
    pub pool_timeout_seconds: u64,

    /// Idle timeout in seconds
    #[envconfig(from = "DATABASE_POOL_IDLE_TIMEOUT_SECONDS", default = "900")]
    pub pool_idle_timeout_seconds: u64,

    /// Deadline for a single model operation in seconds
    #[envconfig(from = "DATABASE_QUERY_TIMEOUT_SECONDS", default = "3")]
    pub query_timeout_seconds: u64,
}

impl DatabaseConfig {
    /// Get pool timeout as Duration
    pub fn pool_timeout(&self) -> Duration {
        Duration::from_secs(self.pool_timeout_seconds)
    }

    /// Get idle timeout as Duration
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.pool_idle_timeout_seconds)
    }

    /// Get the per-operation deadline as Duration
    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_seconds)
    }

    /// Mask password in URL for logging
    pub fn masked_url(&self) -> String {
        if let Some(at_pos) = self.url.find('@') {
            if let Some(scheme_end) = self.url.find("://") {
                let start = &self.url[..scheme_end + 3];
                let end = &self.url[at_pos..];
                return format!("{}***{}", start, end);
            }
        }
        "***".to_string()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (for local development)
        dotenv::dotenv().ok();

        Config::init_from_env().map_err(Error::from)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(Error::config("Server port cannot be 0"));
        }

        if self.database.url.is_empty() {
            return Err(Error::config("Database URL cannot be empty"));
        }

        if self.database.pool_max_size == 0 {
            return Err(Error::config("Database pool size must be at least 1"));
        }

        if self.database.pool_min_idle > self.database.pool_max_size {
            return Err(Error::config(
                "Database minimum idle connections cannot exceed the pool size",
            ));
        }

        if self.database.query_timeout_seconds == 0 {
            return Err(Error::config("Database query timeout must be at least 1 second"));
        }

        Ok(())
    }

    /// Log configuration (with sensitive data masked)
    pub fn log_config(&self) {
        tracing::info!(
            server_address = %self.server.address(),
            environment = %self.server.environment,
            log_level = %self.server.log_level,
            "Server configuration"
        );

        tracing::info!(
            url = %self.database.masked_url(),
            pool_size = %self.database.pool_max_size,
            query_timeout_secs = %self.database.query_timeout_seconds,
            "Database configuration"
        );
    }
}
