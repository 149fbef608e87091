//! # Service Configuration
//!
//! Explicit configuration for the whole process, built once at startup and
//! injected into the store and the router state. Request logic never reads
//! the environment; everything it needs is on this struct.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

use crate::constants::{DEFAULT_PAGE, DEFAULT_QUANTITY};

/// Default bind address
const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

/// Default port
const DEFAULT_PORT: u16 = 5000;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The shared secret is mandatory; the write gate is useless without it
    #[error("SECRET must be set to a non-empty value")]
    MissingSecret,

    /// An environment value was present but unusable
    #[error("invalid value for {name}: '{value}'")]
    InvalidValue { name: &'static str, value: String },
}

/// Service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Shared secret required on every mutating request
    pub secret: String,

    /// Page size used when a list request does not supply a usable quantity
    pub default_quantity: i64,

    /// Page number used when a list request does not supply a usable page
    pub default_page: i64,

    /// Snapshot file for the poem collection; unset runs in memory
    pub data_path: Option<PathBuf>,

    /// Host to bind to (default: "0.0.0.0")
    pub bind_addr: String,

    /// Port to bind to (default: 5000)
    pub port: u16,

    /// CORS allowed origins; empty allows any origin
    pub cors_origins: Vec<String>,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// Reads `SECRET`, `DEFAULT_QUANTITY`, `DEFAULT_PAGE`, `DATA_PATH`,
    /// `BIND_ADDR`, `PORT` and `CORS_ORIGINS`. Absent variables fall back to
    /// their defaults; present-but-unparseable numeric ones are a startup
    /// error. Callers apply any CLI overrides and then run `validate`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            secret: env::var("SECRET").unwrap_or_default(),
            default_quantity: parse_var("DEFAULT_QUANTITY", env_value("DEFAULT_QUANTITY"), DEFAULT_QUANTITY)?,
            default_page: parse_var("DEFAULT_PAGE", env_value("DEFAULT_PAGE"), DEFAULT_PAGE)?,
            data_path: env::var_os("DATA_PATH").map(PathBuf::from),
            bind_addr: env_value("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            port: parse_var("PORT", env_value("PORT"), DEFAULT_PORT)?,
            cors_origins: env_value("CORS_ORIGINS")
                .map(|raw| split_origins(&raw))
                .unwrap_or_default(),
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.is_empty() {
            return Err(ConfigError::MissingSecret);
        }

        if self.default_quantity <= 0 {
            return Err(ConfigError::InvalidValue {
                name: "DEFAULT_QUANTITY",
                value: self.default_quantity.to_string(),
            });
        }

        if self.default_page <= 0 {
            return Err(ConfigError::InvalidValue {
                name: "DEFAULT_PAGE",
                value: self.default_page.to_string(),
            });
        }

        if self.port == 0 {
            return Err(ConfigError::InvalidValue {
                name: "PORT",
                value: "0".to_string(),
            });
        }

        Ok(())
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

/// Read an environment variable, treating empty as absent
fn env_value(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

/// Split a comma-separated origin list, dropping blank entries
fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}

/// Parse an optional variable value, falling back to a default when absent
fn parse_var<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value: raw }),
    }
}
