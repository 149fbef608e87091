//! CLI error types
//!
//! Everything here is fatal: main prints the error and exits non-zero.

use thiserror::Error;

use crate::config::ConfigError;
use crate::store::StoreError;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be resolved or did not validate
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The store could not be opened
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Listener or runtime I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Resolved configuration could not be rendered
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
