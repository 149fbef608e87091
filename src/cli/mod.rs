//! CLI module for poemario
//!
//! Provides the command-line interface for:
//! - serve: resolve configuration, open the store, run the HTTP server
//! - config: print the resolved configuration with the secret redacted

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command, serve, show_config};
pub use errors::{CliError, CliResult};
