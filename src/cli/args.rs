//! CLI argument definitions using clap
//!
//! Commands:
//! - poemario serve [--port <port>] [--data <path>] [--secret <secret>]
//! - poemario config [--port <port>] [--data <path>] [--secret <secret>]
//!
//! Flags override the matching environment variables.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Poemario - a poem-collection REST service with a shared-secret write gate
#[derive(Parser, Debug)]
#[command(name = "poemario")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Snapshot file for the collection (overrides DATA_PATH)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Shared secret for mutating requests (overrides SECRET)
        #[arg(long)]
        secret: Option<String>,
    },

    /// Print the resolved configuration with the secret redacted
    Config {
        /// Port to listen on (overrides PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Snapshot file for the collection (overrides DATA_PATH)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Shared secret for mutating requests (overrides SECRET)
        #[arg(long)]
        secret: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
