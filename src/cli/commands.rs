//! CLI command implementations
//!
//! Both commands resolve configuration the same way: environment first,
//! then flag overrides. Only `serve` validates the result; `config` prints
//! whatever resolved so a broken environment can be inspected.

use std::path::PathBuf;
use std::sync::Arc;

use serde_json::{json, Value};

use crate::api::{self, AppState};
use crate::config::Config;
use crate::observability::Logger;
use crate::store::{Collection, FileCollection, MemoryCollection, PoemStore};

use super::args::Command;
use super::errors::CliResult;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the matching command. This is the
/// only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { port, data, secret } => serve(port, data, secret),
        Command::Config { port, data, secret } => show_config(port, data, secret),
    }
}

/// Run the HTTP server
///
/// Opens the collection backend named by the resolved `data_path` (the
/// in-memory backend when unset) and serves until the process is stopped.
pub fn serve(port: Option<u16>, data: Option<PathBuf>, secret: Option<String>) -> CliResult<()> {
    let config = resolve_config(port, data, secret)?;
    config.validate()?;

    let rt = tokio::runtime::Runtime::new()?;

    rt.block_on(async {
        match config.data_path.clone() {
            Some(path) => start_server(FileCollection::open(path)?, config, "file").await,
            None => start_server(MemoryCollection::new(), config, "memory").await,
        }
    })
}

/// Print the resolved configuration with the secret redacted
pub fn show_config(
    port: Option<u16>,
    data: Option<PathBuf>,
    secret: Option<String>,
) -> CliResult<()> {
    let config = resolve_config(port, data, secret)?;
    println!("{}", serde_json::to_string_pretty(&render_config(&config))?);

    Ok(())
}

/// Open the store over a backend and serve requests
async fn start_server<C: Collection + 'static>(
    collection: C,
    config: Config,
    backend: &'static str,
) -> CliResult<()> {
    let store = PoemStore::open(collection)?;
    let records = store.count()?;

    Logger::info(
        "STORE_OPENED",
        &[("backend", backend), ("records", &records.to_string())],
    );

    let state = Arc::new(AppState { store, config });
    api::serve(state).await?;

    Ok(())
}

/// Resolve configuration from the environment plus flag overrides
fn resolve_config(
    port: Option<u16>,
    data: Option<PathBuf>,
    secret: Option<String>,
) -> CliResult<Config> {
    Ok(apply_overrides(Config::from_env()?, port, data, secret))
}

/// Apply flag overrides on top of an environment-derived configuration
fn apply_overrides(
    mut config: Config,
    port: Option<u16>,
    data: Option<PathBuf>,
    secret: Option<String>,
) -> Config {
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(data) = data {
        config.data_path = Some(data);
    }
    if let Some(secret) = secret {
        config.secret = secret;
    }

    config
}

/// Render the configuration for display, redacting the secret
///
/// The secret shows as asterisks when set and as an empty string when not,
/// so an operator can still tell whether SECRET reached the process.
fn render_config(config: &Config) -> Value {
    json!({
        "secret": if config.secret.is_empty() { "" } else { "********" },
        "default_quantity": config.default_quantity,
        "default_page": config.default_page,
        "data_path": config.data_path.as_ref().map(|p| p.display().to_string()),
        "bind_addr": config.bind_addr,
        "port": config.port,
        "cors_origins": config.cors_origins,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            secret: "hunter2".to_string(),
            default_quantity: 10,
            default_page: 1,
            data_path: None,
            bind_addr: "0.0.0.0".to_string(),
            port: 5000,
            cors_origins: Vec::new(),
        }
    }

    #[test]
    fn test_apply_overrides_replaces_given_fields() {
        let config = apply_overrides(
            base_config(),
            Some(8080),
            Some(PathBuf::from("/tmp/poems.json")),
            Some("otra-clave".to_string()),
        );

        assert_eq!(config.port, 8080);
        assert_eq!(config.data_path, Some(PathBuf::from("/tmp/poems.json")));
        assert_eq!(config.secret, "otra-clave");
    }

    #[test]
    fn test_apply_overrides_keeps_absent_fields() {
        let config = apply_overrides(base_config(), None, None, None);

        assert_eq!(config.port, 5000);
        assert_eq!(config.data_path, None);
        assert_eq!(config.secret, "hunter2");
    }

    #[test]
    fn test_render_config_redacts_secret() {
        let rendered = render_config(&base_config());

        assert_eq!(rendered["secret"], "********");
        assert_eq!(rendered["port"], 5000);
        assert_eq!(rendered["data_path"], Value::Null);
    }

    #[test]
    fn test_render_config_shows_unset_secret_as_empty() {
        let mut config = base_config();
        config.secret = String::new();

        let rendered = render_config(&config);
        assert_eq!(rendered["secret"], "");
    }

    #[test]
    fn test_render_config_shows_data_path() {
        let mut config = base_config();
        config.data_path = Some(PathBuf::from("/var/lib/poemario/poems.json"));

        let rendered = render_config(&config);
        assert_eq!(rendered["data_path"], "/var/lib/poemario/poems.json");
    }
}
