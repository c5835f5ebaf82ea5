//! BlueFlame application binary - composition root.
//!
//! 1. Parse CLI flags and load configuration from TOML
//! 2. Open the SQLite document store (or run detached when it can't be opened)
//! 3. Start the axum REST API server

mod cli;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use blueflame_api::routes;
use blueflame_api::state::AppState;
use blueflame_core::config::BlueflameConfig;
use blueflame_core::store::DocumentStore;
use blueflame_storage::{Database, DetachedStore, SqliteDocumentStore};

use cli::CliArgs;

/// Expand a leading `~` to the user's home directory.
fn resolve_data_dir(data_dir: &str) -> PathBuf {
    if let Some(rest) = data_dir
        .strip_prefix("~/")
        .or_else(|| data_dir.strip_prefix("~\\"))
    {
        #[cfg(target_os = "windows")]
        let home = std::env::var("USERPROFILE").unwrap_or_else(|_| ".".to_string());
        #[cfg(not(target_os = "windows"))]
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        return PathBuf::from(home).join(rest);
    }
    PathBuf::from(data_dir)
}

/// Open the SQLite store, or fall back to a detached store so the
/// store-free endpoints keep working.
fn open_store(config: &BlueflameConfig) -> Arc<dyn DocumentStore> {
    let db_path = resolve_data_dir(&config.general.data_dir).join(&config.storage.database_file);

    match Database::new(&db_path) {
        Ok(db) => {
            tracing::info!(path = %db_path.display(), "Document store opened");
            Arc::new(SqliteDocumentStore::new(Arc::new(db)))
        }
        Err(e) => {
            tracing::warn!(
                path = %db_path.display(),
                error = %e,
                "Document store unavailable; chat and history endpoints will fail"
            );
            Arc::new(DetachedStore::new(e.to_string()))
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config.
    let config_file = args.resolve_config_path();
    // Tracing isn't up yet, so a load failure is reported after init.
    let (mut config, load_error) = match BlueflameConfig::load(&config_file) {
        Ok(config) => (config, None),
        Err(e) => (BlueflameConfig::default(), Some(e)),
    };
    if let Some(host) = args.resolve_host() {
        config.server.host = host;
    }
    config.server.port = args.resolve_port(config.server.port);
    if let Some(dir) = args.resolve_data_dir() {
        config.general.data_dir = dir;
    }
    if let Some(level) = args.resolve_log_level() {
        config.general.log_level = level;
    }

    // Tracing. RUST_LOG overrides the configured level.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.general.log_level)),
        )
        .init();

    tracing::info!("Starting BlueFlame v{}", env!("CARGO_PKG_VERSION"));
    match load_error {
        None => tracing::info!(path = %config_file.display(), "Configuration loaded"),
        Some(e) => tracing::warn!(
            path = %config_file.display(),
            error = %e,
            "Failed to load config, using defaults"
        ),
    }

    if args.init_config {
        config.save(&config_file)?;
        return Ok(());
    }

    // Storage.
    let store = open_store(&config);

    // API server.
    let state = AppState::new(config.clone(), store);
    routes::start_server(&config, state).await?;

    Ok(())
}
