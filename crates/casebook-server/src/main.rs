//! casebook server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), opens the SQLite
//! store, optionally seeds states from a JSON file, and serves the JSON API
//! over HTTP.
//!
//! ```sh
//! cargo run -p casebook-server -- --seed states.json
//! ```

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use axum::{ServiceExt, extract::Request};
use casebook_server::{ServerConfig, app, expand_tilde, read_seed};
use casebook_store_sqlite::SqliteStore;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Casebook case-count server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// JSON array of states to insert or overwrite before serving.
  #[arg(long)]
  seed: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config).context("failed to load configuration")?;
  let db_path = expand_tilde(&server_cfg.database_path);

  let store = SqliteStore::open(&db_path)
    .await
    .with_context(|| format!("failed to open store at {db_path:?}"))?;

  if let Some(seed_path) = &cli.seed {
    let states = read_seed(seed_path)?;
    let written = store
      .seed_states(states)
      .await
      .with_context(|| format!("failed to seed states from {seed_path:?}"))?;
    tracing::info!(written, "seeded states");
  }

  let app = app(Arc::new(store));
  let address = server_cfg.address();

  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;
  tracing::info!("Server Running at http://{address}/");

  axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::warn!(error = %e, "cannot listen for shutdown signal");
    std::future::pending::<()>().await;
  }
  tracing::info!("shutting down");
}
