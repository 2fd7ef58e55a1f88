//! Server assembly for Casebook: configuration, seeding, and the HTTP
//! service wrapped around [`casebook_api::api_router`].

pub mod error;

pub use error::{Error, Result};

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use casebook_core::{state::State, store::CaseStore};
use serde::Deserialize;
use tower::Layer as _;
use tower_http::{
  normalize_path::{NormalizePath, NormalizePathLayer},
  trace::TraceLayer,
};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration.
///
/// Read from an optional TOML file, then overridden by `CASEBOOK_*`
/// environment variables (e.g. `CASEBOOK_PORT=8080`).
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  pub database_path: PathBuf,
}

impl ServerConfig {
  pub fn load(path: &Path) -> Result<Self> {
    let settings = config::Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 3001)?
      .set_default("database_path", "covid19India.db")?
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("CASEBOOK").try_parsing(true))
      .build()?;
    Ok(settings.try_deserialize()?)
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Seeding ──────────────────────────────────────────────────────────────────

/// Read a JSON array of states (`stateId`, `stateName`, `population`).
pub fn read_seed(path: &Path) -> Result<Vec<State>> {
  let text = std::fs::read_to_string(path).map_err(|source| Error::SeedIo {
    path: path.to_path_buf(),
    source,
  })?;
  serde_json::from_str(&text).map_err(|source| Error::SeedJson {
    path: path.to_path_buf(),
    source,
  })
}

// ─── Service ──────────────────────────────────────────────────────────────────

/// The complete HTTP service: API routes with request tracing, behind a
/// layer that trims trailing slashes so `/states/` routes like `/states`.
pub fn app<S>(store: Arc<S>) -> NormalizePath<Router>
where
  S: CaseStore + 'static,
{
  let router = casebook_api::api_router(store).layer(TraceLayer::new_for_http());
  NormalizePathLayer::trim_trailing_slash().layer(router)
}
