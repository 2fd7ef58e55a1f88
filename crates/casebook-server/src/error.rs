//! Error type for `casebook-server`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("config error: {0}")]
  Config(#[from] config::ConfigError),

  #[error("cannot read seed file {path:?}: {source}")]
  SeedIo {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("malformed seed file {path:?}: {source}")]
  SeedJson {
    path:   PathBuf,
    #[source]
    source: serde_json::Error,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
