//! Error taxonomy shared by every Casebook crate.

use thiserror::Error;

/// Coarse classification of an [`Error`], used by the transport layer to
/// pick a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  NotFound,
  Validation,
  Unavailable,
}

#[derive(Debug, Error)]
pub enum Error {
  #[error("state not found: {0}")]
  StateNotFound(i64),

  #[error("district not found: {0}")]
  DistrictNotFound(i64),

  /// The district exists but its `state_id` matches no state row.
  #[error("district {district_id} references missing state {state_id}")]
  DanglingStateReference { district_id: i64, state_id: i64 },

  #[error("missing field: {0}")]
  MissingField(&'static str),

  #[error("invalid {field}: {reason}")]
  InvalidField { field: &'static str, reason: String },

  #[error("store unavailable: {0}")]
  Unavailable(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub fn kind(&self) -> ErrorKind {
    match self {
      Error::StateNotFound(_)
      | Error::DistrictNotFound(_)
      | Error::DanglingStateReference { .. } => ErrorKind::NotFound,
      Error::MissingField(_) | Error::InvalidField { .. } => ErrorKind::Validation,
      Error::Unavailable(_) => ErrorKind::Unavailable,
    }
  }

  pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
    Error::InvalidField { field, reason: reason.into() }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
