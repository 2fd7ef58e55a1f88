//! State records and the per-state aggregate.
//!
//! States are seeded out-of-band; nothing in Casebook creates, edits or
//! removes them through the public API.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// An administrative region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
  pub state_id:   i64,
  pub state_name: String,
  pub population: i64,
}

impl State {
  /// Reject an empty name or a negative population.
  pub fn validate(&self) -> Result<()> {
    if self.state_name.is_empty() {
      return Err(Error::invalid("stateName", "must not be empty"));
    }
    if self.population < 0 {
      return Err(Error::invalid(
        "population",
        format!("must be non-negative, got {}", self.population),
      ));
    }
    Ok(())
  }
}

/// Case totals summed over every district of one state.
///
/// A state with no districts has all four totals at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateStats {
  pub total_cases:  i64,
  pub total_cured:  i64,
  pub total_active: i64,
  pub total_deaths: i64,
}

/// The name of the state a district belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateName {
  pub state_name: String,
}
