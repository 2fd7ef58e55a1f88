//! District records and the caller-supplied fields used to write them.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A subdivision of a [`State`](crate::state::State) with its case counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct District {
  pub district_id:   i64,
  pub district_name: String,
  pub state_id:      i64,
  pub cases:         i64,
  pub cured:         i64,
  pub active:        i64,
  pub deaths:        i64,
}

/// The six fields written by an insert or a full-replacement update.
///
/// `state_id` is not checked against the state table; a district may point
/// at a state that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictFields {
  pub district_name: String,
  pub state_id:      i64,
  pub cases:         i64,
  pub cured:         i64,
  pub active:        i64,
  pub deaths:        i64,
}

impl DistrictFields {
  /// Reject an empty name or a negative count.
  pub fn validate(&self) -> Result<()> {
    if self.district_name.is_empty() {
      return Err(Error::invalid("districtName", "must not be empty"));
    }
    for (field, value) in [
      ("cases", self.cases),
      ("cured", self.cured),
      ("active", self.active),
      ("deaths", self.deaths),
    ] {
      if value < 0 {
        return Err(Error::invalid(field, format!("must be non-negative, got {value}")));
      }
    }
    Ok(())
  }

  /// Attach an assigned id, producing the stored record.
  pub fn into_district(self, district_id: i64) -> District {
    District {
      district_id,
      district_name: self.district_name,
      state_id:      self.state_id,
      cases:         self.cases,
      cured:         self.cured,
      active:        self.active,
      deaths:        self.deaths,
    }
  }
}

/// Parse a textual identifier into an integer, with no coercion.
///
/// Surrounding whitespace, fractional parts and trailing garbage are all
/// rejected.
pub fn parse_id(field: &'static str, raw: &str) -> Result<i64> {
  raw
    .parse::<i64>()
    .map_err(|e| Error::invalid(field, format!("{raw:?} is not an integer ({e})")))
}
