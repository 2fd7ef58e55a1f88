//! Row types read positionally from SQLite, and their pure conversions to
//! the core records.
//!
//! Column order in every `SELECT` must match the field order of the row
//! struct it is read into.

use casebook_core::{
  district::District,
  state::{State, StateName, StateStats},
};
use rusqlite::Row;

// ─── state ───────────────────────────────────────────────────────────────────

pub struct StateRow {
  pub state_id:   i64,
  pub state_name: String,
  pub population: i64,
}

impl StateRow {
  pub fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      state_id:   row.get(0)?,
      state_name: row.get(1)?,
      population: row.get(2)?,
    })
  }

  pub fn into_state(self) -> State {
    State {
      state_id:   self.state_id,
      state_name: self.state_name,
      population: self.population,
    }
  }
}

// ─── district ────────────────────────────────────────────────────────────────

pub struct DistrictRow {
  pub district_id:   i64,
  pub district_name: String,
  pub state_id:      i64,
  pub cases:         i64,
  pub cured:         i64,
  pub active:        i64,
  pub deaths:        i64,
}

impl DistrictRow {
  pub fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      district_id:   row.get(0)?,
      district_name: row.get(1)?,
      state_id:      row.get(2)?,
      cases:         row.get(3)?,
      cured:         row.get(4)?,
      active:        row.get(5)?,
      deaths:        row.get(6)?,
    })
  }

  pub fn into_district(self) -> District {
    District {
      district_id:   self.district_id,
      district_name: self.district_name,
      state_id:      self.state_id,
      cases:         self.cases,
      cured:         self.cured,
      active:        self.active,
      deaths:        self.deaths,
    }
  }
}

// ─── aggregates ──────────────────────────────────────────────────────────────

/// `SUM` over an empty group is `NULL` in SQL; each missing total becomes 0.
pub struct StatsRow {
  pub total_cases:  Option<i64>,
  pub total_cured:  Option<i64>,
  pub total_active: Option<i64>,
  pub total_deaths: Option<i64>,
}

impl StatsRow {
  pub fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      total_cases:  row.get(0)?,
      total_cured:  row.get(1)?,
      total_active: row.get(2)?,
      total_deaths: row.get(3)?,
    })
  }

  pub fn into_stats(self) -> StateStats {
    StateStats {
      total_cases:  self.total_cases.unwrap_or(0),
      total_cured:  self.total_cured.unwrap_or(0),
      total_active: self.total_active.unwrap_or(0),
      total_deaths: self.total_deaths.unwrap_or(0),
    }
  }
}

/// A district joined against its state; `state_name` is `NULL` when the
/// district's `state_id` is dangling.
pub struct DistrictStateRow {
  pub state_id:   i64,
  pub state_name: Option<String>,
}

impl DistrictStateRow {
  pub fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self { state_id: row.get(0)?, state_name: row.get(1)? })
  }

  pub fn into_state_name(self) -> Option<StateName> {
    self.state_name.map(|state_name| StateName { state_name })
  }
}
