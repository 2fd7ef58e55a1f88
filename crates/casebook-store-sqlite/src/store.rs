//! [`SqliteStore`] — the SQLite implementation of [`CaseStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;
use tracing::debug;

use casebook_core::{
  district::{District, DistrictFields},
  state::{State, StateName, StateStats},
  store::CaseStore,
};

use crate::{
  Error, Result,
  rows::{DistrictRow, DistrictStateRow, StateRow, StatsRow},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Casebook store backed by a single SQLite file.
///
/// All statements run in order on the connection's own thread, so concurrent
/// callers are serialised there rather than by a lock held across `.await`.
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Insert or overwrite states in a single transaction.
  ///
  /// States have no write path through [`CaseStore`]; this is how they are
  /// loaded out-of-band. Returns the number of states written.
  pub async fn seed_states(&self, states: Vec<State>) -> Result<usize> {
    for state in &states {
      state.validate()?;
    }

    let written = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        {
          let mut stmt = tx.prepare(
            "INSERT INTO state (state_id, state_name, population)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(state_id) DO UPDATE SET
               state_name = excluded.state_name,
               population = excluded.population",
          )?;
          for state in &states {
            stmt.execute(rusqlite::params![
              state.state_id,
              state.state_name,
              state.population,
            ])?;
          }
        }
        tx.commit()?;
        Ok(states.len())
      })
      .await?;

    debug!(written, "seeded states");
    Ok(written)
  }
}

// ─── CaseStore impl ──────────────────────────────────────────────────────────

impl CaseStore for SqliteStore {
  type Error = Error;

  // ── States ────────────────────────────────────────────────────────────────

  async fn list_states(&self) -> Result<Vec<State>> {
    let rows: Vec<StateRow> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT state_id, state_name, population
           FROM state
           ORDER BY state_id ASC",
        )?;
        let rows = stmt
          .query_map([], StateRow::read)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(rows.into_iter().map(StateRow::into_state).collect())
  }

  async fn get_state(&self, state_id: i64) -> Result<State> {
    let row: Option<StateRow> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT state_id, state_name, population FROM state WHERE state_id = ?1",
            rusqlite::params![state_id],
            StateRow::read,
          )
          .optional()?)
      })
      .await?;

    row
      .map(StateRow::into_state)
      .ok_or(Error::Core(casebook_core::Error::StateNotFound(state_id)))
  }

  async fn state_stats(&self, state_id: i64) -> Result<StateStats> {
    let row: StatsRow = self
      .conn
      .call(move |conn| {
        Ok(conn.query_row(
          "SELECT
             COALESCE(SUM(cases),  0),
             COALESCE(SUM(cured),  0),
             COALESCE(SUM(active), 0),
             COALESCE(SUM(deaths), 0)
           FROM district
           WHERE state_id = ?1",
          rusqlite::params![state_id],
          StatsRow::read,
        )?)
      })
      .await?;

    Ok(row.into_stats())
  }

  // ── Districts ─────────────────────────────────────────────────────────────

  async fn insert_district(&self, fields: DistrictFields) -> Result<i64> {
    fields.validate()?;

    let district_id: i64 = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO district (district_name, state_id, cases, cured, active, deaths)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![
            fields.district_name,
            fields.state_id,
            fields.cases,
            fields.cured,
            fields.active,
            fields.deaths,
          ],
        )?;
        // Same connection thread, so no other insert can interleave here.
        Ok(conn.last_insert_rowid())
      })
      .await?;

    debug!(district_id, "district inserted");
    Ok(district_id)
  }

  async fn get_district(&self, district_id: i64) -> Result<District> {
    let row: Option<DistrictRow> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT district_id, district_name, state_id, cases, cured, active, deaths
             FROM district
             WHERE district_id = ?1",
            rusqlite::params![district_id],
            DistrictRow::read,
          )
          .optional()?)
      })
      .await?;

    row
      .map(DistrictRow::into_district)
      .ok_or(Error::Core(casebook_core::Error::DistrictNotFound(district_id)))
  }

  async fn update_district(&self, district_id: i64, fields: DistrictFields) -> Result<()> {
    fields.validate()?;

    let affected: usize = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE district SET
             district_name = ?1,
             state_id      = ?2,
             cases         = ?3,
             cured         = ?4,
             active        = ?5,
             deaths        = ?6
           WHERE district_id = ?7",
          rusqlite::params![
            fields.district_name,
            fields.state_id,
            fields.cases,
            fields.cured,
            fields.active,
            fields.deaths,
            district_id,
          ],
        )?)
      })
      .await?;

    debug!(district_id, affected, "district updated");
    Ok(())
  }

  async fn delete_district(&self, district_id: i64) -> Result<()> {
    let affected: usize = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM district WHERE district_id = ?1",
          rusqlite::params![district_id],
        )?)
      })
      .await?;

    debug!(district_id, affected, "district deleted");
    Ok(())
  }

  async fn district_state_name(&self, district_id: i64) -> Result<StateName> {
    let row: Option<DistrictStateRow> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT district.state_id, state.state_name
             FROM district
             LEFT JOIN state ON state.state_id = district.state_id
             WHERE district.district_id = ?1",
            rusqlite::params![district_id],
            DistrictStateRow::read,
          )
          .optional()?)
      })
      .await?;

    let row = row.ok_or(Error::Core(casebook_core::Error::DistrictNotFound(district_id)))?;
    let state_id = row.state_id;
    row.into_state_name().ok_or(Error::Core(
      casebook_core::Error::DanglingStateReference { district_id, state_id },
    ))
  }
}
