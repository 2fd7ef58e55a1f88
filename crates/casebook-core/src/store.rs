//! The `CaseStore` trait.
//!
//! Implemented by storage backends (e.g. `casebook-store-sqlite`). The
//! transport layer depends on this abstraction, not on a concrete backend.

use std::future::Future;

use crate::{
  district::{District, DistrictFields},
  state::{State, StateName, StateStats},
};

/// Data access over states and districts.
///
/// Every method is a single statement against the backing store and re-reads
/// from it; nothing is cached between calls. Backend errors convert into the
/// shared [`crate::Error`] taxonomy.
pub trait CaseStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + Into<crate::Error> + 'static;

  // ── States ────────────────────────────────────────────────────────────

  /// All states, ascending by `state_id`.
  fn list_states(
    &self,
  ) -> impl Future<Output = Result<Vec<State>, Self::Error>> + Send + '_;

  /// A single state; fails with `StateNotFound` if absent.
  fn get_state(
    &self,
    state_id: i64,
  ) -> impl Future<Output = Result<State, Self::Error>> + Send + '_;

  /// Totals over every district whose `state_id` matches. Zero totals, not an
  /// error, when there are none.
  fn state_stats(
    &self,
    state_id: i64,
  ) -> impl Future<Output = Result<StateStats, Self::Error>> + Send + '_;

  // ── Districts ─────────────────────────────────────────────────────────

  /// Validate and insert a district, returning its assigned id.
  fn insert_district(
    &self,
    fields: DistrictFields,
  ) -> impl Future<Output = Result<i64, Self::Error>> + Send + '_;

  /// A single district; fails with `DistrictNotFound` if absent.
  fn get_district(
    &self,
    district_id: i64,
  ) -> impl Future<Output = Result<District, Self::Error>> + Send + '_;

  /// Replace every field of a district. An unknown id is a silent no-op.
  fn update_district(
    &self,
    district_id: i64,
    fields: DistrictFields,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Physically delete a district. Deleting an unknown id succeeds.
  fn delete_district(
    &self,
    district_id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// The name of the state owning a district.
  ///
  /// Fails with `DistrictNotFound` for an unknown district and with
  /// `DanglingStateReference` when the district's `state_id` has no state.
  fn district_state_name(
    &self,
    district_id: i64,
  ) -> impl Future<Output = Result<StateName, Self::Error>> + Send + '_;
}
