//! Handlers for `/states` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/states` | Ascending by `stateId` |
//! | `GET`  | `/states/:stateId` | 404 if not found |
//! | `GET`  | `/states/:stateId/stats` | Zero totals for a state without districts |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use casebook_core::{
  district::parse_id,
  state::{self, StateStats},
  store::CaseStore,
};

use crate::error::{ApiError, store_err};

/// `GET /states`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<state::State>>, ApiError>
where
  S: CaseStore,
{
  let states = store.list_states().await.map_err(store_err)?;
  Ok(Json(states))
}

/// `GET /states/:stateId`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(raw_id): Path<String>,
) -> Result<Json<state::State>, ApiError>
where
  S: CaseStore,
{
  let state_id = parse_id("stateId", &raw_id)?;
  let state = store.get_state(state_id).await.map_err(store_err)?;
  Ok(Json(state))
}

/// `GET /states/:stateId/stats`
pub async fn stats<S>(
  State(store): State<Arc<S>>,
  Path(raw_id): Path<String>,
) -> Result<Json<StateStats>, ApiError>
where
  S: CaseStore,
{
  let state_id = parse_id("stateId", &raw_id)?;
  let stats = store.state_stats(state_id).await.map_err(store_err)?;
  Ok(Json(stats))
}
