//! Handlers for `/districts` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/districts` | Body: [`DistrictBody`]; `Location` names the new district |
//! | `GET`    | `/districts/:districtId` | 404 if not found |
//! | `PUT`    | `/districts/:districtId` | Body: [`DistrictBody`]; full replacement, unknown id is a no-op |
//! | `DELETE` | `/districts/:districtId` | Unknown id still succeeds |
//! | `GET`    | `/districts/:districtId/details` | Name of the owning state |
//!
//! Mutations answer with a short plain-text confirmation.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State, rejection::JsonRejection},
  http::header,
  response::IntoResponse,
};
use casebook_core::{
  Error as CoreError,
  district::{District, DistrictFields, parse_id},
  state::StateName,
  store::CaseStore,
};
use serde::Deserialize;
use tracing::info;

use crate::error::{ApiError, store_err};

pub const ADDED: &str = "District Successfully Added";
pub const UPDATED: &str = "District Details Updated";
pub const REMOVED: &str = "District Removed";

// ─── Body ─────────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /districts` and `PUT /districts/:id`.
///
/// Every field is required; they are optional here only so a missing one is
/// reported by name.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictBody {
  pub district_name: Option<String>,
  pub state_id:      Option<i64>,
  pub cases:         Option<i64>,
  pub cured:         Option<i64>,
  pub active:        Option<i64>,
  pub deaths:        Option<i64>,
}

impl TryFrom<DistrictBody> for DistrictFields {
  type Error = CoreError;

  fn try_from(b: DistrictBody) -> Result<Self, Self::Error> {
    let fields = DistrictFields {
      district_name: b.district_name.ok_or(CoreError::MissingField("districtName"))?,
      state_id:      b.state_id.ok_or(CoreError::MissingField("stateId"))?,
      cases:         b.cases.ok_or(CoreError::MissingField("cases"))?,
      cured:         b.cured.ok_or(CoreError::MissingField("cured"))?,
      active:        b.active.ok_or(CoreError::MissingField("active"))?,
      deaths:        b.deaths.ok_or(CoreError::MissingField("deaths"))?,
    };
    fields.validate()?;
    Ok(fields)
  }
}

fn read_body(body: Result<Json<DistrictBody>, JsonRejection>) -> Result<DistrictFields, ApiError> {
  let Json(body) = body?;
  Ok(DistrictFields::try_from(body)?)
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /districts`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<DistrictBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: CaseStore,
{
  let fields = read_body(body)?;
  let district_id = store.insert_district(fields).await.map_err(store_err)?;
  info!(district_id, "district added");
  Ok(([(header::LOCATION, format!("/districts/{district_id}"))], ADDED))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /districts/:districtId`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(raw_id): Path<String>,
) -> Result<Json<District>, ApiError>
where
  S: CaseStore,
{
  let district_id = parse_id("districtId", &raw_id)?;
  let district = store.get_district(district_id).await.map_err(store_err)?;
  Ok(Json(district))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /districts/:districtId`
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(raw_id): Path<String>,
  body: Result<Json<DistrictBody>, JsonRejection>,
) -> Result<&'static str, ApiError>
where
  S: CaseStore,
{
  let district_id = parse_id("districtId", &raw_id)?;
  let fields = read_body(body)?;
  store
    .update_district(district_id, fields)
    .await
    .map_err(store_err)?;
  Ok(UPDATED)
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /districts/:districtId`
pub async fn delete<S>(
  State(store): State<Arc<S>>,
  Path(raw_id): Path<String>,
) -> Result<&'static str, ApiError>
where
  S: CaseStore,
{
  let district_id = parse_id("districtId", &raw_id)?;
  store.delete_district(district_id).await.map_err(store_err)?;
  Ok(REMOVED)
}

// ─── Details ──────────────────────────────────────────────────────────────────

/// `GET /districts/:districtId/details`
pub async fn details<S>(
  State(store): State<Arc<S>>,
  Path(raw_id): Path<String>,
) -> Result<Json<StateName>, ApiError>
where
  S: CaseStore,
{
  let district_id = parse_id("districtId", &raw_id)?;
  let name = store
    .district_state_name(district_id)
    .await
    .map_err(store_err)?;
  Ok(Json(name))
}
