//! JSON REST API for Casebook.
//!
//! Exposes an axum [`Router`] backed by any [`casebook_core::store::CaseStore`].
//! Tracing layers and path normalisation are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = casebook_api::api_router(Arc::new(store));
//! ```

pub mod districts;
pub mod error;
pub mod states;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use casebook_core::store::CaseStore;

pub use error::ApiError;

/// Build the API router for `store`.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: CaseStore + 'static,
{
  Router::new()
    // States
    .route("/states", get(states::list::<S>))
    .route("/states/{state_id}", get(states::get_one::<S>))
    .route("/states/{state_id}/stats", get(states::stats::<S>))
    // Districts
    .route("/districts", post(districts::create::<S>))
    .route(
      "/districts/{district_id}",
      get(districts::get_one::<S>)
        .put(districts::update::<S>)
        .delete(districts::delete::<S>),
    )
    .route("/districts/{district_id}/details", get(districts::details::<S>))
    .with_state(store)
}
