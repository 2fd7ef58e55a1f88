//! Core records, validation and the store trait for Casebook.
//!
//! Casebook tracks pandemic case counts for administrative regions (states)
//! and their subdivisions (districts). This crate has no HTTP or database
//! dependencies; the storage backend and the transport adapter both depend
//! on it.

pub mod district;
pub mod error;
pub mod state;
pub mod store;

pub use error::{Error, ErrorKind, Result};
