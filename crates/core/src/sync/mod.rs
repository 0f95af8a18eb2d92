//! Remote record store: the sync contract and its Airtable implementation.
//!
//! The record lifecycle is `Unsaved -> Saved -> Updated -> Deleted`. The
//! store enforces at most one record per email at the boundary; the engine
//! itself never coordinates concurrent writers, so last write wins.

mod airtable_store;
mod sync_model;
mod sync_service;
mod sync_traits;

pub use airtable_store::*;
pub use sync_model::*;
pub use sync_service::*;
pub use sync_traits::*;

#[cfg(test)]
mod sync_service_tests;
