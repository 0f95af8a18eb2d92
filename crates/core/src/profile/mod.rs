//! User identity, the working profile, and dashboard snapshots.

mod profile_model;
mod profile_service;

pub use profile_model::*;
pub use profile_service::*;
