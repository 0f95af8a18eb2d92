//! Financial ratios and the health score.
//!
//! Ratios are dimensionless percentages derived from aggregation totals.
//! All divisions are guarded: a zero or negative denominator yields zero,
//! never an error or a non-finite value.

mod ratios_model;
mod ratios_service;

pub use ratios_model::*;
pub use ratios_service::*;
