//! Field values and the aggregation engine.
//!
//! This module turns the flat field map into categorized subtotals, totals,
//! net worth, and cash flow. Everything here is a pure function of its
//! inputs: no side effects, no errors, malformed numerics degrade to zero.

mod aggregation_service;
mod statement_model;

pub use aggregation_service::*;
pub use statement_model::*;

#[cfg(test)]
mod aggregation_service_tests;
