//! Static registry of predefined financial fields.
//!
//! Every line item the dashboard knows about lives here, grouped by category
//! and subcategory. The catalog is pure data: lookups never fail, unknown
//! combinations return an empty list.

mod catalog_model;

pub use catalog_model::*;
