//! Core engine for the cash flow dashboard.
//!
//! Everything downstream surfaces is derived here: the predefined field
//! catalog, aggregation over the flat field map, financial ratios and the
//! health score, user-defined custom items, the local durable copy, and
//! the remote record store contract.

pub mod catalog;
pub mod constants;
pub mod custom_items;
pub mod errors;
pub mod profile;
pub mod ratios;
pub mod statement;
pub mod storage;
pub mod sync;

pub use errors::{Error, Result};
