//! User-defined line items.
//!
//! Custom items extend a category with extra fields at runtime. Each item
//! owns a generated field key that is folded into the aggregation sums
//! exactly like a predefined field.

mod custom_items_model;
mod custom_items_service;

pub use custom_items_model::*;
pub use custom_items_service::*;
