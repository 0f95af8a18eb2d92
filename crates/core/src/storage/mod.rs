//! Local durable storage for the working profile.

mod local_store;

pub use local_store::*;
