//! Boundary trait for the remote record store.

use async_trait::async_trait;

use super::sync_model::{DeleteOutcome, FinancialRecord};
use crate::errors::Result;

/// Find-by-email / upsert / list / delete contract.
///
/// Implementations must match emails case-insensitively and must enforce
/// at most one record per email: `upsert` updates in place when a record
/// already exists. A missing record on `find_by_email` is `Ok(None)`,
/// never an error.
#[async_trait]
pub trait RecordStoreTrait: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<FinancialRecord>>;

    async fn upsert(&self, record: &FinancialRecord) -> Result<()>;

    async fn list(&self) -> Result<Vec<FinancialRecord>>;

    async fn delete(&self, email: &str) -> Result<DeleteOutcome>;
}
