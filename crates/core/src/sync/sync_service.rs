//! Sync orchestration: building records, loading them back, autosave.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use log::{debug, warn};
use tokio::sync::RwLock;

use super::sync_model::{DeleteOutcome, FinancialRecord};
use super::sync_traits::RecordStoreTrait;
use crate::constants::{AUTO_SAVE_INTERVAL_SECS, DEFAULT_RECORD_SOURCE};
use crate::errors::Result;
use crate::profile::{Actor, FinancialProfile};
use crate::statement;

/// Fallback display name: the part of the email before the `@`.
fn name_from_email(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_string()
}

/// Drives the record store on behalf of an actor.
///
/// Sync failure is never allowed to block local edits: `save` errors are
/// returned for the caller to surface as a warning, and the autosave loop
/// logs and keeps going.
pub struct SyncService {
    store: Arc<dyn RecordStoreTrait>,
}

impl SyncService {
    pub fn new(store: Arc<dyn RecordStoreTrait>) -> Self {
        Self { store }
    }

    /// Build the remote record for this actor and profile.
    ///
    /// Derived totals are recomputed here so the stored summary always
    /// matches the stored field set.
    pub fn build_record(&self, actor: &Actor, profile: &FinancialProfile) -> FinancialRecord {
        let net_worth = statement::net_worth(&profile.values, &profile.custom_items);
        let monthly_cash_flow =
            statement::monthly_cash_flow(&profile.values, &profile.custom_items);

        // A coach write targets the student's record, so the student row
        // never inherits the coach flag.
        let (name, is_coach) = match actor {
            Actor::Individual { identity } => {
                let name = if identity.name.is_empty() {
                    name_from_email(&identity.email)
                } else {
                    identity.name.clone()
                };
                (name, identity.is_coach)
            }
            Actor::Coach { student_email, .. } => (name_from_email(student_email), false),
        };

        FinancialRecord {
            email: actor.target_email().to_string(),
            name,
            last_updated: Utc::now(),
            values: profile.values.clone(),
            custom_items: profile.custom_items.clone(),
            net_worth,
            monthly_cash_flow,
            source: DEFAULT_RECORD_SOURCE.to_string(),
            is_coach,
            saved_by_coach: actor.saved_by_coach().map(str::to_string),
        }
    }

    /// Upsert the actor's target record.
    pub async fn save(&self, actor: &Actor, profile: &FinancialProfile) -> Result<FinancialRecord> {
        let record = self.build_record(actor, profile);
        self.store.upsert(&record).await?;
        debug!("Saved record for {}", record.email);
        Ok(record)
    }

    /// Fetch a profile by email. `Ok(None)` means a new user: the caller
    /// starts from an empty profile.
    pub async fn load(&self, email: &str) -> Result<Option<FinancialProfile>> {
        let record = self.store.find_by_email(email).await?;
        Ok(record.map(|record| FinancialProfile {
            values: record.values,
            custom_items: record.custom_items,
        }))
    }

    /// All records, for coach and aggregate views.
    pub async fn list_records(&self) -> Result<Vec<FinancialRecord>> {
        self.store.list().await
    }

    pub async fn delete(&self, email: &str) -> Result<DeleteOutcome> {
        self.store.delete(email).await
    }

    /// Periodic save loop. Runs until the task is dropped; a failed save
    /// is logged as a warning and the next tick tries again.
    pub async fn run_autosave(
        self: Arc<Self>,
        actor: Actor,
        profile: Arc<RwLock<FinancialProfile>>,
    ) {
        let mut interval =
            tokio::time::interval(Duration::from_secs(AUTO_SAVE_INTERVAL_SECS));
        // The first tick fires immediately; skip it so a freshly opened
        // profile is not pushed before the user has touched anything.
        interval.tick().await;
        loop {
            interval.tick().await;
            let current = profile.read().await.clone();
            if let Err(err) = self.save(&actor, &current).await {
                warn!("Autosave for {} failed: {}", actor.target_email(), err);
            }
        }
    }
}
