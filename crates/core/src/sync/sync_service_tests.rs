//! Unit tests for the sync service against an in-memory store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal_macros::dec;
use tokio::sync::Mutex;

use super::*;
use crate::catalog::Category;
use crate::errors::Result;
use crate::profile::{Actor, FinancialProfile, Identity};

/// Store keyed by lowercased email, mimicking the one-row-per-email
/// invariant of the remote table.
#[derive(Default)]
struct MemoryRecordStore {
    records: Mutex<HashMap<String, FinancialRecord>>,
}

#[async_trait]
impl RecordStoreTrait for MemoryRecordStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<FinancialRecord>> {
        let records = self.records.lock().await;
        Ok(records.get(&email.to_lowercase()).cloned())
    }

    async fn upsert(&self, record: &FinancialRecord) -> Result<()> {
        let mut records = self.records.lock().await;
        records.insert(record.email.to_lowercase(), record.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<FinancialRecord>> {
        let records = self.records.lock().await;
        Ok(records.values().cloned().collect())
    }

    async fn delete(&self, email: &str) -> Result<DeleteOutcome> {
        let mut records = self.records.lock().await;
        match records.remove(&email.to_lowercase()) {
            Some(_) => Ok(DeleteOutcome::Deleted),
            None => Ok(DeleteOutcome::NotFound),
        }
    }
}

fn service() -> (SyncService, Arc<MemoryRecordStore>) {
    let store = Arc::new(MemoryRecordStore::default());
    (SyncService::new(store.clone()), store)
}

fn sample_profile() -> FinancialProfile {
    let mut profile = FinancialProfile::new();
    profile.values.set("cash_on_hand", dec!(1000));
    profile.values.set("personal_savings", dec!(500));
    profile.values.set("primary_mortgage", dec!(2000));
    profile
        .add_custom_item(Category::Assets, "Coin Collection", dec!(300))
        .unwrap();
    profile
}

fn jane() -> Actor {
    Actor::individual(Identity::new("jane@example.com", "Jane").unwrap())
}

#[tokio::test]
async fn test_load_missing_record_is_new_user() {
    let (service, _) = service();
    assert!(service.load("x@y.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_save_then_load_round_trips_profile() {
    let (service, _) = service();
    let profile = sample_profile();

    let record = service.save(&jane(), &profile).await.unwrap();
    assert_eq!(record.net_worth, dec!(-200));
    assert_eq!(record.monthly_cash_flow, dec!(0));

    let loaded = service.load("jane@example.com").await.unwrap().unwrap();
    assert_eq!(loaded, profile);
}

#[tokio::test]
async fn test_find_is_case_insensitive() {
    let (service, _) = service();
    service.save(&jane(), &sample_profile()).await.unwrap();

    assert!(service.load("JANE@Example.COM").await.unwrap().is_some());
}

#[tokio::test]
async fn test_repeated_saves_keep_one_record() {
    let (service, _) = service();
    let mut profile = sample_profile();

    service.save(&jane(), &profile).await.unwrap();
    profile.values.set("cash_on_hand", dec!(9999));
    service.save(&jane(), &profile).await.unwrap();

    let records = service.list_records().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].values.get("cash_on_hand"), dec!(9999));
}

#[tokio::test]
async fn test_coach_save_targets_student_record() {
    let (service, _) = service();
    let coach = Actor::coach(
        Identity::new("coach@example.com", "Coach").unwrap(),
        "student@example.com",
    )
    .unwrap();

    let record = service.save(&coach, &sample_profile()).await.unwrap();
    assert_eq!(record.email, "student@example.com");
    assert_eq!(record.name, "student");
    assert_eq!(record.saved_by_coach.as_deref(), Some("coach@example.com"));

    assert!(service.load("student@example.com").await.unwrap().is_some());
    assert!(service.load("coach@example.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_outcomes() {
    let (service, _) = service();
    service.save(&jane(), &sample_profile()).await.unwrap();

    assert_eq!(
        service.delete("jane@example.com").await.unwrap(),
        DeleteOutcome::Deleted
    );
    assert_eq!(
        service.delete("jane@example.com").await.unwrap(),
        DeleteOutcome::NotFound
    );
    assert!(service.load("jane@example.com").await.unwrap().is_none());
}

#[test]
fn test_financial_data_round_trip() {
    let profile = sample_profile();
    let encoded = encode_financial_data(&profile.values, &profile.custom_items).unwrap();
    let (values, custom_items) = decode_financial_data(&encoded).unwrap();

    assert_eq!(values, profile.values);
    assert_eq!(custom_items, profile.custom_items);
}

#[test]
fn test_decode_empty_blob() {
    let (values, items) = decode_financial_data("").unwrap();
    assert!(values.is_empty());
    assert!(items.is_empty());
}

#[test]
fn test_decode_legacy_bare_map() {
    let raw = r#"{"cash_on_hand": 250, "custom_assets_a1b2": "300", "junk": null}"#;
    let (values, items) = decode_financial_data(raw).unwrap();

    assert_eq!(values.get("cash_on_hand"), dec!(250));
    assert_eq!(values.get("custom_assets_a1b2"), dec!(300));
    assert_eq!(values.get("junk"), dec!(0));

    let recovered = items.items_for(Category::Assets);
    assert_eq!(recovered.len(), 1);
    assert_eq!(recovered[0].field, "custom_assets_a1b2");
}

#[test]
fn test_coach_flag_stays_on_own_record_only() {
    let (service, _) = service();
    let coach_identity = Identity::new("coach@example.com", "Coach").unwrap().as_coach();

    let own = service.build_record(
        &Actor::individual(coach_identity.clone()),
        &FinancialProfile::new(),
    );
    assert!(own.is_coach);
    assert!(own.saved_by_coach.is_none());

    let for_student = service.build_record(
        &Actor::coach(coach_identity, "student@example.com").unwrap(),
        &FinancialProfile::new(),
    );
    assert!(!for_student.is_coach);
    assert_eq!(for_student.saved_by_coach.as_deref(), Some("coach@example.com"));
}

#[test]
fn test_build_record_fills_name_from_email() {
    let (service, _) = service();
    let anonymous = Actor::individual(Identity::new("anon@example.com", "").unwrap());
    let record = service.build_record(&anonymous, &FinancialProfile::new());
    assert_eq!(record.name, "anon");
    assert_eq!(record.source, "app");
    assert!(!record.is_coach);
}
