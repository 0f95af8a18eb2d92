//! Record shapes exchanged with the remote store.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::custom_items::{field_category, CustomItem, CustomItemRegistry};
use crate::errors::{Result, SyncError};
use crate::statement::FieldValues;

/// One person's saved state as the remote store sees it.
///
/// `net_worth` and `monthly_cash_flow` are derived figures stored
/// alongside the raw data so list consumers never have to re-aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRecord {
    pub email: String,
    pub name: String,
    pub last_updated: DateTime<Utc>,
    pub values: FieldValues,
    pub custom_items: CustomItemRegistry,
    pub net_worth: Decimal,
    pub monthly_cash_flow: Decimal,
    pub source: String,
    pub is_coach: bool,
    pub saved_by_coach: Option<String>,
}

/// Result of a delete call. Deleting an absent record is reported, not
/// raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

/// Envelope packed into the remote record's single data column.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FinancialData {
    fields: FieldValues,
    #[serde(default)]
    custom_items: Vec<CustomItem>,
}

/// Pack the field map and custom items into one opaque JSON string.
pub fn encode_financial_data(
    values: &FieldValues,
    custom_items: &CustomItemRegistry,
) -> Result<String> {
    let envelope = FinancialData {
        fields: values.clone(),
        custom_items: custom_items.iter().cloned().collect(),
    };
    let json = serde_json::to_string(&envelope).map_err(SyncError::from)?;
    Ok(json)
}

/// Unpack a data column written by [`encode_financial_data`].
///
/// Older clients stored a bare field map with no item metadata. For those
/// blobs the custom items are rebuilt from the `custom_<category>_` key
/// prefixes, with the field key doubling as the display name.
pub fn decode_financial_data(raw: &str) -> Result<(FieldValues, CustomItemRegistry)> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok((FieldValues::new(), CustomItemRegistry::new()));
    }

    let value: serde_json::Value = serde_json::from_str(raw).map_err(SyncError::from)?;
    if value.get("fields").is_some() {
        let envelope: FinancialData = serde_json::from_value(value).map_err(SyncError::from)?;
        return Ok((
            envelope.fields,
            CustomItemRegistry::from_items(envelope.custom_items),
        ));
    }

    // Legacy bare map
    let values: FieldValues = serde_json::from_value(value).map_err(SyncError::from)?;
    let items = values
        .iter()
        .filter_map(|(key, _)| {
            field_category(key).map(|category| CustomItem {
                name: key.clone(),
                field: key.clone(),
                category,
            })
        })
        .collect::<Vec<_>>();
    Ok((values, CustomItemRegistry::from_items(items)))
}
