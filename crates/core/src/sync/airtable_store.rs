//! Airtable-backed record store.
//!
//! One table, one row per email. Lookup uses `filterByFormula` with a
//! lowercased equality check, creation posts to the table, updates patch
//! by remote row id.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::sync_model::{
    decode_financial_data, encode_financial_data, DeleteOutcome, FinancialRecord,
};
use super::sync_traits::RecordStoreTrait;
use crate::errors::{Result, SyncError};

const AIRTABLE_API_URL: &str = "https://api.airtable.com/v0";

/// Column layout of the remote table.
#[derive(Debug, Default, Serialize, Deserialize)]
struct AirtableFields {
    #[serde(rename = "Email")]
    email: String,
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Last Updated", default)]
    last_updated: Option<DateTime<Utc>>,
    #[serde(rename = "Financial Data", default)]
    financial_data: Option<String>,
    #[serde(rename = "Net Worth", default)]
    net_worth: Option<Decimal>,
    #[serde(rename = "Monthly Cash Flow", default)]
    monthly_cash_flow: Option<Decimal>,
    #[serde(rename = "Source", default)]
    source: Option<String>,
    #[serde(rename = "Is Coach", default)]
    is_coach: bool,
    #[serde(rename = "Saved By Coach", default, skip_serializing_if = "Option::is_none")]
    saved_by_coach: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AirtableRow {
    id: String,
    fields: AirtableFields,
}

#[derive(Debug, Deserialize)]
struct AirtablePage {
    records: Vec<AirtableRow>,
    offset: Option<String>,
}

#[derive(Serialize)]
struct RowBody {
    fields: AirtableFields,
}

#[derive(Serialize)]
struct CreateBody {
    records: Vec<RowBody>,
}

pub struct AirtableStore {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl AirtableStore {
    pub fn new(base_id: &str, table_name: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: format!("{}/{}/{}", AIRTABLE_API_URL, base_id, table_name),
            api_key: api_key.to_string(),
        }
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(SyncError::RemoteApi(format!("{}: {}", status, body)).into())
    }

    /// Fetch the raw row for an email, with its remote id.
    async fn find_row(&self, email: &str) -> Result<Option<AirtableRow>> {
        let formula = format!(
            "LOWER({{Email}})='{}'",
            email.to_lowercase().replace('\'', "\\'")
        );
        let response = self
            .client
            .get(&self.api_url)
            .bearer_auth(&self.api_key)
            .query(&[("filterByFormula", formula.as_str())])
            .send()
            .await
            .map_err(SyncError::from)?;
        let page: AirtablePage = Self::check(response)
            .await?
            .json()
            .await
            .map_err(SyncError::from)?;
        Ok(page.records.into_iter().next())
    }

    fn to_record(fields: AirtableFields) -> Result<FinancialRecord> {
        let (values, custom_items) = match fields.financial_data.as_deref() {
            Some(raw) => decode_financial_data(raw)?,
            None => Default::default(),
        };
        Ok(FinancialRecord {
            email: fields.email,
            name: fields.name,
            last_updated: fields.last_updated.unwrap_or_else(Utc::now),
            values,
            custom_items,
            net_worth: fields.net_worth.unwrap_or_default(),
            monthly_cash_flow: fields.monthly_cash_flow.unwrap_or_default(),
            source: fields.source.unwrap_or_default(),
            is_coach: fields.is_coach,
            saved_by_coach: fields.saved_by_coach.filter(|s| !s.is_empty()),
        })
    }

    fn to_fields(record: &FinancialRecord) -> Result<AirtableFields> {
        Ok(AirtableFields {
            email: record.email.clone(),
            name: record.name.clone(),
            last_updated: Some(record.last_updated),
            financial_data: Some(encode_financial_data(&record.values, &record.custom_items)?),
            net_worth: Some(record.net_worth),
            monthly_cash_flow: Some(record.monthly_cash_flow),
            source: Some(record.source.clone()),
            is_coach: record.is_coach,
            saved_by_coach: record.saved_by_coach.clone(),
        })
    }
}

#[async_trait]
impl RecordStoreTrait for AirtableStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<FinancialRecord>> {
        match self.find_row(email).await? {
            Some(row) => Ok(Some(Self::to_record(row.fields)?)),
            None => Ok(None),
        }
    }

    async fn upsert(&self, record: &FinancialRecord) -> Result<()> {
        let fields = Self::to_fields(record)?;
        match self.find_row(&record.email).await? {
            Some(existing) => {
                debug!("Patching record {} for {}", existing.id, record.email);
                let response = self
                    .client
                    .patch(format!("{}/{}", self.api_url, existing.id))
                    .bearer_auth(&self.api_key)
                    .json(&RowBody { fields })
                    .send()
                    .await
                    .map_err(SyncError::from)?;
                Self::check(response).await?;
            }
            None => {
                debug!("Creating record for {}", record.email);
                let response = self
                    .client
                    .post(&self.api_url)
                    .bearer_auth(&self.api_key)
                    .json(&CreateBody {
                        records: vec![RowBody { fields }],
                    })
                    .send()
                    .await
                    .map_err(SyncError::from)?;
                Self::check(response).await?;
            }
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<FinancialRecord>> {
        let mut records = Vec::new();
        let mut offset: Option<String> = None;
        loop {
            let mut request = self.client.get(&self.api_url).bearer_auth(&self.api_key);
            if let Some(ref cursor) = offset {
                request = request.query(&[("offset", cursor.as_str())]);
            }
            let response = request.send().await.map_err(SyncError::from)?;
            let page: AirtablePage = Self::check(response)
                .await?
                .json()
                .await
                .map_err(SyncError::from)?;
            for row in page.records {
                records.push(Self::to_record(row.fields)?);
            }
            match page.offset {
                Some(cursor) => offset = Some(cursor),
                None => break,
            }
        }
        Ok(records)
    }

    async fn delete(&self, email: &str) -> Result<DeleteOutcome> {
        let Some(row) = self.find_row(email).await? else {
            return Ok(DeleteOutcome::NotFound);
        };
        let response = self
            .client
            .delete(format!("{}/{}", self.api_url, row.id))
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(SyncError::from)?;
        Self::check(response).await?;
        debug!("Deleted record {} for {}", row.id, email);
        Ok(DeleteOutcome::Deleted)
    }
}
