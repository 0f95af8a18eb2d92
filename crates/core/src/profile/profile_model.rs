//! Identity, actor, and working-profile models.

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Category;
use crate::custom_items::{CustomItem, CustomItemRegistry};
use crate::errors::{Result, ValidationError};
use crate::ratios::RatioSet;
use crate::statement::{BalanceSheetSummary, FieldValues, IncomeStatementSummary};

lazy_static! {
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static pattern");
}

/// True when `email` has the shape `local@domain.tld` with no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// A person known to the record store: the key is the email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub email: String,
    pub name: String,
    /// Coach accounts get aggregate views and can save student records.
    #[serde(default)]
    pub is_coach: bool,
}

impl Identity {
    /// Build an identity, rejecting malformed email addresses.
    pub fn new(email: &str, name: &str) -> Result<Self> {
        let email = email.trim();
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail(email.to_string()).into());
        }
        Ok(Self {
            email: email.to_string(),
            name: name.trim().to_string(),
            is_coach: false,
        })
    }

    pub fn as_coach(mut self) -> Self {
        self.is_coach = true;
        self
    }

    /// Email lowered for case-insensitive matching against the store.
    pub fn normalized_email(&self) -> String {
        self.email.to_lowercase()
    }
}

/// Who is saving: a user working on their own record, or a coach saving
/// on behalf of a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "role")]
pub enum Actor {
    Individual { identity: Identity },
    Coach {
        identity: Identity,
        student_email: String,
    },
}

impl Actor {
    pub fn individual(identity: Identity) -> Self {
        Actor::Individual { identity }
    }

    /// A coach acting on a student's record. The student email is
    /// validated here so a typo fails before any network call.
    pub fn coach(identity: Identity, student_email: &str) -> Result<Self> {
        let student_email = student_email.trim();
        if !is_valid_email(student_email) {
            return Err(ValidationError::InvalidEmail(student_email.to_string()).into());
        }
        Ok(Actor::Coach {
            identity,
            student_email: student_email.to_string(),
        })
    }

    pub fn identity(&self) -> &Identity {
        match self {
            Actor::Individual { identity } | Actor::Coach { identity, .. } => identity,
        }
    }

    /// Email whose record this actor reads and writes.
    pub fn target_email(&self) -> &str {
        match self {
            Actor::Individual { identity } => &identity.email,
            Actor::Coach { student_email, .. } => student_email,
        }
    }

    /// Coach email to stamp on the saved record, when someone else's
    /// record is being written.
    pub fn saved_by_coach(&self) -> Option<&str> {
        match self {
            Actor::Individual { .. } => None,
            Actor::Coach { identity, .. } => Some(&identity.email),
        }
    }

    pub fn is_coach(&self) -> bool {
        matches!(self, Actor::Coach { .. })
    }
}

/// The full editable state for one person: amounts plus custom items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialProfile {
    pub values: FieldValues,
    pub custom_items: CustomItemRegistry,
}

impl FinancialProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.custom_items.is_empty()
    }

    pub fn set_value(&mut self, key: &str, value: Decimal) {
        self.values.set(key, value);
    }

    /// Set from raw text input, parse-or-zero.
    pub fn set_value_raw(&mut self, key: &str, raw: &str) {
        self.values.set_raw(key, raw);
    }

    /// Register a custom item and seed its amount.
    pub fn add_custom_item(
        &mut self,
        category: Category,
        name: &str,
        initial_value: Decimal,
    ) -> Result<CustomItem> {
        self.custom_items
            .add(&mut self.values, category, name, initial_value)
    }

    /// Drop a custom item and its amount entry.
    pub fn remove_custom_item(&mut self, category: Category, field: &str) {
        self.custom_items.remove(&mut self.values, category, field)
    }
}

/// Everything the dashboard shows, computed in one pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub balance_sheet: BalanceSheetSummary,
    pub income_statement: IncomeStatementSummary,
    pub ratios: RatioSet,
    pub health_score: i32,
}

impl DashboardSnapshot {
    pub fn net_worth(&self) -> Decimal {
        self.balance_sheet.net_worth
    }

    pub fn monthly_cash_flow(&self) -> Decimal {
        self.income_statement.monthly_cash_flow
    }
}
