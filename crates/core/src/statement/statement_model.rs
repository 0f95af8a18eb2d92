//! Field value map and aggregation summary models.

use std::collections::HashMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

/// Flat map from field key to amount.
///
/// Missing keys read as zero. Deserialization is deliberately permissive:
/// a value that is not a number (or a parseable numeric string) coerces to
/// zero instead of failing, so one bad cell never poisons a whole record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldValues {
    values: HashMap<String, Decimal>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Amount stored under `key`, or zero when absent.
    pub fn get(&self, key: &str) -> Decimal {
        self.values.get(key).copied().unwrap_or(Decimal::ZERO)
    }

    pub fn set(&mut self, key: &str, value: Decimal) {
        self.values.insert(key.to_string(), value);
    }

    /// Set from raw text input, applying the parse-or-zero policy.
    pub fn set_raw(&mut self, key: &str, raw: &str) {
        self.set(key, coerce_amount_str(raw));
    }

    pub fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Decimal)> {
        self.values.iter()
    }
}

impl FromIterator<(String, Decimal)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (String, Decimal)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Coerce an arbitrary JSON value to an amount, defaulting to zero.
pub(crate) fn coerce_amount(value: &serde_json::Value) -> Decimal {
    match value {
        serde_json::Value::Number(n) => {
            Decimal::from_str(&n.to_string()).unwrap_or(Decimal::ZERO)
        }
        serde_json::Value::String(s) => coerce_amount_str(s),
        _ => Decimal::ZERO,
    }
}

/// Coerce raw text to an amount, stripping currency formatting.
pub(crate) fn coerce_amount_str(raw: &str) -> Decimal {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | ' '))
        .collect();
    Decimal::from_str(&cleaned).unwrap_or(Decimal::ZERO)
}

impl<'de> Deserialize<'de> for FieldValues {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FieldValuesVisitor;

        impl<'de> Visitor<'de> for FieldValuesVisitor {
            type Value = FieldValues;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a map of field keys to amounts")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut values = HashMap::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, raw)) = access.next_entry::<String, serde_json::Value>()? {
                    values.insert(key, coerce_amount(&raw));
                }
                Ok(FieldValues { values })
            }
        }

        deserializer.deserialize_map(FieldValuesVisitor)
    }
}

/// Subtotal for one subcategory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubcategoryTotal {
    /// Subcategory key (e.g. "liquid", "short_term")
    pub subcategory: String,
    pub total: Decimal,
}

/// Balance-sheet side of the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheetSummary {
    /// Asset subtotals per subcategory, in catalog order
    pub asset_subtotals: Vec<SubcategoryTotal>,
    /// Custom asset items, summed
    pub custom_assets: Decimal,
    pub total_assets: Decimal,
    /// Liability subtotals per subcategory, in catalog order
    pub liability_subtotals: Vec<SubcategoryTotal>,
    /// Custom liability items, summed
    pub custom_liabilities: Decimal,
    pub total_liabilities: Decimal,
    /// Assets minus liabilities, rounded to 2 decimals
    pub net_worth: Decimal,
}

/// Income-statement side of the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStatementSummary {
    /// Income subtotals per subcategory, in catalog order
    pub income_subtotals: Vec<SubcategoryTotal>,
    pub custom_income: Decimal,
    pub total_income: Decimal,
    /// Expense subtotals per subcategory, in catalog order
    pub expense_subtotals: Vec<SubcategoryTotal>,
    pub custom_expenses: Decimal,
    pub total_expenses: Decimal,
    /// Income minus expenses, rounded to 2 decimals
    pub monthly_cash_flow: Decimal,
    pub annual_income: Decimal,
    pub annual_expenses: Decimal,
    pub annual_cash_flow: Decimal,
}
