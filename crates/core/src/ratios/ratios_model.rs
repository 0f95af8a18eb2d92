//! Ratio and score domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All derived ratios for one snapshot, as percentages except
/// `emergency_fund_months`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatioSet {
    /// Total liabilities over total assets
    pub debt_to_asset_ratio: Decimal,
    /// Liquid assets over total assets
    pub liquidity_ratio: Decimal,
    /// Total liabilities over annualized income
    pub debt_to_income_ratio: Decimal,
    /// Monthly cash flow over monthly income
    pub savings_rate: Decimal,
    /// Liquid assets over monthly expenses, in months
    pub emergency_fund_months: Decimal,
    /// Housing expenses over monthly income
    pub housing_ratio: Decimal,
}

/// Urgency tier for a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecommendationPriority {
    High,
    Medium,
}

/// Actionable guidance produced when a ratio falls outside its healthy
/// band. Pure data; the thresholds live in the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub priority: RecommendationPriority,
    /// Stable grouping key ("debt", "savings", "emergency", "housing").
    pub category: String,
    pub title: String,
    pub description: String,
    /// Human-readable healthy band the user should aim for.
    pub target: String,
}

/// Which scoring rule set to apply.
///
/// The two policies use different inputs and different additive constants;
/// they are alternatives, never blended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScorePolicy {
    /// Debt-to-asset, liquidity, and savings-rate rules.
    #[default]
    Standard,
    /// Richer rule set folding in debt-to-income, emergency fund
    /// coverage, housing ratio, and net worth.
    Extended,
}
