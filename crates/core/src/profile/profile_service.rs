//! Snapshot computation: recompute everything from the raw field map.

use super::profile_model::{DashboardSnapshot, FinancialProfile};
use crate::catalog::{Category, Subcategory};
use crate::ratios::{self, ScorePolicy};
use crate::statement;

/// Recompute the full dashboard from the profile.
///
/// There is no incremental path: every edit re-derives every figure from
/// the field map, so displayed totals can never drift from the inputs.
/// A profile with no data at all scores 100.
pub fn snapshot(profile: &FinancialProfile, policy: ScorePolicy) -> DashboardSnapshot {
    let balance_sheet = statement::balance_sheet(&profile.values, &profile.custom_items);
    let income_statement = statement::income_statement(&profile.values, &profile.custom_items);

    let liquid_assets = statement::subtotal(&profile.values, Category::Assets, Subcategory::Liquid);
    let housing_expenses =
        statement::subtotal(&profile.values, Category::Expenses, Subcategory::Housing);

    let ratios = ratios::derive_ratios(
        balance_sheet.total_assets,
        liquid_assets,
        balance_sheet.total_liabilities,
        income_statement.total_income,
        income_statement.total_expenses,
        housing_expenses,
        income_statement.monthly_cash_flow,
    );

    let health_score = if profile.is_empty() {
        100
    } else {
        ratios::health_score(policy, &ratios, balance_sheet.net_worth)
    };

    DashboardSnapshot {
        balance_sheet,
        income_statement,
        ratios,
        health_score,
    }
}

impl FinancialProfile {
    pub fn snapshot(&self, policy: ScorePolicy) -> DashboardSnapshot {
        snapshot(self, policy)
    }
}
