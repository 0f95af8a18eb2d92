//! Property tests for aggregation, ratios, and scoring.

use cashflow_core::catalog::{Category, FieldCatalog};
use cashflow_core::profile::{snapshot, FinancialProfile};
use cashflow_core::ratios::{
    self, ExtendedScoreInputs, ScorePolicy,
};
use cashflow_core::statement;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Amounts as cents, spanning well past realistic magnitudes.
fn amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000_000i64..1_000_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn profile_entries() -> impl Strategy<Value = Vec<(usize, Decimal)>> {
    prop::collection::vec((0usize..20, amount()), 0..12)
}

fn build_profile(entries: Vec<(usize, Decimal)>) -> FinancialProfile {
    let keys: Vec<&str> = Category::ALL
        .iter()
        .flat_map(|c| FieldCatalog::all_fields_for(*c))
        .collect();
    let mut profile = FinancialProfile::new();
    for (index, value) in entries {
        profile.values.set(keys[index % keys.len()], value);
    }
    profile
}

proptest! {
    #[test]
    fn standard_score_stays_in_bounds(
        dta in amount(),
        liquidity in amount(),
        savings in amount(),
    ) {
        let score = ratios::standard_health_score(dta, liquidity, savings);
        prop_assert!((0..=100).contains(&score));
    }

    #[test]
    fn extended_score_stays_in_bounds(
        dti in amount(),
        savings in amount(),
        months in amount(),
        housing in amount(),
        net_worth in amount(),
    ) {
        let score = ratios::extended_health_score(&ExtendedScoreInputs {
            debt_to_income_ratio: dti,
            savings_rate: savings,
            emergency_fund_months: months,
            housing_ratio: housing,
            net_worth,
        });
        prop_assert!((0..=100).contains(&score));
    }

    #[test]
    fn nonpositive_denominators_always_yield_zero(
        numerator in amount(),
        denominator in (-1_000_000_000_000i64..=0).prop_map(|c| Decimal::new(c, 2)),
    ) {
        prop_assert_eq!(ratios::debt_to_asset_ratio(numerator, denominator), Decimal::ZERO);
        prop_assert_eq!(ratios::liquidity_ratio(numerator, denominator), Decimal::ZERO);
        prop_assert_eq!(ratios::debt_to_income_ratio(numerator, denominator), Decimal::ZERO);
        prop_assert_eq!(ratios::savings_rate(numerator, denominator), Decimal::ZERO);
        prop_assert_eq!(ratios::emergency_fund_months(numerator, denominator), Decimal::ZERO);
        prop_assert_eq!(ratios::housing_ratio(numerator, denominator), Decimal::ZERO);
    }

    #[test]
    fn net_worth_is_assets_minus_liabilities(entries in profile_entries()) {
        let profile = build_profile(entries);
        let assets = statement::category_total(
            &profile.values, &profile.custom_items, Category::Assets);
        let liabilities = statement::category_total(
            &profile.values, &profile.custom_items, Category::Liabilities);
        let net_worth = statement::net_worth(&profile.values, &profile.custom_items);
        prop_assert_eq!(net_worth, (assets - liabilities).round_dp(2));
    }

    #[test]
    fn category_total_is_sum_of_subtotals(entries in profile_entries()) {
        let profile = build_profile(entries);
        for category in Category::ALL {
            let from_subtotals: Decimal = FieldCatalog::subcategories_of(category)
                .iter()
                .map(|sub| statement::subtotal(&profile.values, category, *sub))
                .sum();
            let total = statement::category_total(
                &profile.values, &profile.custom_items, category);
            prop_assert_eq!(total, from_subtotals);
        }
    }

    #[test]
    fn aggregation_is_idempotent(entries in profile_entries()) {
        let profile = build_profile(entries);
        let first = statement::net_worth(&profile.values, &profile.custom_items);
        let second = statement::net_worth(&profile.values, &profile.custom_items);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn custom_item_add_remove_restores_total(
        entries in profile_entries(),
        value in amount(),
    ) {
        let mut profile = build_profile(entries);
        let before = statement::category_total(
            &profile.values, &profile.custom_items, Category::Assets);

        let item = profile
            .add_custom_item(Category::Assets, "Collection", value)
            .unwrap();
        let with_item = statement::category_total(
            &profile.values, &profile.custom_items, Category::Assets);
        prop_assert_eq!(with_item, before + value);

        profile.remove_custom_item(Category::Assets, &item.field);
        let after = statement::category_total(
            &profile.values, &profile.custom_items, Category::Assets);
        prop_assert_eq!(after, before);
    }

    #[test]
    fn snapshot_score_is_bounded_under_both_policies(entries in profile_entries()) {
        let profile = build_profile(entries);
        for policy in [ScorePolicy::Standard, ScorePolicy::Extended] {
            let snap = snapshot(&profile, policy);
            prop_assert!((0..=100).contains(&snap.health_score));
        }
    }
}
