//! Unit tests for the aggregation engine.

use super::*;
use crate::catalog::{Category, Subcategory};
use crate::custom_items::CustomItemRegistry;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn values_from(pairs: &[(&str, Decimal)]) -> FieldValues {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), *v))
        .collect()
}

#[test]
fn test_empty_state_is_all_zero() {
    let values = FieldValues::new();
    let items = CustomItemRegistry::new();

    assert_eq!(net_worth(&values, &items), Decimal::ZERO);
    assert_eq!(monthly_cash_flow(&values, &items), Decimal::ZERO);
    for category in Category::ALL {
        assert_eq!(category_total(&values, &items, category), Decimal::ZERO);
    }
}

#[test]
fn test_balance_sheet_scenario() {
    // cash_on_hand=1000, personal_savings=500, primary_mortgage=2000
    let values = values_from(&[
        ("cash_on_hand", dec!(1000)),
        ("personal_savings", dec!(500)),
        ("primary_mortgage", dec!(2000)),
    ]);
    let items = CustomItemRegistry::new();

    assert_eq!(
        subtotal(&values, Category::Assets, Subcategory::Liquid),
        dec!(1500)
    );
    assert_eq!(
        category_total(&values, &items, Category::Liabilities),
        dec!(2000)
    );
    assert_eq!(net_worth(&values, &items), dec!(-500));
}

#[test]
fn test_income_statement_scenario() {
    // salary_wages=5000, mortgage_rent=1200, groceries=400
    let values = values_from(&[
        ("salary_wages", dec!(5000)),
        ("mortgage_rent", dec!(1200)),
        ("groceries", dec!(400)),
    ]);
    let items = CustomItemRegistry::new();

    let summary = income_statement(&values, &items);
    assert_eq!(summary.total_income, dec!(5000));
    assert_eq!(summary.total_expenses, dec!(1600));
    assert_eq!(summary.monthly_cash_flow, dec!(3400));
    assert_eq!(summary.annual_cash_flow, dec!(40800));
}

#[test]
fn test_aggregation_is_idempotent() {
    let values = values_from(&[
        ("stocks", dec!(12345.67)),
        ("credit_card_1", dec!(890.12)),
    ]);
    let items = CustomItemRegistry::new();

    let first = net_worth(&values, &items);
    let second = net_worth(&values, &items);
    assert_eq!(first, second);
    assert_eq!(first, dec!(11455.55));
}

#[test]
fn test_additivity_over_disjoint_partitions() {
    let left = values_from(&[("cash_on_hand", dec!(100)), ("stocks", dec!(200))]);
    let right = values_from(&[("bonds", dec!(300)), ("auto_1", dec!(400))]);
    let union: FieldValues = left
        .iter()
        .chain(right.iter())
        .map(|(k, v)| (k.clone(), *v))
        .collect();
    let items = CustomItemRegistry::new();

    assert_eq!(
        category_total(&union, &items, Category::Assets),
        category_total(&left, &items, Category::Assets)
            + category_total(&right, &items, Category::Assets)
    );
}

#[test]
fn test_custom_item_round_trip_law() {
    let mut values = values_from(&[("cash_on_hand", dec!(1000))]);
    let mut items = CustomItemRegistry::new();
    let before = category_total(&values, &items, Category::Assets);

    let item = items
        .add(&mut values, Category::Assets, "Coin Collection", dec!(300))
        .unwrap();
    assert_eq!(
        category_total(&values, &items, Category::Assets),
        before + dec!(300)
    );

    items.remove(&mut values, Category::Assets, &item.field);
    assert_eq!(category_total(&values, &items, Category::Assets), before);
    assert!(!values.contains(&item.field));
}

#[test]
fn test_custom_items_only_count_toward_their_category() {
    let mut values = FieldValues::new();
    let mut items = CustomItemRegistry::new();
    items
        .add(&mut values, Category::Income, "Side gig", dec!(250))
        .unwrap();

    assert_eq!(category_total(&values, &items, Category::Income), dec!(250));
    assert_eq!(category_total(&values, &items, Category::Assets), Decimal::ZERO);
    assert_eq!(sum_custom(&values, &items, Category::Expenses), Decimal::ZERO);
}

#[test]
fn test_unrounded_internally_rounded_at_boundary() {
    let values = values_from(&[
        ("salary_wages", dec!(0.333)),
        ("groceries", dec!(0.111)),
    ]);
    let items = CustomItemRegistry::new();

    // 0.333 - 0.111 = 0.222, rounds to 0.22 at the boundary
    assert_eq!(monthly_cash_flow(&values, &items), dec!(0.22));
}

#[test]
fn test_deserialization_coerces_bad_values_to_zero() {
    let json = r#"{"cash_on_hand": 1000, "stocks": "2,500.50", "bonds": "garbage", "ira": null}"#;
    let values: FieldValues = serde_json::from_str(json).unwrap();

    assert_eq!(values.get("cash_on_hand"), dec!(1000));
    assert_eq!(values.get("stocks"), dec!(2500.50));
    assert_eq!(values.get("bonds"), Decimal::ZERO);
    assert_eq!(values.get("ira"), Decimal::ZERO);
    assert_eq!(values.get("missing_entirely"), Decimal::ZERO);
}

#[test]
fn test_set_raw_parse_or_zero() {
    let mut values = FieldValues::new();
    values.set_raw("cash_on_hand", "$1,234.56");
    values.set_raw("stocks", "not a number");

    assert_eq!(values.get("cash_on_hand"), dec!(1234.56));
    assert_eq!(values.get("stocks"), Decimal::ZERO);
}

#[test]
fn test_annualize() {
    assert_eq!(annualize(dec!(100)), dec!(1200));
    assert_eq!(annualize(dec!(-50.5)), dec!(-606));
    assert_eq!(annualize(Decimal::ZERO), Decimal::ZERO);
}
