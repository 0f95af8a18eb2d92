//! Pure aggregation functions over the field map.

use rust_decimal::Decimal;

use super::statement_model::{
    BalanceSheetSummary, FieldValues, IncomeStatementSummary, SubcategoryTotal,
};
use crate::catalog::{Category, FieldCatalog, Subcategory};
use crate::constants::{DISPLAY_DECIMAL_PRECISION, MONTHS_PER_YEAR};
use crate::custom_items::CustomItemRegistry;

/// Sum of the given keys, missing keys counting as zero.
pub fn sum_fields(values: &FieldValues, keys: &[&str]) -> Decimal {
    keys.iter().map(|key| values.get(key)).sum()
}

/// Sum of all custom items registered under a category.
pub fn sum_custom(values: &FieldValues, items: &CustomItemRegistry, category: Category) -> Decimal {
    items
        .items_for(category)
        .iter()
        .map(|item| values.get(&item.field))
        .sum()
}

/// Subtotal of one subcategory's predefined fields.
pub fn subtotal(values: &FieldValues, category: Category, subcategory: Subcategory) -> Decimal {
    sum_fields(values, FieldCatalog::fields_for(category, subcategory))
}

/// Total of a category: every subcategory subtotal plus its custom items.
pub fn category_total(
    values: &FieldValues,
    items: &CustomItemRegistry,
    category: Category,
) -> Decimal {
    let predefined: Decimal = FieldCatalog::subcategories_of(category)
        .iter()
        .map(|sub| subtotal(values, category, *sub))
        .sum();
    predefined + sum_custom(values, items, category)
}

/// Total assets minus total liabilities, rounded at the output boundary.
pub fn net_worth(values: &FieldValues, items: &CustomItemRegistry) -> Decimal {
    (category_total(values, items, Category::Assets)
        - category_total(values, items, Category::Liabilities))
    .round_dp(DISPLAY_DECIMAL_PRECISION)
}

/// Total monthly income minus total monthly expenses, rounded.
pub fn monthly_cash_flow(values: &FieldValues, items: &CustomItemRegistry) -> Decimal {
    (category_total(values, items, Category::Income)
        - category_total(values, items, Category::Expenses))
    .round_dp(DISPLAY_DECIMAL_PRECISION)
}

/// Project a monthly figure to a year.
pub fn annualize(monthly: Decimal) -> Decimal {
    monthly * Decimal::from(MONTHS_PER_YEAR)
}

fn subcategory_totals(values: &FieldValues, category: Category) -> Vec<SubcategoryTotal> {
    FieldCatalog::subcategories_of(category)
        .iter()
        .map(|sub| SubcategoryTotal {
            subcategory: sub.as_str().to_string(),
            total: subtotal(values, category, *sub),
        })
        .collect()
}

/// Build the balance-sheet summary in one pass.
pub fn balance_sheet(values: &FieldValues, items: &CustomItemRegistry) -> BalanceSheetSummary {
    let asset_subtotals = subcategory_totals(values, Category::Assets);
    let custom_assets = sum_custom(values, items, Category::Assets);
    let total_assets =
        asset_subtotals.iter().map(|s| s.total).sum::<Decimal>() + custom_assets;

    let liability_subtotals = subcategory_totals(values, Category::Liabilities);
    let custom_liabilities = sum_custom(values, items, Category::Liabilities);
    let total_liabilities =
        liability_subtotals.iter().map(|s| s.total).sum::<Decimal>() + custom_liabilities;

    BalanceSheetSummary {
        asset_subtotals,
        custom_assets,
        total_assets,
        liability_subtotals,
        custom_liabilities,
        total_liabilities,
        net_worth: (total_assets - total_liabilities).round_dp(DISPLAY_DECIMAL_PRECISION),
    }
}

/// Build the income-statement summary in one pass.
pub fn income_statement(
    values: &FieldValues,
    items: &CustomItemRegistry,
) -> IncomeStatementSummary {
    let income_subtotals = subcategory_totals(values, Category::Income);
    let custom_income = sum_custom(values, items, Category::Income);
    let total_income =
        income_subtotals.iter().map(|s| s.total).sum::<Decimal>() + custom_income;

    let expense_subtotals = subcategory_totals(values, Category::Expenses);
    let custom_expenses = sum_custom(values, items, Category::Expenses);
    let total_expenses =
        expense_subtotals.iter().map(|s| s.total).sum::<Decimal>() + custom_expenses;

    let monthly_cash_flow =
        (total_income - total_expenses).round_dp(DISPLAY_DECIMAL_PRECISION);

    IncomeStatementSummary {
        income_subtotals,
        custom_income,
        total_income,
        expense_subtotals,
        custom_expenses,
        total_expenses,
        monthly_cash_flow,
        annual_income: annualize(total_income),
        annual_expenses: annualize(total_expenses),
        annual_cash_flow: annualize(monthly_cash_flow),
    }
}
