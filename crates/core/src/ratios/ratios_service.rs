//! Ratio derivation and health scoring.

use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use super::ratios_model::{Recommendation, RecommendationPriority, RatioSet, ScorePolicy};
use crate::constants::MONTHS_PER_YEAR;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Guarded percentage: `numerator / denominator * 100`, zero when the
/// denominator is not strictly positive.
fn percent_of(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator > Decimal::ZERO {
        numerator / denominator * HUNDRED
    } else {
        Decimal::ZERO
    }
}

pub fn debt_to_asset_ratio(total_liabilities: Decimal, total_assets: Decimal) -> Decimal {
    percent_of(total_liabilities, total_assets)
}

pub fn liquidity_ratio(liquid_assets: Decimal, total_assets: Decimal) -> Decimal {
    percent_of(liquid_assets, total_assets)
}

/// Liabilities against a full year of income.
pub fn debt_to_income_ratio(total_liabilities: Decimal, monthly_income: Decimal) -> Decimal {
    percent_of(
        total_liabilities,
        monthly_income * Decimal::from(MONTHS_PER_YEAR),
    )
}

pub fn savings_rate(monthly_cash_flow: Decimal, monthly_income: Decimal) -> Decimal {
    percent_of(monthly_cash_flow, monthly_income)
}

/// How many months of expenses the liquid assets cover.
pub fn emergency_fund_months(liquid_assets: Decimal, monthly_expenses: Decimal) -> Decimal {
    if monthly_expenses > Decimal::ZERO {
        liquid_assets / monthly_expenses
    } else {
        Decimal::ZERO
    }
}

pub fn housing_ratio(housing_expenses: Decimal, monthly_income: Decimal) -> Decimal {
    percent_of(housing_expenses, monthly_income)
}

/// Inputs for the extended scoring policy.
#[derive(Debug, Clone, Default)]
pub struct ExtendedScoreInputs {
    pub debt_to_income_ratio: Decimal,
    pub savings_rate: Decimal,
    pub emergency_fund_months: Decimal,
    pub housing_ratio: Decimal,
    pub net_worth: Decimal,
}

fn clamp_score(score: Decimal) -> i32 {
    let rounded = score.round().to_i32().unwrap_or(0);
    rounded.clamp(0, 100)
}

/// Standard health score: starts at 100, applies the debt-to-asset,
/// liquidity, and savings-rate adjustments in order, then rounds and
/// clamps to [0, 100].
pub fn standard_health_score(
    debt_to_asset_ratio: Decimal,
    liquidity_ratio: Decimal,
    savings_rate: Decimal,
) -> i32 {
    let mut score = HUNDRED;

    if debt_to_asset_ratio > Decimal::from(50) {
        score -= Decimal::from(20);
    } else if debt_to_asset_ratio > Decimal::from(30) {
        score -= Decimal::from(10);
    }

    if liquidity_ratio < Decimal::from(10) {
        score -= Decimal::from(15);
    } else if liquidity_ratio > Decimal::from(30) {
        score += Decimal::from(10);
    }

    if savings_rate < Decimal::ZERO {
        score -= Decimal::from(25);
    } else if savings_rate > Decimal::from(20) {
        score += Decimal::from(15);
    } else if savings_rate > Decimal::from(10) {
        score += Decimal::from(10);
    }

    clamp_score(score)
}

/// Extended health score: folds in debt-to-income, emergency fund
/// coverage, housing ratio, and net worth, with its own penalty table.
pub fn extended_health_score(inputs: &ExtendedScoreInputs) -> i32 {
    let mut score = HUNDRED;

    if inputs.debt_to_income_ratio > Decimal::from(50) {
        score -= Decimal::from(30);
    } else if inputs.debt_to_income_ratio > Decimal::from(36) {
        score -= Decimal::from(20);
    } else if inputs.debt_to_income_ratio > Decimal::from(20) {
        score -= Decimal::from(10);
    }

    if inputs.savings_rate < Decimal::ZERO {
        score -= Decimal::from(25);
    } else if inputs.savings_rate < Decimal::from(10) {
        score -= Decimal::from(15);
    } else if inputs.savings_rate >= Decimal::from(20) {
        score += Decimal::from(10);
    }

    if inputs.emergency_fund_months < Decimal::ONE {
        score -= Decimal::from(20);
    } else if inputs.emergency_fund_months < Decimal::from(3) {
        score -= Decimal::from(15);
    } else if inputs.emergency_fund_months < Decimal::from(6) {
        score -= Decimal::from(5);
    }

    if inputs.housing_ratio > Decimal::from(40) {
        score -= Decimal::from(15);
    } else if inputs.housing_ratio > Decimal::from(28) {
        score -= Decimal::from(10);
    }

    if inputs.net_worth < Decimal::ZERO {
        score -= Decimal::from(10);
    } else if inputs.net_worth > Decimal::from(100_000) {
        score += Decimal::from(10);
    } else if inputs.net_worth > Decimal::from(50_000) {
        score += Decimal::from(5);
    }

    clamp_score(score)
}

/// Score a ratio set under the chosen policy.
pub fn health_score(policy: ScorePolicy, ratios: &RatioSet, net_worth: Decimal) -> i32 {
    match policy {
        ScorePolicy::Standard => standard_health_score(
            ratios.debt_to_asset_ratio,
            ratios.liquidity_ratio,
            ratios.savings_rate,
        ),
        ScorePolicy::Extended => extended_health_score(&ExtendedScoreInputs {
            debt_to_income_ratio: ratios.debt_to_income_ratio,
            savings_rate: ratios.savings_rate,
            emergency_fund_months: ratios.emergency_fund_months,
            housing_ratio: ratios.housing_ratio,
            net_worth,
        }),
    }
}

/// Map out-of-band ratios to actionable recommendations.
///
/// Thresholds are the conservative edges of the score tables: debt
/// service above 36% of income, savings below 10%, less than six months
/// of expenses covered, housing above 28% of income.
pub fn recommendations(ratios: &RatioSet) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    if ratios.debt_to_income_ratio > Decimal::from(36) {
        recs.push(Recommendation {
            priority: RecommendationPriority::High,
            category: "debt".to_string(),
            title: "Reduce Debt-to-Income Ratio".to_string(),
            description: "Your debt payments are consuming too much of your income. \
                          Consider debt consolidation or aggressive debt payoff strategies."
                .to_string(),
            target: "36% or less".to_string(),
        });
    }

    if ratios.savings_rate < Decimal::from(10) {
        recs.push(Recommendation {
            priority: RecommendationPriority::High,
            category: "savings".to_string(),
            title: "Increase Savings Rate".to_string(),
            description: "Aim to save at least 10-20% of your income. Review your \
                          expenses and identify areas to cut back."
                .to_string(),
            target: "20% or more".to_string(),
        });
    }

    if ratios.emergency_fund_months < Decimal::from(6) {
        recs.push(Recommendation {
            priority: RecommendationPriority::Medium,
            category: "emergency".to_string(),
            title: "Build Emergency Fund".to_string(),
            description: "Establish an emergency fund covering 3-6 months of expenses \
                          in a readily accessible account."
                .to_string(),
            target: "6 months of expenses".to_string(),
        });
    }

    if ratios.housing_ratio > Decimal::from(28) {
        recs.push(Recommendation {
            priority: RecommendationPriority::Medium,
            category: "housing".to_string(),
            title: "Optimize Housing Costs".to_string(),
            description: "Housing costs should ideally be 28% or less of gross income. \
                          Consider refinancing or downsizing."
                .to_string(),
            target: "28% or less of income".to_string(),
        });
    }

    recs
}

/// Derive the full ratio set from aggregation totals.
pub fn derive_ratios(
    total_assets: Decimal,
    liquid_assets: Decimal,
    total_liabilities: Decimal,
    monthly_income: Decimal,
    monthly_expenses: Decimal,
    housing_expenses: Decimal,
    monthly_cash_flow: Decimal,
) -> RatioSet {
    RatioSet {
        debt_to_asset_ratio: debt_to_asset_ratio(total_liabilities, total_assets),
        liquidity_ratio: liquidity_ratio(liquid_assets, total_assets),
        debt_to_income_ratio: debt_to_income_ratio(total_liabilities, monthly_income),
        savings_rate: savings_rate(monthly_cash_flow, monthly_income),
        emergency_fund_months: emergency_fund_months(liquid_assets, monthly_expenses),
        housing_ratio: housing_ratio(housing_expenses, monthly_income),
    }
}
