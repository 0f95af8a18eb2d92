//! Category, subcategory, and field-key definitions.

use serde::{Deserialize, Serialize};

/// Top-level grouping of financial fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Assets,
    Liabilities,
    Income,
    Expenses,
}

impl Category {
    /// All categories, in balance-sheet-then-income-statement order.
    pub const ALL: [Category; 4] = [
        Category::Assets,
        Category::Liabilities,
        Category::Income,
        Category::Expenses,
    ];

    /// Stable key string used in field names and serialized blobs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Assets => "assets",
            Category::Liabilities => "liabilities",
            Category::Income => "income",
            Category::Expenses => "expenses",
        }
    }

    /// Parse a category key string. Returns `None` for anything unknown.
    pub fn parse(key: &str) -> Option<Category> {
        match key {
            "assets" => Some(Category::Assets),
            "liabilities" => Some(Category::Liabilities),
            "income" => Some(Category::Income),
            "expenses" => Some(Category::Expenses),
            _ => None,
        }
    }
}

/// Fixed grouping within a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subcategory {
    // assets
    Liquid,
    Investments,
    Personal,
    // liabilities
    ShortTerm,
    LongTerm,
    // income
    Active,
    Portfolio,
    Passive,
    // expenses
    Housing,
    Transportation,
    Food,
    Entertainment,
}

impl Subcategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Subcategory::Liquid => "liquid",
            Subcategory::Investments => "investments",
            Subcategory::Personal => "personal",
            Subcategory::ShortTerm => "short_term",
            Subcategory::LongTerm => "long_term",
            Subcategory::Active => "active",
            Subcategory::Portfolio => "portfolio",
            Subcategory::Passive => "passive",
            Subcategory::Housing => "housing",
            Subcategory::Transportation => "transportation",
            Subcategory::Food => "food",
            Subcategory::Entertainment => "entertainment",
        }
    }

    /// The category this subcategory belongs to.
    pub fn category(&self) -> Category {
        match self {
            Subcategory::Liquid | Subcategory::Investments | Subcategory::Personal => {
                Category::Assets
            }
            Subcategory::ShortTerm | Subcategory::LongTerm => Category::Liabilities,
            Subcategory::Active | Subcategory::Portfolio | Subcategory::Passive => Category::Income,
            Subcategory::Housing
            | Subcategory::Transportation
            | Subcategory::Food
            | Subcategory::Entertainment => Category::Expenses,
        }
    }
}

const LIQUID_ASSET_FIELDS: &[&str] = &[
    "cash_on_hand",
    "personal_checking",
    "personal_savings",
    "business_checking",
    "business_savings",
    "money_market",
    "certificates_deposit",
];

const INVESTMENT_FIELDS: &[&str] = &[
    "business_1",
    "business_2",
    "business_3",
    "stocks",
    "bonds",
    "mutual_funds",
    "ira",
    "401k",
];

const PERSONAL_ASSET_FIELDS: &[&str] = &[
    "primary_residence",
    "auto_1",
    "auto_2",
    "other_personal_assets",
];

const SHORT_TERM_LIABILITY_FIELDS: &[&str] = &[
    "medical_dental",
    "credit_card_1",
    "credit_card_2",
    "credit_card_3",
    "credit_card_4",
    "credit_card_5",
];

const LONG_TERM_LIABILITY_FIELDS: &[&str] = &[
    "primary_mortgage",
    "heloc",
    "investment_mortgage",
    "auto_loan_1",
    "auto_loan_2",
    "student_loans",
    "personal_loans_balance",
];

const ACTIVE_INCOME_FIELDS: &[&str] = &[
    "salary_wages",
    "distributions",
    "commissions",
    "bonus",
    "interest_income",
];

const PORTFOLIO_INCOME_FIELDS: &[&str] = &["dividends", "royalties"];

const PASSIVE_INCOME_FIELDS: &[&str] = &["business_income", "real_estate_income"];

const HOUSING_EXPENSE_FIELDS: &[&str] = &[
    "mortgage_rent",
    "heloc_payment",
    "hoa_fees",
    "cell_phone_1",
    "cell_phone_2",
    "electricity",
    "gas",
    "water_sewer",
    "waste_removal",
    "repairs_maintenance",
    "lawncare_pest",
    "internet",
    "cable_satellite",
    "home_security",
    "home_insurance",
];

const TRANSPORTATION_EXPENSE_FIELDS: &[&str] = &[
    "auto_payment_1",
    "auto_payment_2",
    "auto_insurance",
    "registration_tags",
    "gas_fuel",
    "auto_repairs",
];

const FOOD_EXPENSE_FIELDS: &[&str] = &["groceries", "restaurants"];

const ENTERTAINMENT_EXPENSE_FIELDS: &[&str] = &[
    "streaming",
    "music",
    "movies",
    "concerts",
    "sporting_events",
    "live_theater",
    "outdoor_activities",
];

/// Lookup surface over the predefined field lists.
pub struct FieldCatalog;

impl FieldCatalog {
    /// Ordered subcategories for a category.
    pub fn subcategories_of(category: Category) -> &'static [Subcategory] {
        match category {
            Category::Assets => &[
                Subcategory::Liquid,
                Subcategory::Investments,
                Subcategory::Personal,
            ],
            Category::Liabilities => &[Subcategory::ShortTerm, Subcategory::LongTerm],
            Category::Income => &[
                Subcategory::Active,
                Subcategory::Portfolio,
                Subcategory::Passive,
            ],
            Category::Expenses => &[
                Subcategory::Housing,
                Subcategory::Transportation,
                Subcategory::Food,
                Subcategory::Entertainment,
            ],
        }
    }

    /// Ordered field keys for a category/subcategory pair.
    ///
    /// Returns an empty slice when the subcategory does not belong to the
    /// category.
    pub fn fields_for(category: Category, subcategory: Subcategory) -> &'static [&'static str] {
        if subcategory.category() != category {
            return &[];
        }
        match subcategory {
            Subcategory::Liquid => LIQUID_ASSET_FIELDS,
            Subcategory::Investments => INVESTMENT_FIELDS,
            Subcategory::Personal => PERSONAL_ASSET_FIELDS,
            Subcategory::ShortTerm => SHORT_TERM_LIABILITY_FIELDS,
            Subcategory::LongTerm => LONG_TERM_LIABILITY_FIELDS,
            Subcategory::Active => ACTIVE_INCOME_FIELDS,
            Subcategory::Portfolio => PORTFOLIO_INCOME_FIELDS,
            Subcategory::Passive => PASSIVE_INCOME_FIELDS,
            Subcategory::Housing => HOUSING_EXPENSE_FIELDS,
            Subcategory::Transportation => TRANSPORTATION_EXPENSE_FIELDS,
            Subcategory::Food => FOOD_EXPENSE_FIELDS,
            Subcategory::Entertainment => ENTERTAINMENT_EXPENSE_FIELDS,
        }
    }

    /// All predefined field keys of a category, flattened across its
    /// subcategories in catalog order.
    pub fn all_fields_for(category: Category) -> Vec<&'static str> {
        Self::subcategories_of(category)
            .iter()
            .flat_map(|sub| Self::fields_for(category, *sub).iter().copied())
            .collect()
    }

    /// Whether a field key is a member of any predefined list.
    pub fn is_predefined(key: &str) -> bool {
        Category::ALL
            .iter()
            .any(|c| Self::all_fields_for(*c).contains(&key))
    }
}
