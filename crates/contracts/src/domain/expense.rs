use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Spending category for operating expenses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Rent,
    Salary,
    Marketing,
    Utilities,
    Supplies,
    Services,
    Taxes,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 8] = [
        ExpenseCategory::Rent,
        ExpenseCategory::Salary,
        ExpenseCategory::Marketing,
        ExpenseCategory::Utilities,
        ExpenseCategory::Supplies,
        ExpenseCategory::Services,
        ExpenseCategory::Taxes,
        ExpenseCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Rent => "Rent",
            ExpenseCategory::Salary => "Salary",
            ExpenseCategory::Marketing => "Marketing",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Supplies => "Supplies",
            ExpenseCategory::Services => "Services",
            ExpenseCategory::Taxes => "Taxes",
            ExpenseCategory::Other => "Other",
        }
    }

    /// Lowercase wire/value form, used for select options.
    pub fn value(&self) -> &'static str {
        match self {
            ExpenseCategory::Rent => "rent",
            ExpenseCategory::Salary => "salary",
            ExpenseCategory::Marketing => "marketing",
            ExpenseCategory::Utilities => "utilities",
            ExpenseCategory::Supplies => "supplies",
            ExpenseCategory::Services => "services",
            ExpenseCategory::Taxes => "taxes",
            ExpenseCategory::Other => "other",
        }
    }

    pub fn from_value(value: &str) -> ExpenseCategory {
        ExpenseCategory::ALL
            .into_iter()
            .find(|c| c.value() == value)
            .unwrap_or(ExpenseCategory::Other)
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single operating expense entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub date: NaiveDate,
    pub category: ExpenseCategory,
    pub description: String,
    pub amount: f64,
    pub supplier: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_value() {
        for category in ExpenseCategory::ALL {
            assert_eq!(ExpenseCategory::from_value(category.value()), category);
        }
    }

    #[test]
    fn unknown_category_value_falls_back_to_other() {
        assert_eq!(
            ExpenseCategory::from_value("entertainment"),
            ExpenseCategory::Other
        );
    }
}
