use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single expense record held by the ledger.
///
/// The category is stored as free text; the dashboard selectors only offer
/// the canonical [`Category`] names, but library callers may write anything
/// non-empty and reporting folds unknown names into `Other`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: String,
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
}

/// Canonical spending categories offered by the dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    Food,
    Transportation,
    Bills,
    Shopping,
    Entertainment,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Transportation,
        Category::Bills,
        Category::Shopping,
        Category::Entertainment,
        Category::Other,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transportation => "Transportation",
            Category::Bills => "Bills",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::Other => "Other",
        }
    }

    /// Folds a free-text category name into the canonical set.
    pub fn from_name(name: &str) -> Category {
        let trimmed = name.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.name().eq_ignore_ascii_case(trimmed))
            .unwrap_or(Category::Other)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_matches_case_insensitively() {
        assert_eq!(Category::from_name("food"), Category::Food);
        assert_eq!(Category::from_name(" Bills "), Category::Bills);
    }

    #[test]
    fn from_name_folds_unknown_into_other() {
        assert_eq!(Category::from_name("Groceries"), Category::Other);
        assert_eq!(Category::from_name(""), Category::Other);
    }
}
