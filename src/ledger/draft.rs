use chrono::{Local, NaiveDate};

use super::expense::Expense;

/// Shared form buffer backing both the add and edit dialogs.
///
/// The amount stays a string until the ledger validates it, matching the way
/// the form collects it.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub title: String,
    pub amount: String,
    pub category: String,
    pub date: NaiveDate,
}

impl ExpenseDraft {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            amount: String::new(),
            category: String::new(),
            date: Local::now().date_naive(),
        }
    }

    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            title: expense.title.clone(),
            amount: expense.amount.to_string(),
            category: expense.category.clone(),
            date: expense.date,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for ExpenseDraft {
    fn default() -> Self {
        Self::new()
    }
}
