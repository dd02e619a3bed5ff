use chrono::{NaiveDate, Utc};
use once_cell::sync::Lazy;

use crate::errors::{LedgerError, Result};

use super::{draft::ExpenseDraft, expense::Expense};

/// Fixed seed data shown on first launch. The persistence slot is mirrored on
/// every mutation but never read back at startup.
static MOCK_EXPENSES: Lazy<Vec<Expense>> = Lazy::new(|| {
    vec![
        mock_expense("1", "Grocery Shopping", 85.50, "Food", 2024, 1, 15),
        mock_expense("2", "Gas Station", 45.00, "Transportation", 2024, 1, 14),
        mock_expense("3", "Electricity Bill", 120.00, "Bills", 2024, 1, 13),
        mock_expense("4", "Coffee Shop", 12.75, "Food", 2024, 1, 12),
        mock_expense("5", "Movie Theater", 25.00, "Entertainment", 2024, 1, 11),
    ]
});

fn mock_expense(
    id: &str,
    title: &str,
    amount: f64,
    category: &str,
    year: i32,
    month: u32,
    day: u32,
) -> Expense {
    Expense {
        id: id.to_string(),
        title: title.to_string(),
        amount,
        category: category.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date"),
    }
}

/// Ordered, most-recent-first list of expenses plus the edit-dialog state.
///
/// The aggregate owns no storage; callers persist the list after successful
/// mutations.
#[derive(Debug, Clone, Default)]
pub struct ExpenseLedger {
    expenses: Vec<Expense>,
    edit_target: Option<String>,
}

impl ExpenseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger seeded with the dashboard's fixed mock list.
    pub fn with_mock_data() -> Self {
        Self::from_records(MOCK_EXPENSES.clone())
    }

    pub fn from_records(expenses: Vec<Expense>) -> Self {
        Self {
            expenses,
            edit_target: None,
        }
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    pub fn total(&self) -> f64 {
        self.expenses.iter().map(|expense| expense.amount).sum()
    }

    /// Identifier of the expense currently loaded in the edit dialog.
    pub fn editing(&self) -> Option<&str> {
        self.edit_target.as_deref()
    }

    /// Validates the draft and prepends a new expense record.
    pub fn add(&mut self, draft: &ExpenseDraft) -> Result<&Expense> {
        let amount = validated_amount(draft)?;
        let expense = Expense {
            id: self.next_id(),
            title: draft.title.trim().to_string(),
            amount,
            category: draft.category.trim().to_string(),
            date: draft.date,
        };
        tracing::info!(id = %expense.id, title = %expense.title, "expense added");
        self.expenses.insert(0, expense);
        Ok(&self.expenses[0])
    }

    /// Loads the matching record into a draft and marks it as the edit target.
    pub fn begin_edit(&mut self, id: &str) -> Result<ExpenseDraft> {
        let expense = self
            .get(id)
            .ok_or_else(|| LedgerError::ExpenseNotFound(id.to_string()))?;
        let draft = ExpenseDraft::from_expense(expense);
        self.edit_target = Some(id.to_string());
        Ok(draft)
    }

    /// Replaces the edit target's fields in place, preserving its identifier
    /// and position, then clears the target.
    pub fn commit_edit(&mut self, draft: &ExpenseDraft) -> Result<()> {
        let id = self.edit_target.clone().ok_or(LedgerError::NoEditTarget)?;
        let amount = validated_amount(draft)?;
        let expense = self
            .expenses
            .iter_mut()
            .find(|expense| expense.id == id)
            .ok_or_else(|| LedgerError::ExpenseNotFound(id.clone()))?;
        expense.title = draft.title.trim().to_string();
        expense.amount = amount;
        expense.category = draft.category.trim().to_string();
        expense.date = draft.date;
        self.edit_target = None;
        tracing::info!(id = %id, "expense updated");
        Ok(())
    }

    /// Clears the edit target without touching the ledger.
    pub fn cancel_edit(&mut self) {
        self.edit_target = None;
    }

    /// Removes the matching record. Unknown identifiers are a no-op; returns
    /// whether a record was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|expense| expense.id != id);
        let removed = self.expenses.len() != before;
        if removed {
            if self.edit_target.as_deref() == Some(id) {
                self.edit_target = None;
            }
            tracing::info!(id, "expense deleted");
        }
        removed
    }

    // Timestamp-derived opaque token; bumped until unique so back-to-back
    // adds within one millisecond cannot collide.
    fn next_id(&self) -> String {
        let mut stamp = Utc::now().timestamp_millis();
        loop {
            let id = stamp.to_string();
            if self.get(&id).is_none() {
                return id;
            }
            stamp += 1;
        }
    }
}

fn validated_amount(draft: &ExpenseDraft) -> Result<f64> {
    if draft.title.trim().is_empty()
        || draft.amount.trim().is_empty()
        || draft.category.trim().is_empty()
    {
        return Err(LedgerError::Validation(
            "please fill in all required fields".into(),
        ));
    }
    let amount: f64 = draft
        .amount
        .trim()
        .parse()
        .map_err(|_| LedgerError::Validation(format!("`{}` is not a number", draft.amount.trim())))?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(LedgerError::Validation(
            "amount must be a positive number".into(),
        ));
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, amount: &str, category: &str) -> ExpenseDraft {
        ExpenseDraft {
            title: title.into(),
            amount: amount.into(),
            category: category.into(),
            date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        }
    }

    #[test]
    fn mock_seed_has_five_records() {
        let ledger = ExpenseLedger::with_mock_data();
        assert_eq!(ledger.len(), 5);
        assert_eq!(ledger.expenses()[0].title, "Grocery Shopping");
    }

    #[test]
    fn add_trims_fields_and_parses_amount() {
        let mut ledger = ExpenseLedger::new();
        let added = ledger.add(&draft("  Coffee  ", " 4.50 ", " Food ")).unwrap();
        assert_eq!(added.title, "Coffee");
        assert_eq!(added.category, "Food");
        assert!((added.amount - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn generated_ids_are_unique() {
        let mut ledger = ExpenseLedger::new();
        for i in 0..20 {
            ledger
                .add(&draft(&format!("Item {i}"), "1", "Other"))
                .unwrap();
        }
        let mut ids: Vec<_> = ledger.expenses().iter().map(|e| e.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn non_finite_amount_is_rejected() {
        let mut ledger = ExpenseLedger::new();
        for bad in ["NaN", "inf", "-3", "0"] {
            let err = ledger.add(&draft("Coffee", bad, "Food")).unwrap_err();
            assert!(matches!(err, LedgerError::Validation(_)), "{bad}");
        }
        assert!(ledger.is_empty());
    }

    #[test]
    fn delete_clears_matching_edit_target() {
        let mut ledger = ExpenseLedger::with_mock_data();
        ledger.begin_edit("3").unwrap();
        assert_eq!(ledger.editing(), Some("3"));
        assert!(ledger.delete("3"));
        assert_eq!(ledger.editing(), None);
    }
}
