//! User profile record and the in-place edit flow backing the profile page.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{LedgerError, Result};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub monthly_budget: f64,
    pub currency: String,
    pub join_date: NaiveDate,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "John Doe".into(),
            email: "john.doe@example.com".into(),
            monthly_budget: 5000.0,
            currency: "USD".into(),
            join_date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid join date"),
        }
    }
}

impl Profile {
    /// Avatar fallback initials, one letter per name part.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }

    /// Validates the draft and applies it in place.
    pub fn apply(&mut self, draft: &ProfileDraft) -> Result<()> {
        if draft.name.trim().is_empty()
            || draft.email.trim().is_empty()
            || draft.currency.trim().is_empty()
        {
            return Err(LedgerError::Validation(
                "please fill in all required fields".into(),
            ));
        }
        let monthly_budget: f64 = draft.monthly_budget.trim().parse().map_err(|_| {
            LedgerError::Validation(format!("`{}` is not a number", draft.monthly_budget.trim()))
        })?;
        if !monthly_budget.is_finite() || monthly_budget <= 0.0 {
            return Err(LedgerError::Validation(
                "monthly budget must be a positive number".into(),
            ));
        }
        self.name = draft.name.trim().to_string();
        self.email = draft.email.trim().to_string();
        self.monthly_budget = monthly_budget;
        self.currency = draft.currency.trim().to_string();
        tracing::info!(name = %self.name, "profile updated");
        Ok(())
    }
}

/// Form buffer for the profile edit flow.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDraft {
    pub name: String,
    pub email: String,
    pub monthly_budget: String,
    pub currency: String,
}

impl ProfileDraft {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            monthly_budget: profile.monthly_budget.to_string(),
            currency: profile.currency.clone(),
        }
    }
}

/// One entry of the account-statistics block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountStat {
    pub label: &'static str,
    pub value: &'static str,
    pub period: &'static str,
}

static ACCOUNT_STATS: Lazy<Vec<AccountStat>> = Lazy::new(|| {
    vec![
        AccountStat { label: "Total Expenses", value: "$12,450", period: "This year" },
        AccountStat { label: "Average Monthly", value: "$3,490", period: "Last 3 months" },
        AccountStat { label: "Categories Used", value: "8", period: "Active" },
        AccountStat { label: "Transactions", value: "156", period: "This month" },
    ]
});

/// Fixed statistics sidebar from the profile page.
pub fn account_stats() -> &'static [AccountStat] {
    &ACCOUNT_STATS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_rejects_empty_fields_without_mutation() {
        let mut profile = Profile::default();
        let mut draft = ProfileDraft::from_profile(&profile);
        draft.name.clear();
        let err = profile.apply(&draft).unwrap_err();
        assert!(matches!(err, LedgerError::Validation(_)));
        assert_eq!(profile, Profile::default());
    }

    #[test]
    fn apply_updates_fields_and_budget() {
        let mut profile = Profile::default();
        let draft = ProfileDraft {
            name: "Jane Roe".into(),
            email: "jane@example.com".into(),
            monthly_budget: "6000".into(),
            currency: "EUR".into(),
        };
        profile.apply(&draft).unwrap();
        assert_eq!(profile.name, "Jane Roe");
        assert!((profile.monthly_budget - 6000.0).abs() < f64::EPSILON);
        assert_eq!(profile.initials(), "JR");
    }
}
