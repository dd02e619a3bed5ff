use once_cell::sync::Lazy;

use crate::ledger::{Category, ExpenseLedger};

/// One bar of the weekly spending chart.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklySpend {
    pub week: &'static str,
    pub amount: f64,
}

static WEEKLY_SERIES: Lazy<Vec<WeeklySpend>> = Lazy::new(|| {
    vec![
        WeeklySpend { week: "Week 1", amount: 750.0 },
        WeeklySpend { week: "Week 2", amount: 920.0 },
        WeeklySpend { week: "Week 3", amount: 680.0 },
        WeeklySpend { week: "Week 4", amount: 1140.0 },
    ]
});

/// Fixed four-week spending series shown on the overview page.
pub fn weekly_series() -> &'static [WeeklySpend] {
    &WEEKLY_SERIES
}

/// Per-category slice of the spending breakdown, largest first.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    pub category: Category,
    pub total: f64,
    pub percent: f64,
}

pub fn category_breakdown(ledger: &ExpenseLedger) -> Vec<CategoryBreakdown> {
    let grand_total = ledger.total();
    let mut totals: Vec<(Category, f64)> = Category::ALL
        .iter()
        .map(|category| (*category, 0.0))
        .collect();
    for expense in ledger.expenses() {
        let category = Category::from_name(&expense.category);
        if let Some(entry) = totals.iter_mut().find(|(c, _)| *c == category) {
            entry.1 += expense.amount;
        }
    }
    totals.retain(|(_, total)| *total > 0.0);
    totals.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    totals
        .into_iter()
        .map(|(category, total)| CategoryBreakdown {
            category,
            total,
            percent: if grand_total > 0.0 {
                total / grand_total * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

/// Headline figures for the overview page.
#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    pub total_expenses: f64,
    pub monthly_budget: f64,
    pub budget_remaining: f64,
    pub budget_remaining_percent: f64,
    pub weekly_average: f64,
    pub largest_category: Option<CategoryBreakdown>,
}

pub fn overview(ledger: &ExpenseLedger, monthly_budget: f64) -> Overview {
    let total_expenses = ledger.total();
    let budget_remaining = monthly_budget - total_expenses;
    let weeks = weekly_series();
    let weekly_total: f64 = weeks.iter().map(|week| week.amount).sum();
    Overview {
        total_expenses,
        monthly_budget,
        budget_remaining,
        budget_remaining_percent: if monthly_budget > 0.0 {
            budget_remaining / monthly_budget * 100.0
        } else {
            0.0
        },
        weekly_average: weekly_total / weeks.len() as f64,
        largest_category: category_breakdown(ledger).into_iter().next(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakdown_groups_and_orders_by_total() {
        let ledger = ExpenseLedger::with_mock_data();
        let breakdown = category_breakdown(&ledger);
        assert_eq!(breakdown.len(), 4);
        assert_eq!(breakdown[0].category, Category::Bills);
        assert!((breakdown[0].total - 120.0).abs() < 1e-9);
        // Food groups the grocery and coffee records.
        assert_eq!(breakdown[1].category, Category::Food);
        assert!((breakdown[1].total - 98.25).abs() < 1e-9);
        let percent_sum: f64 = breakdown.iter().map(|slice| slice.percent).sum();
        assert!((percent_sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn overview_matches_mock_arithmetic() {
        let ledger = ExpenseLedger::with_mock_data();
        let report = overview(&ledger, 5000.0);
        assert!((report.total_expenses - 288.25).abs() < 1e-9);
        assert!((report.budget_remaining - 4711.75).abs() < 1e-9);
        assert!((report.weekly_average - 872.5).abs() < 1e-9);
        assert_eq!(
            report.largest_category.map(|slice| slice.category),
            Some(Category::Bills)
        );
    }

    #[test]
    fn empty_ledger_yields_no_breakdown() {
        let ledger = ExpenseLedger::new();
        assert!(category_breakdown(&ledger).is_empty());
        let report = overview(&ledger, 0.0);
        assert_eq!(report.budget_remaining_percent, 0.0);
        assert!(report.largest_category.is_none());
    }
}
