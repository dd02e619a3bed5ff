use once_cell::sync::Lazy;

use crate::ledger::Category;

/// Tone of an insight card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightKind {
    Positive,
    Warning,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// One AI-style insight card from the insights page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: &'static str,
    pub description: &'static str,
    pub amount: &'static str,
    pub trend: Trend,
}

static INSIGHT_CARDS: Lazy<Vec<Insight>> = Lazy::new(|| {
    vec![
        Insight {
            kind: InsightKind::Positive,
            title: "Great spending control!",
            description: "You spent 15% less on entertainment this month compared to last month.",
            amount: "$85 saved",
            trend: Trend::Down,
        },
        Insight {
            kind: InsightKind::Warning,
            title: "Food expenses increased",
            description: "Your food spending increased by 30% this month. Consider meal planning.",
            amount: "$120 over budget",
            trend: Trend::Up,
        },
        Insight {
            kind: InsightKind::Neutral,
            title: "Transportation costs stable",
            description: "Your transportation expenses remained consistent with last month.",
            amount: "$420 spent",
            trend: Trend::Stable,
        },
        Insight {
            kind: InsightKind::Positive,
            title: "Bills payment optimized",
            description: "You saved $45 by switching to annual billing for your subscriptions.",
            amount: "$45 saved",
            trend: Trend::Down,
        },
    ]
});

pub fn insight_cards() -> &'static [Insight] {
    &INSIGHT_CARDS
}

/// Month-over-month spending pair for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryComparison {
    pub category: Category,
    pub this_month: f64,
    pub last_month: f64,
}

impl CategoryComparison {
    /// Percent change from last month, positive when spending grew.
    pub fn change_percent(&self) -> f64 {
        if self.last_month == 0.0 {
            0.0
        } else {
            (self.this_month - self.last_month) / self.last_month * 100.0
        }
    }
}

static MONTHLY_COMPARISON: Lazy<Vec<CategoryComparison>> = Lazy::new(|| {
    vec![
        CategoryComparison { category: Category::Food, this_month: 850.0, last_month: 720.0 },
        CategoryComparison { category: Category::Transportation, this_month: 420.0, last_month: 415.0 },
        CategoryComparison { category: Category::Bills, this_month: 1200.0, last_month: 1245.0 },
        CategoryComparison { category: Category::Shopping, this_month: 680.0, last_month: 520.0 },
        CategoryComparison { category: Category::Entertainment, this_month: 340.0, last_month: 400.0 },
    ]
});

pub fn monthly_comparison() -> &'static [CategoryComparison] {
    &MONTHLY_COMPARISON
}

/// Budget tracking block from the insights page.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    pub monthly_budget: f64,
    pub spent: f64,
}

impl BudgetStatus {
    pub fn remaining(&self) -> f64 {
        self.monthly_budget - self.spent
    }

    pub fn used_percent(&self) -> f64 {
        if self.monthly_budget == 0.0 {
            0.0
        } else {
            self.spent / self.monthly_budget * 100.0
        }
    }
}

// The spent figure is mock data, as on the original page.
pub fn budget_status(monthly_budget: f64) -> BudgetStatus {
    BudgetStatus {
        monthly_budget,
        spent: 3490.0,
    }
}

/// Average spend for one of the top spending days.
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingDay {
    pub day: &'static str,
    pub average: f64,
}

static TOP_SPENDING_DAYS: Lazy<Vec<SpendingDay>> = Lazy::new(|| {
    vec![
        SpendingDay { day: "Fridays", average: 156.0 },
        SpendingDay { day: "Saturdays", average: 134.0 },
        SpendingDay { day: "Sundays", average: 89.0 },
    ]
});

pub fn top_spending_days() -> &'static [SpendingDay] {
    &TOP_SPENDING_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_percent_matches_published_figures() {
        let rows = monthly_comparison();
        let expected = [18.1, 1.2, -3.6, 30.8, -15.0];
        for (row, expected) in rows.iter().zip(expected) {
            assert!(
                (row.change_percent() - expected).abs() < 0.1,
                "{:?}: {} vs {}",
                row.category,
                row.change_percent(),
                expected
            );
        }
    }

    #[test]
    fn budget_status_tracks_usage() {
        let status = budget_status(5000.0);
        assert!((status.remaining() - 1510.0).abs() < 1e-9);
        assert!((status.used_percent() - 69.8).abs() < 1e-9);
    }
}
