//! Read-only dashboard surfaces: aggregates computed over the ledger plus the
//! fixed series the original dashboard ships as mock data.

pub mod insights;
pub mod overview;

pub use insights::{
    budget_status, insight_cards, monthly_comparison, top_spending_days, BudgetStatus,
    CategoryComparison, Insight, InsightKind, SpendingDay, Trend,
};
pub use overview::{
    category_breakdown, overview, weekly_series, CategoryBreakdown, Overview, WeeklySpend,
};
