//! Derived views over a state snapshot.
//!
//! Every function here is pure: it reads slices of records plus a reference month or
//! date and returns a fresh value. Amounts are summed as plain `f64` with no rounding.
//! Ratios whose denominator is zero are reported as 0.

pub mod breakdown;
pub mod budgets;
pub mod listing;
pub mod series;
pub mod totals;
pub mod trends;

pub use breakdown::{category_breakdown, top_category, CategoryShare};
pub use budgets::{budget_performance, budgets_by_period, BudgetPerformance, BudgetStatus};
pub use listing::{
    filter_transactions, recent_transactions, CategoryFilter, KindFilter, ParseOptionError,
    SortKey, TransactionQuery, DEFAULT_RECENT_LIMIT,
};
pub use series::{monthly_expenses, MonthlyPoint, DEFAULT_SERIES_MONTHS};
pub use totals::{
    expense_total, in_month, income_total, month_spending, month_summary, totals, MonthSummary,
    Totals,
};
pub use trends::{spending_pace, spending_trend, SpendingPace};
