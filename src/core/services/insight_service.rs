use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::analytics::{
    budget_performance, in_month, month_spending, spending_pace, spending_trend, top_category,
    BudgetPerformance, CategoryShare, SpendingPace,
};
use crate::domain::YearMonth;
use crate::store::AppState;

/// Month-over-month comparison, budget health, and pace for the month containing the
/// reference date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InsightReport {
    pub month: YearMonth,
    pub current_month_spending: f64,
    pub last_month_spending: f64,
    /// Percent change against last month; 0 when last month had no spending.
    pub spending_trend: f64,
    pub top_category: Option<CategoryShare>,
    pub budget_analysis: Vec<BudgetPerformance>,
    pub pace: SpendingPace,
    /// Transactions dated inside `month`.
    pub transaction_count: usize,
}

impl InsightReport {
    pub fn budgets_over(&self) -> impl Iterator<Item = &BudgetPerformance> {
        self.budget_analysis.iter().filter(|entry| entry.is_over())
    }
}

pub struct InsightService;

impl InsightService {
    pub fn insights(state: &AppState, today: NaiveDate) -> InsightReport {
        let month = YearMonth::of(today);
        let current_month_spending = month_spending(&state.transactions, month);
        let last_month_spending = month_spending(&state.transactions, month.previous());
        InsightReport {
            month,
            current_month_spending,
            last_month_spending,
            spending_trend: spending_trend(current_month_spending, last_month_spending),
            top_category: top_category(&state.transactions, &state.categories, month),
            budget_analysis: budget_performance(
                &state.transactions,
                &state.budgets,
                &state.categories,
                month,
            ),
            pace: spending_pace(current_month_spending, today),
            transaction_count: in_month(&state.transactions, month).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::BudgetStatus;
    use crate::domain::{Budget, Transaction};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn insights_compare_against_previous_month() {
        let mut state = AppState::default();
        state.transactions = vec![
            Transaction::new("Groceries", -150.0, date(2024, 3, 5), "food").with_id("a"),
            Transaction::new("Groceries", -100.0, date(2024, 2, 5), "food").with_id("b"),
            Transaction::new("Salary", 900.0, date(2024, 3, 1), "other").with_id("c"),
        ];
        state.budgets = vec![Budget::new("food", 120.0, 3, 2024).with_id("budget")];

        let report = InsightService::insights(&state, date(2024, 3, 10));
        assert_eq!(report.current_month_spending, 150.0);
        assert_eq!(report.last_month_spending, 100.0);
        assert_eq!(report.spending_trend, 50.0);
        assert_eq!(
            report.top_category.as_ref().map(|c| c.category_id.as_str()),
            Some("food")
        );
        assert_eq!(report.budget_analysis.len(), 1);
        assert_eq!(report.budget_analysis[0].status, BudgetStatus::Over);
        assert_eq!(report.budgets_over().count(), 1);
        assert_eq!(report.pace.average_daily, 15.0);
        assert_eq!(report.pace.projected_monthly, 465.0);
        assert_eq!(report.transaction_count, 2);
    }

    #[test]
    fn empty_state_reports_zeroes() {
        let report = InsightService::insights(&AppState::default(), date(2024, 1, 31));
        assert_eq!(report.spending_trend, 0.0);
        assert!(report.top_category.is_none());
        assert!(report.budget_analysis.is_empty());
        assert_eq!(report.pace, SpendingPace::default());
    }
}
