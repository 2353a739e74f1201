use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::analytics::{
    category_breakdown, month_summary, monthly_expenses, recent_transactions, totals,
    CategoryShare, MonthSummary, MonthlyPoint, Totals,
};
use crate::domain::{category_label, Transaction, YearMonth, TRANSACTION_FALLBACK_LABEL};
use crate::store::AppState;

const TOP_CATEGORY_COUNT: usize = 5;

/// A recent transaction with its category name resolved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecentTransaction {
    #[serde(flatten)]
    pub transaction: Transaction,
    pub category_name: String,
}

/// Everything the overview screen shows, computed from one snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub totals: Totals,
    pub this_month: MonthSummary,
    pub category_breakdown: Vec<CategoryShare>,
    pub recent_transactions: Vec<RecentTransaction>,
    pub transaction_count: usize,
}

impl DashboardReport {
    /// The largest spending categories, at most five.
    pub fn top_categories(&self) -> &[CategoryShare] {
        let end = self.category_breakdown.len().min(TOP_CATEGORY_COUNT);
        &self.category_breakdown[..end]
    }
}

pub struct SummaryService;

impl SummaryService {
    pub fn dashboard(state: &AppState, today: NaiveDate, recent_limit: usize) -> DashboardReport {
        DashboardReport {
            totals: totals(&state.transactions),
            this_month: month_summary(&state.transactions, YearMonth::of(today)),
            category_breakdown: category_breakdown(&state.transactions, &state.categories),
            recent_transactions: recent_transactions(&state.transactions, recent_limit)
                .into_iter()
                .map(|txn| RecentTransaction {
                    category_name: category_label(
                        &state.categories,
                        &txn.category,
                        TRANSACTION_FALLBACK_LABEL,
                    )
                    .to_string(),
                    transaction: txn.clone(),
                })
                .collect(),
            transaction_count: state.transactions.len(),
        }
    }

    /// Monthly expense series ending with the month containing `today`.
    pub fn monthly_series(state: &AppState, today: NaiveDate, months: u32) -> Vec<MonthlyPoint> {
        monthly_expenses(&state.transactions, YearMonth::of(today), months)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn state() -> AppState {
        let mut state = AppState::default();
        let categories = [
            "food",
            "transportation",
            "shopping",
            "entertainment",
            "bills",
            "travel",
        ];
        for (idx, category) in categories.iter().enumerate() {
            let amount = -10.0 * (idx as f64 + 1.0);
            state.transactions.push(
                Transaction::new(
                    format!("Spend {idx}"),
                    amount,
                    date(2024, 3, idx as u32 + 1),
                    *category,
                )
                .with_id(format!("t{idx}")),
            );
        }
        state
            .transactions
            .push(Transaction::new("Salary", 1000.0, date(2024, 2, 28), "other").with_id("pay"));
        state
            .transactions
            .push(Transaction::new("Mystery", -1.0, date(2024, 2, 1), "crypto").with_id("odd"));
        state
    }

    #[test]
    fn dashboard_combines_views() {
        let report = SummaryService::dashboard(&state(), date(2024, 3, 20), 3);
        assert_eq!(report.transaction_count, 8);
        assert_eq!(report.totals.total_income, 1000.0);
        assert_eq!(report.totals.total_expenses, 211.0);
        assert_eq!(report.this_month.transaction_count, 6);
        assert_eq!(report.this_month.income, 0.0);
        assert_eq!(report.recent_transactions.len(), 3);
        assert_eq!(report.recent_transactions[0].transaction.id, "t5");
        assert_eq!(report.recent_transactions[0].category_name, "Travel");
        assert_eq!(report.category_breakdown.len(), 6);
        assert_eq!(report.top_categories().len(), 5);
        assert_eq!(report.top_categories()[0].category_id, "travel");
    }

    #[test]
    fn monthly_series_ends_at_today() {
        let series = SummaryService::monthly_series(&state(), date(2024, 3, 20), 2);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].expenses, 1.0);
        assert_eq!(series[1].expenses, 210.0);
    }

    #[test]
    fn recent_entries_fall_back_to_other_for_unknown_categories() {
        let report = SummaryService::dashboard(&state(), date(2024, 3, 20), 10);
        let odd = report
            .recent_transactions
            .iter()
            .find(|entry| entry.transaction.id == "odd")
            .expect("unknown-category transaction listed");
        assert_eq!(odd.category_name, "Other");
    }
}
