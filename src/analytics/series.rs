use serde::{Deserialize, Serialize};

use crate::domain::{Transaction, YearMonth};

use super::totals::month_spending;

/// Months shown by the spending chart.
pub const DEFAULT_SERIES_MONTHS: u32 = 6;

/// Expense total for one month of the series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyPoint {
    pub month: YearMonth,
    pub label: String,
    pub expenses: f64,
}

/// Expense totals for the `months` calendar months ending at `reference`, oldest first.
pub fn monthly_expenses(
    transactions: &[Transaction],
    reference: YearMonth,
    months: u32,
) -> Vec<MonthlyPoint> {
    (0..months)
        .rev()
        .map(|back| {
            let month = reference.months_back(back);
            MonthlyPoint {
                month,
                label: month.short_label(),
                expenses: month_spending(transactions, month),
            }
        })
        .collect()
}
