use serde::{Deserialize, Serialize};

use crate::domain::{Transaction, YearMonth};

/// All-time income, expenses, and their difference.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Totals {
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
}

/// Income, expenses, and activity within one calendar month.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MonthSummary {
    pub month: Option<YearMonth>,
    pub income: f64,
    pub expenses: f64,
    pub net: f64,
    pub transaction_count: usize,
}

pub fn income_total<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> f64 {
    transactions
        .into_iter()
        .filter(|txn| txn.is_income())
        .map(|txn| txn.amount)
        .sum()
}

/// Sum of expense magnitudes.
pub fn expense_total<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> f64 {
    transactions
        .into_iter()
        .filter(|txn| txn.is_expense())
        .map(Transaction::magnitude)
        .sum()
}

pub fn totals(transactions: &[Transaction]) -> Totals {
    let total_income = income_total(transactions);
    let total_expenses = expense_total(transactions);
    Totals {
        total_income,
        total_expenses,
        balance: total_income - total_expenses,
    }
}

/// Transactions whose effective date falls inside `month`.
pub fn in_month(
    transactions: &[Transaction],
    month: YearMonth,
) -> impl Iterator<Item = &Transaction> + Clone + '_ {
    let window = month.window();
    transactions
        .iter()
        .filter(move |txn| window.contains(txn.effective_date()))
}

pub fn month_spending(transactions: &[Transaction], month: YearMonth) -> f64 {
    expense_total(in_month(transactions, month))
}

pub fn month_summary(transactions: &[Transaction], month: YearMonth) -> MonthSummary {
    let income = income_total(in_month(transactions, month));
    let expenses = expense_total(in_month(transactions, month));
    MonthSummary {
        month: Some(month),
        income,
        expenses,
        net: income - expenses,
        transaction_count: in_month(transactions, month).count(),
    }
}
