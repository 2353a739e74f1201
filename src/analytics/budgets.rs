use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{
    category_label, Budget, Category, Transaction, YearMonth, BUDGET_FALLBACK_LABEL,
};

use super::totals::{expense_total, in_month};

const WARNING_THRESHOLD: f64 = 80.0;
const OVER_THRESHOLD: f64 = 100.0;

/// How close spending is to a budget ceiling.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    Good,
    Warning,
    Over,
}

impl BudgetStatus {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage > OVER_THRESHOLD {
            BudgetStatus::Over
        } else if percentage > WARNING_THRESHOLD {
            BudgetStatus::Warning
        } else {
            BudgetStatus::Good
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetStatus::Good => "good",
            BudgetStatus::Warning => "warning",
            BudgetStatus::Over => "over",
        };
        f.write_str(label)
    }
}

/// Budget versus actual spending for one budget in the reference month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetPerformance {
    pub budget_id: String,
    pub category_id: String,
    pub category: String,
    pub budget_amount: f64,
    pub actual_spending: f64,
    pub percentage: f64,
    pub remaining: f64,
    pub status: BudgetStatus,
}

impl BudgetPerformance {
    pub fn is_over(&self) -> bool {
        self.remaining < 0.0
    }
}

/// Evaluates every budget set for `month`. Budgets sharing a category and month are
/// reported separately, each against the full spending of that category.
pub fn budget_performance(
    transactions: &[Transaction],
    budgets: &[Budget],
    categories: &[Category],
    month: YearMonth,
) -> Vec<BudgetPerformance> {
    budgets
        .iter()
        .filter(|budget| budget.applies_to(month))
        .map(|budget| {
            let actual_spending = expense_total(
                in_month(transactions, month).filter(|txn| txn.category == budget.category_id),
            );
            let percentage = if budget.amount > 0.0 {
                actual_spending / budget.amount * 100.0
            } else {
                0.0
            };
            BudgetPerformance {
                budget_id: budget.id.clone(),
                category_id: budget.category_id.clone(),
                category: category_label(categories, &budget.category_id, BUDGET_FALLBACK_LABEL)
                    .to_string(),
                budget_amount: budget.amount,
                actual_spending,
                percentage,
                remaining: budget.amount - actual_spending,
                status: BudgetStatus::from_percentage(percentage),
            }
        })
        .collect()
}

/// Budgets ordered newest period first; budgets for the same period keep their order.
pub fn budgets_by_period(budgets: &[Budget]) -> Vec<&Budget> {
    let mut ordered: Vec<&Budget> = budgets.iter().collect();
    ordered.sort_by(|a, b| b.year.cmp(&a.year).then(b.month.cmp(&a.month)));
    ordered
}
