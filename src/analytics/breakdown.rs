use serde::{Deserialize, Serialize};

use crate::domain::{Category, Transaction, YearMonth};

use super::totals::{expense_total, in_month};

/// One category's share of total spending.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryShare {
    pub category_id: String,
    pub name: String,
    pub color: String,
    pub total: f64,
    pub count: usize,
    /// Share of all expenses, 0–100.
    pub percentage: f64,
}

/// Spending per known category, largest first. Categories without spending are left out,
/// as are expenses whose category id matches nothing in `categories`.
pub fn category_breakdown(
    transactions: &[Transaction],
    categories: &[Category],
) -> Vec<CategoryShare> {
    breakdown_of(transactions.iter(), categories)
}

pub(crate) fn breakdown_of<'a, I>(transactions: I, categories: &[Category]) -> Vec<CategoryShare>
where
    I: Iterator<Item = &'a Transaction> + Clone,
{
    let total_expenses = expense_total(transactions.clone());
    let mut shares: Vec<CategoryShare> = categories
        .iter()
        .filter_map(|category| {
            let (total, count) = transactions
                .clone()
                .filter(|txn| txn.is_expense() && txn.category == category.id)
                .fold((0.0, 0usize), |(sum, count), txn| {
                    (sum + txn.magnitude(), count + 1)
                });
            if total <= 0.0 {
                return None;
            }
            let percentage = if total_expenses > 0.0 {
                total / total_expenses * 100.0
            } else {
                0.0
            };
            Some(CategoryShare {
                category_id: category.id.clone(),
                name: category.name.clone(),
                color: category.color.clone(),
                total,
                count,
                percentage,
            })
        })
        .collect();
    shares.sort_by(|a, b| b.total.total_cmp(&a.total));
    shares
}

/// The category with the most spending in `month`, if anything was spent.
pub fn top_category(
    transactions: &[Transaction],
    categories: &[Category],
    month: YearMonth,
) -> Option<CategoryShare> {
    breakdown_of(in_month(transactions, month), categories)
        .into_iter()
        .next()
}
