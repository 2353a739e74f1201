use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Transaction, TransactionKind};

/// Length of the dashboard's recent-activity list.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Newest transactions by date. Transactions sharing a date keep their stored order.
pub fn recent_transactions(transactions: &[Transaction], limit: usize) -> Vec<&Transaction> {
    let mut ordered: Vec<&Transaction> = transactions.iter().collect();
    ordered.sort_by(|a, b| by_date_desc(a, b));
    ordered.truncate(limit);
    ordered
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {field} option `{value}`")]
pub struct ParseOptionError {
    field: &'static str,
    value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum KindFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl KindFilter {
    fn matches(self, txn: &Transaction) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Income => txn.is_income(),
            KindFilter::Expense => txn.is_expense(),
        }
    }
}

impl From<TransactionKind> for KindFilter {
    fn from(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Income => KindFilter::Income,
            TransactionKind::Expense => KindFilter::Expense,
        }
    }
}

impl FromStr for KindFilter {
    type Err = ParseOptionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "all" => Ok(KindFilter::All),
            "income" => Ok(KindFilter::Income),
            "expense" => Ok(KindFilter::Expense),
            other => Err(ParseOptionError {
                field: "type",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Newest first.
    #[default]
    Date,
    /// Largest magnitude first.
    Amount,
    /// Alphabetical.
    Description,
}

impl FromStr for SortKey {
    type Err = ParseOptionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "date" => Ok(SortKey::Date),
            "amount" => Ok(SortKey::Amount),
            "description" => Ok(SortKey::Description),
            other => Err(ParseOptionError {
                field: "sort",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortKey::Date => "date",
            SortKey::Amount => "amount",
            SortKey::Description => "description",
        };
        f.write_str(label)
    }
}

/// Criteria for the transaction list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionQuery {
    pub search_term: String,
    pub category: CategoryFilter,
    pub kind: KindFilter,
    pub sort: SortKey,
}

impl TransactionQuery {
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = CategoryFilter::Only(category.into());
        self
    }

    pub fn of_kind(mut self, kind: KindFilter) -> Self {
        self.kind = kind;
        self
    }

    pub fn sorted_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn matches(&self, txn: &Transaction) -> bool {
        let needle = self.search_term.to_lowercase();
        matches_search(txn, &needle) && self.matches_category(txn) && self.kind.matches(txn)
    }

    fn matches_category(&self, txn: &Transaction) -> bool {
        match &self.category {
            CategoryFilter::All => true,
            CategoryFilter::Only(id) => txn.category == *id,
        }
    }
}

/// Transactions matching every part of `query`, in the query's order.
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    query: &TransactionQuery,
) -> Vec<&'a Transaction> {
    let mut matched: Vec<&Transaction> =
        transactions.iter().filter(|txn| query.matches(txn)).collect();
    match query.sort {
        SortKey::Date => matched.sort_by(|a, b| by_date_desc(a, b)),
        SortKey::Amount => matched.sort_by(|a, b| b.magnitude().total_cmp(&a.magnitude())),
        SortKey::Description => matched.sort_by(|a, b| by_description(a, b)),
    }
    matched
}

fn matches_search(txn: &Transaction, needle: &str) -> bool {
    needle.is_empty() || txn.description.to_lowercase().contains(needle)
}

fn by_date_desc(a: &Transaction, b: &Transaction) -> Ordering {
    b.effective_date().cmp(&a.effective_date())
}

fn by_description(a: &Transaction, b: &Transaction) -> Ordering {
    a.description
        .to_lowercase()
        .cmp(&b.description.to_lowercase())
        .then_with(|| a.description.cmp(&b.description))
}
