use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{seed_categories, Budget, Category, Transaction};

/// Everything the store owns. Transactions and budgets are kept most-recent-first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    pub transactions: Vec<Transaction>,
    pub categories: Vec<Category>,
    pub budgets: Vec<Budget>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            transactions: Vec::new(),
            categories: seed_categories(),
            budgets: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

impl AppState {
    /// Replaces every slice present in `partial`, keeping the rest.
    pub fn merge(mut self, partial: PartialState) -> Self {
        if let Some(transactions) = partial.transactions {
            self.transactions = transactions;
        }
        if let Some(categories) = partial.categories {
            self.categories = categories;
        }
        if let Some(budgets) = partial.budgets {
            self.budgets = budgets;
        }
        if let Some(loading) = partial.loading {
            self.loading = loading;
        }
        if let Some(error) = partial.error {
            self.error = error;
        }
        self
    }

    pub fn transaction(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn budget(&self, id: &str) -> Option<&Budget> {
        self.budgets.iter().find(|budget| budget.id == id)
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }
}

/// A previously persisted snapshot in which any top-level key may be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PartialState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Vec<Transaction>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Category>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budgets: Option<Vec<Budget>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loading: Option<bool>,
    /// `Some(None)` when the blob carried an explicit `null`.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub error: Option<Option<String>>,
}

impl From<AppState> for PartialState {
    fn from(state: AppState) -> Self {
        Self {
            transactions: Some(state.transactions),
            categories: Some(state.categories),
            budgets: Some(state.budgets),
            loading: Some(state.loading),
            error: Some(state.error),
        }
    }
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
