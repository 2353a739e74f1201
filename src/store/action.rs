use std::fmt;

use crate::domain::{Budget, Category, Transaction};

use super::state::PartialState;

/// Every state transition the store accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    LoadState(PartialState),
    AddTransaction(Transaction),
    DeleteTransaction(String),
    UpdateTransaction { id: String, transaction: Transaction },
    AddBudget(Budget),
    UpdateBudget { id: String, budget: Budget },
    DeleteBudget(String),
    AddCategory(Category),
    SetLoading(bool),
    SetError(Option<String>),
}

impl Action {
    /// Stable tag used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::LoadState(_) => "LOAD_STATE",
            Action::AddTransaction(_) => "ADD_TRANSACTION",
            Action::DeleteTransaction(_) => "DELETE_TRANSACTION",
            Action::UpdateTransaction { .. } => "UPDATE_TRANSACTION",
            Action::AddBudget(_) => "ADD_BUDGET",
            Action::UpdateBudget { .. } => "UPDATE_BUDGET",
            Action::DeleteBudget(_) => "DELETE_BUDGET",
            Action::AddCategory(_) => "ADD_CATEGORY",
            Action::SetLoading(_) => "SET_LOADING",
            Action::SetError(_) => "SET_ERROR",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
