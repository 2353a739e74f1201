//! Pure state transitions.

use crate::domain::Identifiable;

use super::{action::Action, state::AppState};

/// Applies `action` to `state`, returning the next state. Never fails and never mutates
/// its input.
pub fn reduce(state: &AppState, action: Action) -> AppState {
    let mut next = state.clone();
    match action {
        Action::LoadState(partial) => return next.merge(partial),
        Action::AddTransaction(transaction) => next.transactions.insert(0, transaction),
        Action::DeleteTransaction(id) => remove_all(&mut next.transactions, &id),
        Action::UpdateTransaction { id, transaction } => {
            replace_all(&mut next.transactions, &id, &transaction)
        }
        Action::AddBudget(budget) => next.budgets.insert(0, budget),
        Action::UpdateBudget { id, budget } => replace_all(&mut next.budgets, &id, &budget),
        Action::DeleteBudget(id) => remove_all(&mut next.budgets, &id),
        Action::AddCategory(category) => next.categories.push(category),
        Action::SetLoading(loading) => next.loading = loading,
        Action::SetError(error) => next.error = error,
    }
    next
}

fn remove_all<T: Identifiable>(items: &mut Vec<T>, id: &str) {
    items.retain(|item| item.id() != id);
}

/// Overwrites every record carrying `id`; the replacement keeps whatever id it has.
fn replace_all<T: Identifiable + Clone>(items: &mut [T], id: &str, replacement: &T) {
    for slot in items.iter_mut().filter(|item| item.id() == id) {
        *slot = replacement.clone();
    }
}
