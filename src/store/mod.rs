//! The single owner of transactions, categories, and budgets.
//!
//! State only changes through [`Store::dispatch`], which runs the pure [`reduce`]
//! transition, hands the result to persistence, and then notifies subscribers. Readers
//! take an [`Arc`] snapshot, which later mutations never touch.

pub mod action;
pub mod reducer;
pub mod state;

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{Budget, Category, Transaction};
use crate::storage::{NoPersistence, StatePersistence};

pub use action::Action;
pub use reducer::reduce;
pub use state::{AppState, PartialState};

/// Callback invoked with every committed snapshot.
pub type Subscriber = Box<dyn Fn(&Arc<AppState>)>;

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct Store {
    state: Arc<AppState>,
    persistence: Box<dyn StatePersistence>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl Store {
    /// Creates a store holding the default seeded state without consulting persistence.
    pub fn new(persistence: Box<dyn StatePersistence>) -> Self {
        Self::with_state(AppState::default(), persistence)
    }

    pub fn with_state(state: AppState, persistence: Box<dyn StatePersistence>) -> Self {
        Self {
            state: Arc::new(state),
            persistence,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Creates a store and restores the persisted snapshot, if one can be read.
    pub fn open(persistence: Box<dyn StatePersistence>) -> Self {
        let mut store = Self::new(persistence);
        match store.persistence.load() {
            Some(partial) => {
                store.load_state(partial);
                info!(
                    transactions = store.state.transactions.len(),
                    budgets = store.state.budgets.len(),
                    "restored persisted state"
                );
            }
            None => info!("starting from default state"),
        }
        store
    }

    /// A store that never persists.
    pub fn ephemeral() -> Self {
        Self::new(Box::new(NoPersistence))
    }

    /// The current state, frozen.
    pub fn snapshot(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Applies `action`, persists the result, and notifies subscribers.
    pub fn dispatch(&mut self, action: Action) -> Arc<AppState> {
        debug!(action = action.name(), "dispatch");
        let next = Arc::new(reduce(&self.state, action));
        self.state = Arc::clone(&next);
        self.persistence.save(&next);
        for (_, subscriber) in &self.subscribers {
            subscriber(&next);
        }
        next
    }

    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: Fn(&Arc<AppState>) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    pub fn add_transaction(&mut self, transaction: Transaction) -> Arc<AppState> {
        self.dispatch(Action::AddTransaction(transaction))
    }

    pub fn delete_transaction(&mut self, id: &str) -> Arc<AppState> {
        self.dispatch(Action::DeleteTransaction(id.to_string()))
    }

    /// Replaces the matching transaction with `transaction` as given, including its id.
    pub fn update_transaction(&mut self, id: &str, transaction: Transaction) -> Arc<AppState> {
        if transaction.id != id {
            debug!(from = id, to = %transaction.id, "transaction update changes identity");
        }
        self.dispatch(Action::UpdateTransaction {
            id: id.to_string(),
            transaction,
        })
    }

    pub fn add_budget(&mut self, budget: Budget) -> Arc<AppState> {
        self.dispatch(Action::AddBudget(budget))
    }

    /// Replaces the matching budget with `budget` as given, including its id.
    pub fn update_budget(&mut self, id: &str, budget: Budget) -> Arc<AppState> {
        if budget.id != id {
            debug!(from = id, to = %budget.id, "budget update changes identity");
        }
        self.dispatch(Action::UpdateBudget {
            id: id.to_string(),
            budget,
        })
    }

    pub fn delete_budget(&mut self, id: &str) -> Arc<AppState> {
        self.dispatch(Action::DeleteBudget(id.to_string()))
    }

    pub fn add_category(&mut self, category: Category) -> Arc<AppState> {
        self.dispatch(Action::AddCategory(category))
    }

    pub fn load_state(&mut self, partial: PartialState) -> Arc<AppState> {
        self.dispatch(Action::LoadState(partial))
    }

    pub fn set_loading(&mut self, loading: bool) -> Arc<AppState> {
        self.dispatch(Action::SetLoading(loading))
    }

    pub fn set_error(&mut self, error: Option<String>) -> Arc<AppState> {
        self.dispatch(Action::SetError(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn coffee(id: &str) -> Transaction {
        Transaction::new(
            "Coffee",
            -4.0,
            NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            "food",
        )
        .with_id(id)
    }

    #[test]
    fn snapshots_are_frozen() {
        let mut store = Store::ephemeral();
        let before = store.snapshot();
        store.add_transaction(coffee("t1"));
        assert!(before.transactions.is_empty());
        assert_eq!(store.snapshot().transactions.len(), 1);
    }

    #[test]
    fn subscribers_see_every_transition() {
        let mut store = Store::ephemeral();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = store.subscribe(move |state| sink.borrow_mut().push(state.transactions.len()));

        store.add_transaction(coffee("t1"));
        store.add_transaction(coffee("t2"));
        store.delete_transaction("missing");
        assert_eq!(*seen.borrow(), vec![1, 2, 2]);

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.delete_transaction("t1");
        assert_eq!(seen.borrow().len(), 3);
    }

    #[test]
    fn dispatch_returns_committed_state() {
        let mut store = Store::ephemeral();
        let returned = store.set_loading(true);
        assert!(Arc::ptr_eq(&returned, &store.snapshot()));
    }
}
