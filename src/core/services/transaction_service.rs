//! Business logic helpers for building and listing transactions.

use chrono::NaiveDate;

use crate::analytics::{filter_transactions, TransactionQuery};
use crate::core::services::{ServiceError, ServiceResult};
use crate::core::time::Clock;
use crate::domain::{common::new_id, Transaction, TransactionKind, OTHER_CATEGORY_ID};
use crate::store::AppState;

/// Raw transaction input as entered by a user. `amount` is a magnitude; the sign comes
/// from `kind`.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub category: String,
    pub kind: TransactionKind,
}

impl TransactionDraft {
    /// An empty expense dated `today` in the catch-all category.
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            description: String::new(),
            amount: 0.0,
            date: today,
            category: OTHER_CATEGORY_ID.to_string(),
            kind: TransactionKind::Expense,
        }
    }
}

impl From<&Transaction> for TransactionDraft {
    fn from(txn: &Transaction) -> Self {
        Self {
            description: txn.description.clone(),
            amount: txn.magnitude(),
            date: txn.date,
            category: txn.category.clone(),
            kind: txn.kind(),
        }
    }
}

/// Validates drafts into transactions. The store itself accepts anything; this is the
/// place input gets checked.
pub struct TransactionService;

impl TransactionService {
    /// Builds a new transaction with a fresh id and creation timestamp.
    pub fn create(draft: TransactionDraft, clock: &dyn Clock) -> ServiceResult<Transaction> {
        let (description, amount) = Self::validate(&draft)?;
        Ok(Transaction {
            id: new_id(),
            description,
            amount,
            date: draft.date,
            category: draft.category,
            created_at: clock.now(),
        })
    }

    /// Builds the replacement for `existing`, keeping its id and creation timestamp.
    pub fn revise(existing: &Transaction, draft: TransactionDraft) -> ServiceResult<Transaction> {
        let (description, amount) = Self::validate(&draft)?;
        Ok(Transaction {
            id: existing.id.clone(),
            description,
            amount,
            date: draft.date,
            category: draft.category,
            created_at: existing.created_at,
        })
    }

    /// Returns the transaction list view for `query`.
    pub fn list<'a>(state: &'a AppState, query: &TransactionQuery) -> Vec<&'a Transaction> {
        filter_transactions(&state.transactions, query)
    }

    fn validate(draft: &TransactionDraft) -> ServiceResult<(String, f64)> {
        let description = draft.description.trim();
        if description.is_empty() {
            return Err(ServiceError::Invalid("Description is required".into()));
        }
        if !draft.amount.is_finite() || draft.amount <= 0.0 {
            return Err(ServiceError::Invalid(
                "Amount must be a positive number".into(),
            ));
        }
        if draft.category.trim().is_empty() {
            return Err(ServiceError::Invalid("Category is required".into()));
        }
        Ok((description.to_string(), draft.kind.signed(draft.amount)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::time::FixedClock;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn draft(description: &str, amount: f64, kind: TransactionKind) -> TransactionDraft {
        TransactionDraft {
            description: description.into(),
            amount,
            kind,
            category: "food".into(),
            ..TransactionDraft::blank(today())
        }
    }

    #[test]
    fn create_applies_sign_and_trims() {
        let clock = FixedClock::on(today());
        let txn =
            TransactionService::create(draft("  Lunch ", 12.5, TransactionKind::Expense), &clock)
                .expect("valid draft");
        assert_eq!(txn.description, "Lunch");
        assert_eq!(txn.amount, -12.5);
        assert_eq!(txn.created_at, clock.0);
        assert!(!txn.id.is_empty());
    }

    #[test]
    fn create_rejects_blank_description_and_bad_amounts() {
        let clock = FixedClock::on(today());
        let err = TransactionService::create(draft("   ", 5.0, TransactionKind::Income), &clock)
            .expect_err("blank description");
        assert!(
            matches!(err, ServiceError::Invalid(ref message) if message.contains("Description")),
            "unexpected error: {err:?}"
        );
        for amount in [0.0, -3.0, f64::NAN] {
            let result =
                TransactionService::create(draft("Pay", amount, TransactionKind::Income), &clock);
            assert!(result.is_err(), "amount {amount} accepted");
        }
    }

    #[test]
    fn revise_keeps_identity() {
        let clock = FixedClock::on(today());
        let original =
            TransactionService::create(draft("Taxi", 20.0, TransactionKind::Expense), &clock)
                .unwrap();
        let mut edit = TransactionDraft::from(&original);
        assert_eq!(edit.amount, 20.0);
        edit.kind = TransactionKind::Income;
        edit.description = "Refund".into();
        let revised = TransactionService::revise(&original, edit).unwrap();
        assert_eq!(revised.id, original.id);
        assert_eq!(revised.created_at, original.created_at);
        assert_eq!(revised.amount, 20.0);
    }

    #[test]
    fn list_applies_query() {
        let clock = FixedClock::on(today());
        let mut state = AppState::default();
        state.transactions = vec![
            TransactionService::create(draft("Coffee", 3.0, TransactionKind::Expense), &clock)
                .unwrap(),
            TransactionService::create(draft("Refund", 3.0, TransactionKind::Income), &clock)
                .unwrap(),
        ];
        let query = TransactionQuery::default().of_kind(crate::analytics::KindFilter::Income);
        let listed = TransactionService::list(&state, &query);
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].description, "Refund");
    }
}
