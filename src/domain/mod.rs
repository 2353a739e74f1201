//! Domain models for transactions, categories, and budgets.

pub mod budget;
pub mod category;
pub mod common;
pub mod period;
pub mod transaction;

pub use budget::Budget;
pub use category::{
    category_label, find_category, seed_categories, Category, BUDGET_FALLBACK_LABEL,
    OTHER_CATEGORY_ID, TRANSACTION_FALLBACK_LABEL,
};
pub use common::Identifiable;
pub use period::{MonthWindow, YearMonth};
pub use transaction::{Transaction, TransactionKind};
