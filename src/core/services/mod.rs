pub mod budget_service;
pub mod category_service;
pub mod insight_service;
pub mod summary_service;
pub mod transaction_service;

pub use budget_service::{BudgetDraft, BudgetService};
pub use category_service::CategoryService;
pub use insight_service::{InsightReport, InsightService};
pub use summary_service::{DashboardReport, RecentTransaction, SummaryService};
pub use transaction_service::{TransactionDraft, TransactionService};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{0}")]
    Invalid(String),
}
