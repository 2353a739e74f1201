use chrono::NaiveDate;

use crate::analytics::{budget_performance, budgets_by_period, BudgetPerformance};
use crate::core::time::Clock;
use crate::domain::{common::new_id, Budget, YearMonth};
use crate::store::AppState;

use super::{ServiceError, ServiceResult};

/// Budget input as entered by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetDraft {
    pub category_id: String,
    pub amount: f64,
    pub month: u32,
    pub year: i32,
}

impl From<&Budget> for BudgetDraft {
    fn from(budget: &Budget) -> Self {
        Self {
            category_id: budget.category_id.clone(),
            amount: budget.amount,
            month: budget.month,
            year: budget.year,
        }
    }
}

pub struct BudgetService;

impl BudgetService {
    pub fn create(draft: BudgetDraft, clock: &dyn Clock) -> ServiceResult<Budget> {
        Self::validate(&draft)?;
        Ok(Budget {
            id: new_id(),
            category_id: draft.category_id,
            amount: draft.amount,
            month: draft.month,
            year: draft.year,
            created_at: clock.now(),
        })
    }

    /// Builds the replacement for `existing`, keeping its id. The creation timestamp is
    /// refreshed, matching how budgets are re-saved from the edit form.
    pub fn revise(
        existing: &Budget,
        draft: BudgetDraft,
        clock: &dyn Clock,
    ) -> ServiceResult<Budget> {
        let mut budget = Self::create(draft, clock)?;
        budget.id = existing.id.clone();
        Ok(budget)
    }

    /// Budget versus actual for the month containing `today`.
    pub fn performance(state: &AppState, today: NaiveDate) -> Vec<BudgetPerformance> {
        budget_performance(
            &state.transactions,
            &state.budgets,
            &state.categories,
            YearMonth::of(today),
        )
    }

    /// All budgets, newest period first.
    pub fn list(state: &AppState) -> Vec<&Budget> {
        budgets_by_period(&state.budgets)
    }

    fn validate(draft: &BudgetDraft) -> ServiceResult<()> {
        if draft.category_id.trim().is_empty() {
            return Err(ServiceError::Invalid("Category is required".into()));
        }
        if !draft.amount.is_finite() || draft.amount < 0.0 {
            return Err(ServiceError::Invalid(
                "Budget amount must be zero or more".into(),
            ));
        }
        if YearMonth::new(draft.year, draft.month).is_none() {
            return Err(ServiceError::Invalid(format!(
                "Month {} is out of range",
                draft.month
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::time::FixedClock;

    fn draft(month: u32, amount: f64) -> BudgetDraft {
        BudgetDraft {
            category_id: "food".into(),
            amount,
            month,
            year: 2024,
        }
    }

    #[test]
    fn rejects_invalid_months_and_negative_amounts() {
        let clock = FixedClock::on(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert!(BudgetService::create(draft(13, 10.0), &clock).is_err());
        assert!(BudgetService::create(draft(3, -1.0), &clock).is_err());
        assert!(BudgetService::create(draft(3, 0.0), &clock).is_ok());
    }

    #[test]
    fn revise_preserves_id() {
        let clock = FixedClock::on(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        let original = BudgetService::create(draft(3, 100.0), &clock).unwrap();
        let revised = BudgetService::revise(&original, draft(4, 250.0), &clock).unwrap();
        assert_eq!(revised.id, original.id);
        assert_eq!(revised.month, 4);
        assert_eq!(BudgetDraft::from(&revised).amount, 250.0);
    }

    #[test]
    fn performance_and_listing_read_the_state() {
        let clock = FixedClock::on(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        let mut state = AppState::default();
        state.budgets = vec![
            BudgetService::create(draft(2, 50.0), &clock).unwrap(),
            BudgetService::create(draft(3, 80.0), &clock).unwrap(),
        ];
        let listed: Vec<_> = BudgetService::list(&state).iter().map(|b| b.month).collect();
        assert_eq!(listed, vec![3, 2]);

        let today = NaiveDate::from_ymd_opt(2024, 3, 18).unwrap();
        let report = BudgetService::performance(&state, today);
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].category, "Food & Dining");
        assert_eq!(report[0].remaining, 80.0);
    }
}
