use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{new_id, Identifiable};
use crate::domain::period::YearMonth;

/// A spending ceiling for one category in one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", from = "BudgetRecord")]
pub struct Budget {
    pub id: String,
    pub category_id: String,
    /// Unsigned ceiling.
    pub amount: f64,
    pub month: u32,
    pub year: i32,
    pub created_at: DateTime<Utc>,
}

impl Budget {
    pub fn new(category_id: impl Into<String>, amount: f64, month: u32, year: i32) -> Self {
        Self {
            id: new_id(),
            category_id: category_id.into(),
            amount,
            month,
            year,
            created_at: Utc::now(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn applies_to(&self, period: YearMonth) -> bool {
        self.month == period.month && self.year == period.year
    }

    pub fn period(&self) -> Option<YearMonth> {
        YearMonth::new(self.year, self.month)
    }

    /// Long label for the budget month, e.g. `March 2024`.
    pub fn period_label(&self) -> String {
        self.period()
            .map(YearMonth::long_label)
            .unwrap_or_else(|| format!("{:04}-{:02}", self.year, self.month))
    }
}

impl Identifiable for Budget {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Shape accepted when decoding persisted budgets. Older records carry only
/// `categoryId`, `amount`, `month` and `year`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BudgetRecord {
    #[serde(default)]
    id: String,
    category_id: String,
    amount: f64,
    month: u32,
    year: i32,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

impl From<BudgetRecord> for Budget {
    fn from(record: BudgetRecord) -> Self {
        Self {
            id: record.id,
            category_id: record.category_id,
            amount: record.amount,
            month: record.month,
            year: record.year,
            created_at: record.created_at.unwrap_or_default(),
        }
    }
}
