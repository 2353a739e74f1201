use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::category::OTHER_CATEGORY_ID;
use crate::domain::common::{new_id, Identifiable};

/// A single signed monetary event. Negative amounts are expenses, positive amounts income.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", from = "TransactionRecord")]
pub struct Transaction {
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    /// Category id; may reference a category that no longer exists.
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        date: NaiveDate,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: new_id(),
            description: description.into(),
            amount,
            date,
            category: category.into(),
            created_at: Utc::now(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn kind(&self) -> TransactionKind {
        if self.amount < 0.0 {
            TransactionKind::Expense
        } else {
            TransactionKind::Income
        }
    }

    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }

    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }

    /// Unsigned size of the transaction.
    pub fn magnitude(&self) -> f64 {
        self.amount.abs()
    }

    /// Date used for every period and ordering decision.
    pub fn effective_date(&self) -> NaiveDate {
        self.date
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Direction of a transaction, derived from the sign of its amount.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Applies this direction to an unsigned magnitude.
    pub fn signed(self, magnitude: f64) -> f64 {
        match self {
            TransactionKind::Income => magnitude.abs(),
            TransactionKind::Expense => -magnitude.abs(),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

/// Shape accepted when decoding persisted transactions, including older records that
/// used `text` instead of `description` or carried no `date`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransactionRecord {
    #[serde(default)]
    id: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    text: Option<String>,
    amount: f64,
    #[serde(default)]
    date: Option<NaiveDate>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

impl From<TransactionRecord> for Transaction {
    fn from(record: TransactionRecord) -> Self {
        let created_at = record.created_at.unwrap_or_default();
        Self {
            id: record.id,
            description: record.description.or(record.text).unwrap_or_default(),
            amount: record.amount,
            date: record.date.unwrap_or_else(|| created_at.date_naive()),
            category: record
                .category
                .filter(|category| !category.is_empty())
                .unwrap_or_else(|| OTHER_CATEGORY_ID.to_string()),
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let on = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let txn = Transaction::new("Coffee", -3.5, on, "food").with_id("t1");
        let value = serde_json::to_value(&txn).unwrap();
        assert_eq!(value["id"], "t1");
        assert_eq!(value["date"], "2024-03-01");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn legacy_text_field_becomes_description() {
        let json = r#"{"id":"a","text":"Salary","amount":1200,"date":"2024-01-31","category":"other","createdAt":"2024-01-31T08:00:00Z"}"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.description, "Salary");
        assert_eq!(txn.kind(), TransactionKind::Income);
    }

    #[test]
    fn description_wins_when_text_is_also_present() {
        let json = r#"{"id":"d","description":"Rent","text":"Old rent","amount":-900,"date":"2024-03-01"}"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.description, "Rent");
    }

    #[test]
    fn missing_date_falls_back_to_creation_day() {
        let json = r#"{"id":"b","description":"Taxi","amount":-20,"category":"transportation","createdAt":"2024-02-14T23:10:00Z"}"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2024, 2, 14).unwrap());
    }

    #[test]
    fn missing_category_becomes_other() {
        let json = r#"{"id":"c","description":"Misc","amount":-1,"date":"2024-02-14"}"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.category, OTHER_CATEGORY_ID);
        assert_eq!(txn.created_at, DateTime::<Utc>::default());
    }

    #[test]
    fn kind_signs_magnitudes() {
        assert_eq!(TransactionKind::Expense.signed(12.0), -12.0);
        assert_eq!(TransactionKind::Income.signed(-12.0), 12.0);
    }
}
