//! Domain types representing spending categories.

use serde::{Deserialize, Serialize};

use crate::domain::common::Identifiable;

/// Identifier of the catch-all seed category.
pub const OTHER_CATEGORY_ID: &str = "other";

/// Label used for transactions whose category cannot be resolved.
pub const TRANSACTION_FALLBACK_LABEL: &str = "Other";

/// Label used for budgets whose category cannot be resolved.
pub const BUDGET_FALLBACK_LABEL: &str = "Unknown";

/// Groups expense activity for reporting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Display hint only; the core never interprets it.
    pub color: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }
}

impl Identifiable for Category {
    fn id(&self) -> &str {
        &self.id
    }
}

const SEED: [(&str, &str, &str); 9] = [
    ("food", "Food & Dining", "#FF6B6B"),
    ("transportation", "Transportation", "#4ECDC4"),
    ("shopping", "Shopping", "#45B7D1"),
    ("entertainment", "Entertainment", "#96CEB4"),
    ("bills", "Bills & Utilities", "#FFEAA7"),
    ("healthcare", "Healthcare", "#DDA0DD"),
    ("education", "Education", "#98D8C8"),
    ("travel", "Travel", "#F7DC6F"),
    (OTHER_CATEGORY_ID, "Other", "#AED6F1"),
];

/// The fixed category set present at first run.
pub fn seed_categories() -> Vec<Category> {
    SEED.iter()
        .map(|(id, name, color)| Category::new(*id, *name, *color))
        .collect()
}

/// Finds a category by id.
pub fn find_category<'a>(categories: &'a [Category], id: &str) -> Option<&'a Category> {
    categories.iter().find(|category| category.id == id)
}

/// Resolves a category name, falling back to `fallback` for dangling ids.
pub fn category_label<'a>(categories: &'a [Category], id: &str, fallback: &'a str) -> &'a str {
    find_category(categories, id)
        .map(|category| category.name.as_str())
        .unwrap_or(fallback)
}
