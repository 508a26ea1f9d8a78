//! Expense record.
//!
//! # Responsibility
//! - Define the dated expense record and its form draft.
//!
//! # Invariants
//! - `category` is free-form and only used for display grouping.

use crate::model::{fresh_entry_id, utc_day_start, DatedRecord, EntryId, ValidationError};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Default category applied when the form leaves it blank.
pub const DEFAULT_EXPENSE_CATEGORY: &str = "Food";

/// One dated expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: EntryId,
    pub date: DateTime<Utc>,
    pub category: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl DatedRecord for Expense {
    fn id(&self) -> &str {
        &self.id
    }

    fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

/// Form draft for an expense.
#[derive(Debug, Clone, Default)]
pub struct ExpenseDraft {
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub description: Option<String>,
}

impl ExpenseDraft {
    /// Seals the draft into a new expense with a fresh id.
    pub fn finalize(self) -> Result<Expense, ValidationError> {
        self.finalize_with_id(fresh_entry_id())
    }

    /// Seals the draft while keeping an existing record identity.
    pub fn finalize_with_id(self, id: EntryId) -> Result<Expense, ValidationError> {
        let date = self.date.ok_or(ValidationError::MissingField("date"))?;
        Ok(Expense {
            id,
            date: utc_day_start(date),
            category: self
                .category
                .filter(|category| !category.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_EXPENSE_CATEGORY.to_string()),
            amount: self.amount.unwrap_or(0.0),
            description: self.description.filter(|text| !text.trim().is_empty()),
        })
    }
}
