//! Gear inventory record.
//!
//! # Responsibility
//! - Define the gear item record and its form draft.
//!
//! # Invariants
//! - `weight` is ounces; items without a weight are excluded from base
//!   weight sums as zero.

use crate::model::{fresh_entry_id, utc_day_start, DatedRecord, EntryId, ValidationError};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Default category applied when the form leaves it blank.
pub const DEFAULT_GEAR_CATEGORY: &str = "Misc";

/// One piece of gear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GearItem {
    pub id: EntryId,
    /// Date the item was acquired or swapped in.
    pub date: DateTime<Utc>,
    pub name: String,
    pub category: String,
    pub price: f64,
    /// Ounces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl DatedRecord for GearItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

/// Form draft for a gear item.
#[derive(Debug, Clone, Default)]
pub struct GearDraft {
    pub date: Option<NaiveDate>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub weight: Option<f64>,
}

impl GearDraft {
    /// Seals the draft into a new gear item with a fresh id.
    pub fn finalize(self) -> Result<GearItem, ValidationError> {
        self.finalize_with_id(fresh_entry_id())
    }

    /// Seals the draft while keeping an existing record identity.
    pub fn finalize_with_id(self, id: EntryId) -> Result<GearItem, ValidationError> {
        let date = self.date.ok_or(ValidationError::MissingField("date"))?;
        let name = self
            .name
            .filter(|name| !name.trim().is_empty())
            .ok_or(ValidationError::MissingField("name"))?;

        Ok(GearItem {
            id,
            date: utc_day_start(date),
            name,
            category: self
                .category
                .filter(|category| !category.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_GEAR_CATEGORY.to_string()),
            price: self.price.unwrap_or(0.0),
            weight: self.weight,
        })
    }
}
