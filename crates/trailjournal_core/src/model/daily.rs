//! Daily hiking log record.
//!
//! # Responsibility
//! - Define the per-day mileage record and its form draft.
//!
//! # Invariants
//! - `miles == 0.0` marks a zero day; the flag is derived, never stored.
//! - Optional fields absent from older persisted records load as `None`.

use crate::model::{fresh_entry_id, utc_day_start, DatedRecord, EntryId, ValidationError};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One day on trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyEntry {
    pub id: EntryId,
    pub date: DateTime<Utc>,
    /// Trail section number the day belongs to.
    pub section: i64,
    pub start_location: String,
    pub end_location: String,
    pub miles: f64,
    /// Wall-clock departure, `HH:MM`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Total break time in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_time: Option<i64>,
    /// Feet climbed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_gain: Option<f64>,
    /// Feet descended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_loss: Option<f64>,
    /// Elevation at camp, feet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_elevation: Option<f64>,
    /// Previous night's sleep, 1-5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_quality: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_raining: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_trail_magic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DailyEntry {
    /// Whether this day covered no trail miles.
    pub fn is_zero_day(&self) -> bool {
        self.miles == 0.0
    }
}

impl DatedRecord for DailyEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

/// Form draft for a daily log entry.
///
/// Every field is optional while the form is open; `finalize` is the
/// single step that validates required input and applies defaults.
#[derive(Debug, Clone, Default)]
pub struct DailyDraft {
    pub date: Option<NaiveDate>,
    pub section: Option<i64>,
    pub start_location: Option<String>,
    pub end_location: Option<String>,
    pub miles: Option<f64>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub break_time: Option<i64>,
    pub elevation_gain: Option<f64>,
    pub elevation_loss: Option<f64>,
    pub final_elevation: Option<f64>,
    pub sleep_quality: Option<i64>,
    pub weather: Option<String>,
    pub is_raining: Option<bool>,
    pub has_trail_magic: Option<bool>,
    pub notes: Option<String>,
}

impl DailyDraft {
    /// Seals the draft into a new entry with a fresh id.
    pub fn finalize(self) -> Result<DailyEntry, ValidationError> {
        self.finalize_with_id(fresh_entry_id())
    }

    /// Seals the draft while keeping an existing record identity. Used
    /// by the edit path, which overwrites the stored record wholesale.
    pub fn finalize_with_id(self, id: EntryId) -> Result<DailyEntry, ValidationError> {
        let date = self.date.ok_or(ValidationError::MissingField("date"))?;
        Ok(DailyEntry {
            id,
            date: utc_day_start(date),
            section: self.section.unwrap_or(1),
            start_location: self.start_location.unwrap_or_default(),
            end_location: self.end_location.unwrap_or_default(),
            miles: self.miles.unwrap_or(0.0),
            start_time: self.start_time,
            end_time: self.end_time,
            break_time: self.break_time,
            elevation_gain: self.elevation_gain,
            elevation_loss: self.elevation_loss,
            final_elevation: self.final_elevation,
            sleep_quality: self.sleep_quality,
            weather: self.weather,
            is_raining: self.is_raining,
            has_trail_magic: self.has_trail_magic,
            notes: self.notes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::DailyDraft;
    use crate::model::ValidationError;
    use chrono::NaiveDate;

    #[test]
    fn finalize_requires_date() {
        let err = DailyDraft::default().finalize().unwrap_err();
        assert_eq!(err, ValidationError::MissingField("date"));
    }

    #[test]
    fn finalize_applies_defaults() {
        let entry = DailyDraft {
            date: NaiveDate::from_ymd_opt(2024, 6, 10),
            ..DailyDraft::default()
        }
        .finalize()
        .unwrap();

        assert!(!entry.id.is_empty());
        assert_eq!(entry.section, 1);
        assert_eq!(entry.miles, 0.0);
        assert!(entry.is_zero_day());
        assert_eq!(entry.start_location, "");
        assert_eq!(entry.sleep_quality, None);
    }
}
