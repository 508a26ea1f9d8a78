//! Domain records for the four journal collections.
//!
//! # Responsibility
//! - Define the canonical record shapes persisted under each storage key.
//! - Provide one draft type per record with a single validating
//!   `finalize` step.
//!
//! # Invariants
//! - `id` is assigned at creation and never reassigned.
//! - Serialized shapes stay loadable for records written before newer
//!   optional fields existed.
//! - Record dates are UTC instants; drafts normalize form dates to UTC
//!   midnight.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub mod daily;
pub mod expense;
pub mod gear;
pub mod journal;

/// Opaque record identifier.
///
/// Kept as a string so records persisted by earlier builds (which used
/// plain numeric tokens) remain loadable.
pub type EntryId = String;

/// Mints a fresh identifier for a newly created record.
pub fn fresh_entry_id() -> EntryId {
    Uuid::new_v4().to_string()
}

/// Common surface every journal record exposes to the collection layer.
pub trait DatedRecord {
    fn id(&self) -> &str;
    fn date(&self) -> DateTime<Utc>;

    /// UTC calendar day used for display sorting and cross-collection
    /// joins.
    fn calendar_day(&self) -> NaiveDate {
        self.date().date_naive()
    }
}

/// Draft finalization failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was left empty.
    MissingField(&'static str),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "required field `{field}` is missing"),
        }
    }
}

impl Error for ValidationError {}

/// Normalizes a calendar date to its UTC midnight instant.
///
/// All record dates pass through here, so calendar-day equality between
/// collections compares UTC days regardless of the host locale.
pub fn utc_day_start(day: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&day.and_time(NaiveTime::MIN))
}
