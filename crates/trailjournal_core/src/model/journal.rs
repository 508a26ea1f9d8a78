//! Free-text journal record.
//!
//! # Responsibility
//! - Define the dated journal entry and its form draft.
//! - Normalize hashtag input into clean tokens.
//!
//! # Invariants
//! - Hashtags are stored without the leading `#`.
//! - A journal entry has no stored link to a daily entry; association is
//!   a derived calendar-day lookup at read time.

use crate::model::{fresh_entry_id, utc_day_start, DatedRecord, EntryId, ValidationError};
use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static HASHTAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#?([\w][\w-]*)$").expect("valid hashtag regex"));

/// One dated journal entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: EntryId,
    pub date: DateTime<Utc>,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashtags: Option<Vec<String>>,
    /// Photo reference strings; the core stores them opaquely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<String>>,
}

impl DatedRecord for JournalEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

/// Form draft for a journal entry.
#[derive(Debug, Clone, Default)]
pub struct JournalDraft {
    pub date: Option<NaiveDate>,
    pub content: Option<String>,
    /// Raw comma-separated hashtag field as typed into the form.
    pub hashtags_input: Option<String>,
    pub photos: Option<Vec<String>>,
}

impl JournalDraft {
    /// Seals the draft into a new entry with a fresh id.
    pub fn finalize(self) -> Result<JournalEntry, ValidationError> {
        self.finalize_with_id(fresh_entry_id())
    }

    /// Seals the draft while keeping an existing record identity.
    pub fn finalize_with_id(self, id: EntryId) -> Result<JournalEntry, ValidationError> {
        let date = self.date.ok_or(ValidationError::MissingField("date"))?;
        let content = self
            .content
            .filter(|text| !text.trim().is_empty())
            .ok_or(ValidationError::MissingField("content"))?;

        let hashtags = self
            .hashtags_input
            .map(|raw| normalize_hashtags(&raw))
            .filter(|tags| !tags.is_empty());

        Ok(JournalEntry {
            id,
            date: utc_day_start(date),
            content,
            hashtags,
            photos: self.photos.filter(|photos| !photos.is_empty()),
        })
    }
}

/// Splits comma-separated hashtag input into normalized tokens.
///
/// Tokens are trimmed, a leading `#` is stripped, non-word tokens are
/// dropped, and duplicates are removed case-insensitively while the
/// first-seen casing is kept.
pub fn normalize_hashtags(input: &str) -> Vec<String> {
    let mut seen = Vec::new();
    let mut tags = Vec::new();
    for raw in input.split(',') {
        let Some(captures) = HASHTAG_RE.captures(raw.trim()) else {
            continue;
        };
        let tag = captures[1].to_string();
        let folded = tag.to_ascii_lowercase();
        if seen.contains(&folded) {
            continue;
        }
        seen.push(folded);
        tags.push(tag);
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::{normalize_hashtags, JournalDraft};
    use crate::model::ValidationError;
    use chrono::NaiveDate;

    #[test]
    fn normalize_strips_hash_and_dedupes() {
        let tags = normalize_hashtags("#TrailMagic, trailmagic , HYOH,, not a tag");
        assert_eq!(tags, vec!["TrailMagic".to_string(), "HYOH".to_string()]);
    }

    #[test]
    fn finalize_requires_nonempty_content() {
        let draft = JournalDraft {
            date: NaiveDate::from_ymd_opt(2024, 6, 10),
            content: Some("   ".to_string()),
            ..JournalDraft::default()
        };
        let err = draft.finalize().unwrap_err();
        assert_eq!(err, ValidationError::MissingField("content"));
    }

    #[test]
    fn finalize_drops_empty_hashtag_set() {
        let draft = JournalDraft {
            date: NaiveDate::from_ymd_opt(2024, 6, 10),
            content: Some("made camp early".to_string()),
            hashtags_input: Some(" , ,".to_string()),
            ..JournalDraft::default()
        };
        let entry = draft.finalize().unwrap();
        assert_eq!(entry.hashtags, None);
    }
}
