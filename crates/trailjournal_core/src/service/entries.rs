//! Generic collection CRUD shared by every screen.
//!
//! # Responsibility
//! - Append, overwrite-by-id, and confirmation-gated removal over one
//!   bound collection.
//! - Descending-by-date display ordering computed on read.
//!
//! # Invariants
//! - Stored order is insertion order; display sorting never mutates it.
//! - Edits replace the whole record whose id matches, nothing else.
//! - A cancelled confirmation leaves the collection untouched.

use crate::model::{DatedRecord, EntryId};
use crate::storage::collection::{CollectionHandle, CollectionStore, LoadOutcome};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Semantic error for record-level operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    NotFound(EntryId),
}

impl Display for EntryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "record not found: {id}"),
        }
    }
}

impl Error for EntryError {}

/// Caller decision for a destructive action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

/// Result of a confirmation-gated removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    Cancelled,
    NotFound,
}

/// One screen's read/write surface over a named collection.
pub struct EntryCollection<'s, T> {
    handle: CollectionHandle<'s, Vec<T>>,
}

impl<'s, T> EntryCollection<'s, T>
where
    T: DatedRecord + Serialize + DeserializeOwned + Clone + 'static,
{
    /// Binds `key` in the store with an empty default.
    pub fn bind(store: &'s CollectionStore, key: &str) -> Self {
        Self {
            handle: store.bind(key, Vec::new()),
        }
    }

    /// Records in stored (insertion) order.
    pub fn records(&self) -> Vec<T> {
        self.handle.get()
    }

    /// Records sorted descending by date for display. Stable, so records
    /// sharing a date keep their insertion order.
    pub fn sorted_for_display(&self) -> Vec<T> {
        let mut records = self.handle.get();
        records.sort_by(|a, b| b.date().cmp(&a.date()));
        records
    }

    /// Appends a finalized record and returns its id.
    pub fn append(&self, record: T) -> EntryId {
        let id = record.id().to_string();
        self.handle.update(|mut records| {
            records.push(record);
            records
        });
        id
    }

    /// Replaces the stored record whose id matches `record`.
    pub fn overwrite(&self, record: T) -> Result<(), EntryError> {
        let mut records = self.handle.get();
        let Some(slot) = records.iter_mut().find(|stored| stored.id() == record.id()) else {
            return Err(EntryError::NotFound(record.id().to_string()));
        };
        *slot = record;
        self.handle.set(records);
        Ok(())
    }

    /// Removes the record with `id` once the caller has confirmed.
    pub fn remove(&self, id: &str, confirmation: Confirmation) -> RemoveOutcome {
        if confirmation == Confirmation::Cancelled {
            return RemoveOutcome::Cancelled;
        }

        let records = self.handle.get();
        let original_len = records.len();
        let kept: Vec<T> = records
            .into_iter()
            .filter(|record| record.id() != id)
            .collect();

        if kept.len() == original_len {
            return RemoveOutcome::NotFound;
        }

        self.handle.set(kept);
        RemoveOutcome::Removed
    }

    /// Clears every record in the collection.
    pub fn clear(&self) {
        self.handle.set(Vec::new());
    }

    pub fn len(&self) -> usize {
        self.handle.get().len()
    }

    pub fn is_empty(&self) -> bool {
        self.handle.get().is_empty()
    }

    pub fn is_ready(&self) -> bool {
        self.handle.is_ready()
    }

    pub fn load_outcome(&self) -> LoadOutcome {
        self.handle.load_outcome()
    }

    pub fn handle(&self) -> &CollectionHandle<'s, Vec<T>> {
        &self.handle
    }
}
