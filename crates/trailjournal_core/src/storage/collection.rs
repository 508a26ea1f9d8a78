//! Persistent collection store.
//!
//! # Responsibility
//! - Mirror named, typed record collections into a key-value backend.
//! - Keep every handle bound to one key consistent within the process.
//! - Fall back to caller-supplied defaults when the backend misses,
//!   fails, or holds data that no longer parses.
//!
//! # Invariants
//! - A handle is ready as soon as `bind` returns; initialization never
//!   raises backend or parse errors to the caller.
//! - Setters update the shared in-memory slot before persisting; a
//!   persistence failure is logged and does not roll the slot back.
//! - Stored order is whatever the caller wrote; the store never sorts.

use crate::db::open_db;
use crate::storage::kv::{KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore};
use log::{error, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

/// How a collection's initial value was obtained at bind time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A persisted value was read and parsed.
    Loaded,
    /// Nothing was persisted under the key; the default is in effect.
    Missing,
    /// Read or parse failed; the default is in effect for this session.
    Fallback { reason: String },
}

struct Slot {
    value: Box<dyn Any>,
    outcome: LoadOutcome,
    ready: bool,
}

/// Store binding named collections to a durable or in-memory backend.
pub struct CollectionStore {
    backend: Box<dyn KeyValueStore>,
    durable: bool,
    slots: RefCell<HashMap<String, Slot>>,
}

impl CollectionStore {
    /// Opens the durable store at `path`.
    ///
    /// When the database cannot be opened (locked profile, missing
    /// permissions, unsupported schema) the store degrades to an
    /// in-memory backend: usable for the session, not durable.
    pub fn open(path: impl AsRef<Path>) -> Self {
        match open_db(path) {
            Ok(conn) => Self::with_backend(Box::new(SqliteKeyValueStore::new(conn)), true),
            Err(err) => {
                warn!("event=storage_open module=storage status=fallback reason={err}");
                Self::in_memory()
            }
        }
    }

    /// Creates a store over a process-lifetime in-memory backend.
    pub fn in_memory() -> Self {
        Self::with_backend(Box::new(MemoryKeyValueStore::default()), false)
    }

    /// Creates a store over an explicit backend. `durable` reports
    /// whether writes survive the process.
    pub fn with_backend(backend: Box<dyn KeyValueStore>, durable: bool) -> Self {
        Self {
            backend,
            durable,
            slots: RefCell::new(HashMap::new()),
        }
    }

    /// Whether writes reach storage that survives a restart.
    pub fn durable(&self) -> bool {
        self.durable
    }

    /// Binds `key` to a typed collection, initializing it from the
    /// backend or from `default` when no usable value is persisted.
    ///
    /// Repeated binds for one key share a single slot, so every handle
    /// observes the latest written value on its next read.
    pub fn bind<T>(&self, key: &str, default: T) -> CollectionHandle<'_, T>
    where
        T: Serialize + DeserializeOwned + Clone + 'static,
    {
        self.init_slot(key, &default);
        CollectionHandle {
            store: self,
            key: key.to_string(),
            default,
        }
    }

    fn init_slot<T>(&self, key: &str, default: &T)
    where
        T: DeserializeOwned + Clone + 'static,
    {
        let mut slots = self.slots.borrow_mut();
        if slots.contains_key(key) {
            return;
        }

        let (value, outcome) = match self.backend.read(key) {
            Ok(Some(raw)) => match serde_json::from_str::<T>(&raw) {
                Ok(parsed) => (parsed, LoadOutcome::Loaded),
                Err(err) => (
                    default.clone(),
                    LoadOutcome::Fallback {
                        reason: format!("persisted value under `{key}` does not parse: {err}"),
                    },
                ),
            },
            Ok(None) => (default.clone(), LoadOutcome::Missing),
            Err(err) => (
                default.clone(),
                LoadOutcome::Fallback {
                    reason: format!("read of `{key}` failed: {err}"),
                },
            ),
        };

        if let LoadOutcome::Fallback { reason } = &outcome {
            warn!("event=collection_bind module=storage status=fallback key={key} reason={reason}");
        }

        slots.insert(
            key.to_string(),
            Slot {
                value: Box::new(value),
                outcome,
                ready: true,
            },
        );
    }
}

/// Typed read/write handle for one named collection.
pub struct CollectionHandle<'s, T> {
    store: &'s CollectionStore,
    key: String,
    default: T,
}

impl<T> CollectionHandle<'_, T>
where
    T: Serialize + DeserializeOwned + Clone + 'static,
{
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current materialized value of the collection.
    pub fn get(&self) -> T {
        let slots = self.store.slots.borrow();
        let Some(slot) = slots.get(&self.key) else {
            return self.default.clone();
        };
        match slot.value.downcast_ref::<T>() {
            Some(value) => value.clone(),
            None => {
                // Two binds under one key disagree on the record type.
                error!(
                    "event=collection_read module=storage status=type_mismatch key={}",
                    self.key
                );
                self.default.clone()
            }
        }
    }

    /// Replaces the collection and persists it under the same key.
    ///
    /// The shared slot is updated first; if serialization or the backend
    /// write fails, the failure is logged and the in-memory value stays
    /// authoritative for the session.
    pub fn set(&self, value: T) {
        {
            let mut slots = self.store.slots.borrow_mut();
            if let Some(slot) = slots.get_mut(&self.key) {
                slot.value = Box::new(value.clone());
            }
        }

        match serde_json::to_string(&value) {
            Ok(serialized) => {
                if let Err(err) = self.store.backend.write(&self.key, &serialized) {
                    warn!(
                        "event=collection_persist module=storage status=error key={} error={err}",
                        self.key
                    );
                }
            }
            Err(err) => warn!(
                "event=collection_persist module=storage status=serialize_error key={} error={err}",
                self.key
            ),
        }
    }

    /// Replaces the collection with a value derived from the latest
    /// known value.
    pub fn update(&self, derive: impl FnOnce(T) -> T) {
        let next = derive(self.get());
        self.set(next);
    }

    /// True once bind-time initialization completed, whether it loaded a
    /// persisted value or fell back to the default.
    pub fn is_ready(&self) -> bool {
        let slots = self.store.slots.borrow();
        slots.get(&self.key).map(|slot| slot.ready).unwrap_or(false)
    }

    /// How this collection's initial value was obtained.
    pub fn load_outcome(&self) -> LoadOutcome {
        let slots = self.store.slots.borrow();
        slots
            .get(&self.key)
            .map(|slot| slot.outcome.clone())
            .unwrap_or(LoadOutcome::Missing)
    }
}
