//! Core domain logic for the trail journal.
//! This crate is the single source of truth for persistence and
//! collection invariants.

pub mod app;
pub mod config;
pub mod db;
pub mod demo;
pub mod logging;
pub mod model;
pub mod service;
pub mod session;
pub mod storage;

pub use app::{
    App, NavOutcome, ResetOutcome, View, DAILY_ENTRIES_KEY, EXPENSES_KEY, GEAR_KEY,
    JOURNAL_ENTRIES_KEY,
};
pub use config::{AppConfig, SecretCheck, ADMIN_SECRET_ENV};
pub use demo::{demo_collections, DemoData};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::daily::{DailyDraft, DailyEntry};
pub use model::expense::{Expense, ExpenseDraft, DEFAULT_EXPENSE_CATEGORY};
pub use model::gear::{GearDraft, GearItem, DEFAULT_GEAR_CATEGORY};
pub use model::journal::{normalize_hashtags, JournalDraft, JournalEntry};
pub use model::{fresh_entry_id, utc_day_start, DatedRecord, EntryId, ValidationError};
pub use service::entries::{Confirmation, EntryCollection, EntryError, RemoveOutcome};
pub use service::stats::{
    daily_entry_for_day, expense_totals_by_category, gear_by_category, hike_stats, recent_days,
    total_expenses, total_gear_cost, total_gear_weight, HikeStats,
};
pub use session::{LoginOutcome, SessionGate, SESSION_AUTH_KEY};
pub use storage::collection::{CollectionHandle, CollectionStore, LoadOutcome};
pub use storage::kv::{KeyValueStore, KvError, KvResult, MemoryKeyValueStore, SqliteKeyValueStore};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
