//! Composition root for the journal.
//!
//! # Responsibility
//! - Wire the collection store, session gate, and config together.
//! - Expose gated in-memory view navigation and the admin actions
//!   (demo-data load, destructive reset).
//!
//! # Invariants
//! - View screens other than Home are reachable only while
//!   authenticated.
//! - Reset clears all four collections or none: wrong secret or a
//!   cancelled confirmation has no side effect.

use crate::config::{AppConfig, SecretCheck};
use crate::demo::demo_collections;
use crate::model::daily::DailyEntry;
use crate::model::expense::Expense;
use crate::model::gear::GearItem;
use crate::model::journal::JournalEntry;
use crate::service::entries::{Confirmation, EntryCollection};
use crate::session::{LoginOutcome, SessionGate};
use crate::storage::collection::CollectionStore;
use crate::storage::kv::KeyValueStore;
use log::info;
use std::cell::Cell;

/// Durable storage key for the daily log collection.
pub const DAILY_ENTRIES_KEY: &str = "dailyEntries";
/// Durable storage key for the journal collection.
pub const JOURNAL_ENTRIES_KEY: &str = "journalEntries";
/// Durable storage key for the expense collection.
pub const EXPENSES_KEY: &str = "expenses";
/// Durable storage key for the gear collection.
pub const GEAR_KEY: &str = "gear";

/// The six navigable screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Daily,
    Journal,
    Stats,
    Expenses,
    Gear,
}

impl View {
    pub const ALL: [View; 6] = [
        View::Home,
        View::Daily,
        View::Journal,
        View::Stats,
        View::Expenses,
        View::Gear,
    ];

    pub fn label(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Daily => "Daily Log",
            View::Journal => "Journal",
            View::Stats => "Stats",
            View::Expenses => "Expenses",
            View::Gear => "Gear",
        }
    }
}

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Moved,
    NotAuthenticated,
}

/// Outcome of the destructive reset action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    Cleared,
    Cancelled,
    IncorrectPassword,
    NotConfigured,
}

/// The running application: store, session, config, and the current
/// in-memory view selection.
pub struct App<'e> {
    store: CollectionStore,
    session: SessionGate<'e>,
    config: AppConfig,
    current_view: Cell<View>,
}

impl<'e> App<'e> {
    /// Builds the app over an opened store, resuming any session state
    /// left in the ephemeral keyspace by the same tab.
    pub fn new(store: CollectionStore, ephemeral: &'e dyn KeyValueStore, config: AppConfig) -> Self {
        Self {
            store,
            session: SessionGate::resume(ephemeral),
            config,
            current_view: Cell::new(View::Home),
        }
    }

    pub fn store(&self) -> &CollectionStore {
        &self.store
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionGate<'e> {
        &self.session
    }

    pub fn daily(&self) -> EntryCollection<'_, DailyEntry> {
        EntryCollection::bind(&self.store, DAILY_ENTRIES_KEY)
    }

    pub fn journal(&self) -> EntryCollection<'_, JournalEntry> {
        EntryCollection::bind(&self.store, JOURNAL_ENTRIES_KEY)
    }

    pub fn expenses(&self) -> EntryCollection<'_, Expense> {
        EntryCollection::bind(&self.store, EXPENSES_KEY)
    }

    pub fn gear(&self) -> EntryCollection<'_, GearItem> {
        EntryCollection::bind(&self.store, GEAR_KEY)
    }

    pub fn current_view(&self) -> View {
        self.current_view.get()
    }

    /// Switches screens. Anything past Home requires authentication.
    pub fn navigate(&self, view: View) -> NavOutcome {
        if view != View::Home && !self.session.is_authenticated() {
            return NavOutcome::NotAuthenticated;
        }
        self.current_view.set(view);
        NavOutcome::Moved
    }

    pub fn login(&self, password: &str) -> LoginOutcome {
        self.session.login(password, &self.config)
    }

    /// Logs out and returns the selection to Home.
    pub fn logout(&self) {
        self.session.logout();
        self.current_view.set(View::Home);
    }

    /// Whether any of the four collections holds at least one record.
    pub fn has_data(&self) -> bool {
        !self.daily().is_empty()
            || !self.journal().is_empty()
            || !self.expenses().is_empty()
            || !self.gear().is_empty()
    }

    /// Appends the demo fixture records to the live collections.
    pub fn load_demo_data(&self) {
        let demo = demo_collections();
        self.daily().handle().update(|mut records| {
            records.extend(demo.daily_entries);
            records
        });
        self.journal().handle().update(|mut records| {
            records.extend(demo.journal_entries);
            records
        });
        self.expenses().handle().update(|mut records| {
            records.extend(demo.expenses);
            records
        });
        self.gear().handle().update(|mut records| {
            records.extend(demo.gear);
            records
        });
        info!("event=demo_load module=app status=ok");
    }

    /// Clears all four collections after verifying the admin secret and
    /// an explicit confirmation.
    pub fn reset_all(&self, password: &str, confirmation: Confirmation) -> ResetOutcome {
        match self.config.verify_secret(password) {
            SecretCheck::NotConfigured => return ResetOutcome::NotConfigured,
            SecretCheck::Incorrect => return ResetOutcome::IncorrectPassword,
            SecretCheck::Verified => {}
        }
        if confirmation == Confirmation::Cancelled {
            return ResetOutcome::Cancelled;
        }

        self.daily().clear();
        self.journal().clear();
        self.expenses().clear();
        self.gear().clear();
        info!("event=reset_all module=app status=ok");
        ResetOutcome::Cleared
    }
}
