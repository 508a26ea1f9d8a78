//! Session gate over the ephemeral per-tab keyspace.
//!
//! # Responsibility
//! - Hold the tab-lifetime authenticated flag as explicit state.
//! - Re-seed the flag from ephemeral storage on resume; clear it on
//!   logout.
//!
//! # Invariants
//! - No configured secret means login is refused, never allowed by
//!   default.
//! - Logout always clears both the in-memory flag and the ephemeral key.

use crate::config::{AppConfig, SecretCheck};
use crate::storage::kv::KeyValueStore;
use log::{info, warn};
use std::cell::Cell;

/// Ephemeral key marking the current tab as authenticated.
pub const SESSION_AUTH_KEY: &str = "trailJournalAuth";

const AUTH_FLAG: &str = "true";

/// Outcome of a login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    LoggedIn,
    IncorrectPassword,
    /// No secret configured; shown as a configuration error, distinct
    /// from a wrong password.
    NotConfigured,
}

/// Tab-lifetime authentication state.
///
/// Borrows the ephemeral keyspace owned by the embedding process, so a
/// simulated reload (a fresh gate over the same keyspace) resumes the
/// authenticated state while a fresh tab (a fresh keyspace) does not.
pub struct SessionGate<'e> {
    ephemeral: &'e dyn KeyValueStore,
    authenticated: Cell<bool>,
}

impl<'e> SessionGate<'e> {
    /// Creates a gate, re-seeding the flag from the ephemeral keyspace.
    pub fn resume(ephemeral: &'e dyn KeyValueStore) -> Self {
        let authenticated = matches!(
            ephemeral.read(SESSION_AUTH_KEY),
            Ok(Some(flag)) if flag == AUTH_FLAG
        );
        Self {
            ephemeral,
            authenticated: Cell::new(authenticated),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated.get()
    }

    /// Attempts login with plain string equality against the configured
    /// secret. Success marks the tab authenticated until logout.
    pub fn login(&self, password: &str, config: &AppConfig) -> LoginOutcome {
        match config.verify_secret(password) {
            SecretCheck::NotConfigured => LoginOutcome::NotConfigured,
            SecretCheck::Incorrect => LoginOutcome::IncorrectPassword,
            SecretCheck::Verified => {
                self.authenticated.set(true);
                if let Err(err) = self.ephemeral.write(SESSION_AUTH_KEY, AUTH_FLAG) {
                    warn!("event=session_persist module=session status=error error={err}");
                }
                info!("event=login module=session status=ok");
                LoginOutcome::LoggedIn
            }
        }
    }

    /// Clears the authenticated flag and its ephemeral marker.
    pub fn logout(&self) {
        self.authenticated.set(false);
        if let Err(err) = self.ephemeral.remove(SESSION_AUTH_KEY) {
            warn!("event=session_clear module=session status=error error={err}");
        }
        info!("event=logout module=session status=ok");
    }
}
