//! App configuration.
//!
//! # Responsibility
//! - Carry the single admin secret used by login and destructive reset.
//! - Distinguish "not configured" from "wrong password" (fail closed).
//!
//! # Invariants
//! - An empty or whitespace-only secret counts as not configured.
//! - Secret comparison is plain string equality; this gate deters casual
//!   access and is not a security control.

use std::env;

/// Environment variable the embedding process sets to enable login.
pub const ADMIN_SECRET_ENV: &str = "TRAIL_JOURNAL_ADMIN_SECRET";

/// Result of checking user input against the configured secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretCheck {
    Verified,
    Incorrect,
    /// No secret configured; the gated action must refuse with a visible
    /// configuration message, never silently allow.
    NotConfigured,
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    admin_secret: Option<String>,
}

impl AppConfig {
    pub fn new(admin_secret: Option<String>) -> Self {
        Self {
            admin_secret: admin_secret
                .map(|secret| secret.trim().to_string())
                .filter(|secret| !secret.is_empty()),
        }
    }

    /// Reads the secret from `TRAIL_JOURNAL_ADMIN_SECRET`.
    pub fn from_env() -> Self {
        Self::new(env::var(ADMIN_SECRET_ENV).ok())
    }

    pub fn has_admin_secret(&self) -> bool {
        self.admin_secret.is_some()
    }

    /// Compares `input` against the configured secret.
    pub fn verify_secret(&self, input: &str) -> SecretCheck {
        match &self.admin_secret {
            None => SecretCheck::NotConfigured,
            Some(secret) if secret == input => SecretCheck::Verified,
            Some(_) => SecretCheck::Incorrect,
        }
    }
}
