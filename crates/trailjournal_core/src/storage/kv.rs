//! Key-value backend contracts and implementations.
//!
//! # Responsibility
//! - Provide read/write/remove of serialized values under string keys.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Writes are full-value upserts; there is no partial update.
//! - `MemoryKeyValueStore` never fails and never persists.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type KvResult<T> = Result<T, KvError>;

/// Backend error for key-value reads and writes.
#[derive(Debug)]
pub enum KvError {
    Db(DbError),
    Backend(String),
}

impl Display for KvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Backend(message) => write!(f, "storage backend failure: {message}"),
        }
    }
}

impl Error for KvError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Backend(_) => None,
        }
    }
}

impl From<DbError> for KvError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for KvError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage seam for string-keyed serialized values.
///
/// Implementations carry no schema knowledge; serialization happens in
/// the collection store above this trait.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> KvResult<Option<String>>;
    fn write(&self, key: &str, value: &str) -> KvResult<()>;
    fn remove(&self, key: &str) -> KvResult<()>;
}

/// SQLite-backed durable keyspace over the `kv` table.
pub struct SqliteKeyValueStore {
    conn: Connection,
}

impl SqliteKeyValueStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn read(&self, key: &str) -> KvResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1;", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn write(&self, key: &str, value: &str) -> KvResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> KvResult<()> {
        self.conn.execute("DELETE FROM kv WHERE key = ?1;", [key])?;
        Ok(())
    }
}

/// Process-lifetime keyspace with no durability.
///
/// Used as the degraded mode when SQLite cannot be opened, and as the
/// ephemeral per-tab keyspace behind the session gate.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryKeyValueStore {
    fn read(&self, key: &str) -> KvResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> KvResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> KvResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
