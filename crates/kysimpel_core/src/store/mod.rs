//! Key-value storage backends.
//!
//! # Responsibility
//! - Define the string-keyed slot contract every collection is persisted in.
//! - Provide a durable SQLite backend and a process-local memory backend.
//!
//! # Invariants
//! - One key holds exactly one serialized value; `set` replaces it whole.
//! - Backends never interpret values; parsing is the repository's concern.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryKvStore;
pub use sqlite::SqliteKvStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure raised by a key-value backend.
#[derive(Debug)]
pub enum StoreError {
    /// SQLite transport or schema failure.
    Db(DbError),
    /// Backend cannot be reached at all (closed, read-only, quota).
    Unavailable(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Unavailable(reason) => write!(f, "storage unavailable: {reason}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Synchronous string slot storage, the local-storage analogue.
pub trait KvStore {
    /// Returns the raw value at `key`, or `None` when the slot is empty.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    /// Replaces the raw value at `key`.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
    /// Clears the slot at `key`. Clearing an empty slot is a no-op.
    fn remove(&self, key: &str) -> StoreResult<()>;
}

impl<S: KvStore + ?Sized> KvStore for &S {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }
}
