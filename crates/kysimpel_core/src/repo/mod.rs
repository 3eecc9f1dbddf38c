//! Persistence façade over key-value slots.
//!
//! # Responsibility
//! - Store each entity type as one JSON array under a fixed key.
//! - Offer the same read/save/delete shape for every collection, plus the
//!   theme scalar.
//!
//! # Invariants
//! - Reads are total: missing, unreadable or malformed slots read as empty
//!   (or the default theme) and are only logged.
//! - Writes replace the whole slot and surface backend failures as
//!   `RepoError`.
//! - Record order is insertion order; `save` replaces in place.
//! - Elements no known shape accepts are kept through writes and only
//!   removed by `delete` with their `id`.

use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod collection;
pub mod link_repo;
pub mod note_repo;
pub mod theme_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Write-path failure of the persistence façade.
#[derive(Debug)]
pub enum RepoError {
    /// Backend refused the write.
    Store(StoreError),
    /// Collection could not be encoded.
    Serialize(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to encode collection: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}
