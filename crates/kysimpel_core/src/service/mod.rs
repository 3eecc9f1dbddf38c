//! Use-case services over the persistence façade.
//!
//! # Responsibility
//! - Stamp timestamps and ids so callers only supply editor input.
//! - Keep the note → favorite link derivation an explicit second step.
//! - Hold the current theme and notify subscribers on change.
//!
//! # Invariants
//! - `createdAt` is set once; note `updatedAt` is refreshed on every update.
//! - Services never bypass repository read/write contracts.

use crate::model::validation::ValidationError;
use crate::model::EntityId;
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod link_service;
pub mod note_service;
pub mod theme_store;

/// Epoch-millisecond time source; injectable for tests.
pub type Clock = fn() -> i64;

/// Service error for note/link use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Input rejected before touching storage.
    Validation(ValidationError),
    /// Target record does not exist.
    NotFound(EntityId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
