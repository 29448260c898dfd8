//! Repository layer: in-memory collections with write-through persistence.
//!
//! # Responsibility
//! - Own the two top-level collections (notes, tags) and their mutation
//!   rules.
//! - Persist the whole collection through a `Store` after every successful
//!   mutation.
//!
//! # Invariants
//! - A mutation either updates both the in-memory collection and the store,
//!   or returns an error with the in-memory collection unchanged.
//! - "Target not found" is a typed outcome, not an error; callers decide
//!   whether to ignore it.

use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod note_repo;
pub mod tag_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for collection load/persist operations.
#[derive(Debug)]
pub enum RepoError {
    Store(StoreError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Typed outcome for mutations that target an entity by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The target existed and the collection was updated and persisted.
    Applied,
    /// No entity carried the requested id; nothing changed, nothing was
    /// persisted.
    NotFound,
}

impl MutationOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}
