//! Persistence boundary: named JSON entries in a key/value store.
//!
//! # Responsibility
//! - Define the `Store` contract used by repositories: whole-value load and
//!   whole-value overwrite of a named serialized entry.
//! - Provide the durable file-backed implementation and an in-memory one
//!   for tests and throwaway sessions.
//!
//! # Invariants
//! - `save` fully overwrites the prior value; there are no partial updates
//!   and no versioning.
//! - `load` degrades to the caller's default on absent or unparsable
//!   entries and never writes the default back implicitly.
//! - Serialization and I/O failures propagate to the caller; the store
//!   never retries.

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-layer failure. Always carries the entry key for diagnostics.
#[derive(Debug)]
pub enum StoreError {
    /// Reading or writing the backing medium failed.
    Io {
        key: String,
        source: std::io::Error,
    },
    /// Encoding a value to JSON failed.
    Serialize {
        key: String,
        source: serde_json::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { key, source } => {
                write!(f, "storage I/O failure for entry `{key}`: {source}")
            }
            Self::Serialize { key, source } => {
                write!(f, "failed to serialize entry `{key}`: {source}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Serialize { source, .. } => Some(source),
        }
    }
}

/// Contract for durable storage of named JSON entries.
///
/// Implementations only deal in raw serialized payloads; the typed
/// `load`/`save` helpers own the JSON codec so every backend shares the
/// same tolerance rules.
pub trait Store {
    /// Returns the raw payload stored under `key`, or `None` when absent.
    fn load_raw(&self, key: &str) -> StoreResult<Option<String>>;

    /// Overwrites the entry under `key` with `payload`.
    fn save_raw(&mut self, key: &str, payload: &str) -> StoreResult<()>;

    /// Loads and decodes the entry under `key`.
    ///
    /// Returns `default` when the entry is absent or does not decode as
    /// `T`. A corrupt entry is logged and left untouched so the evidence
    /// survives for inspection.
    fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> StoreResult<T> {
        let Some(payload) = self.load_raw(key)? else {
            return Ok(default);
        };
        match serde_json::from_str(&payload) {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!(
                    "event=store_entry_unparsable module=core status=degraded key={key} error={err}"
                );
                Ok(default)
            }
        }
    }

    /// Encodes `value` as JSON and fully overwrites the entry under `key`.
    fn save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> StoreResult<()> {
        let payload = serde_json::to_string(value).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.save_raw(key, &payload)
    }
}

impl<S: Store> Store for &mut S {
    fn load_raw(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).load_raw(key)
    }

    fn save_raw(&mut self, key: &str, payload: &str) -> StoreResult<()> {
        (**self).save_raw(key, payload)
    }
}
