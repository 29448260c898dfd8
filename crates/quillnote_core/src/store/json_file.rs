//! File-backed store: one `<KEY>.json` file per entry.
//!
//! # Responsibility
//! - Map each store key to a JSON file under a root directory.
//! - Read and write entries synchronously as whole files.
//!
//! # Invariants
//! - A missing file means "entry absent", never an error.
//! - Writes replace the whole file; there is no append or merge path.

use super::{Store, StoreError, StoreResult};
use std::io::ErrorKind;
use std::path::PathBuf;

/// Durable `Store` keeping each named entry in its own JSON file.
#[derive(Debug)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Opens a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root).map_err(|source| StoreError::Io {
            key: root.display().to_string(),
            source,
        })?;
        Ok(Self { root })
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl Store for JsonFileStore {
    fn load_raw(&self, key: &str) -> StoreResult<Option<String>> {
        match std::fs::read_to_string(self.entry_path(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn save_raw(&mut self, key: &str, payload: &str) -> StoreResult<()> {
        std::fs::write(self.entry_path(key), payload).map_err(|source| StoreError::Io {
            key: key.to_string(),
            source,
        })
    }
}
