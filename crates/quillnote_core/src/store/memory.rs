//! In-memory store backend.
//!
//! # Responsibility
//! - Provide a `Store` implementation with no durable side effects for
//!   tests and throwaway sessions.

use super::{Store, StoreResult};
use std::collections::HashMap;

/// Ephemeral `Store` holding serialized entries in a map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn load_raw(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save_raw(&mut self, key: &str, payload: &str) -> StoreResult<()> {
        self.entries.insert(key.to_string(), payload.to_string());
        Ok(())
    }
}
