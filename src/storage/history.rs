use std::sync::Arc;

use crate::storage::kv::{read_json, write_json, KeyValueStore, StorageError, StorageKey};

/// Recent search queries, most recent first.
#[derive(Clone)]
pub struct SearchHistory {
    store: Arc<dyn KeyValueStore>,
}

impl SearchHistory {
    pub const MAX_ENTRIES: usize = 10;

    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn load(&self) -> Result<Vec<String>, StorageError> {
        Ok(read_json(self.store.as_ref(), StorageKey::SearchHistory)?.unwrap_or_default())
    }

    /// Record a query and return the updated list.
    ///
    /// Blank queries are ignored; a repeated query (case-insensitive) moves
    /// to the front instead of being duplicated.
    pub fn record(&self, query: &str) -> Result<Vec<String>, StorageError> {
        let query = query.trim();
        let mut entries = self.load()?;
        if query.is_empty() {
            return Ok(entries);
        }

        let needle = query.to_lowercase();
        entries.retain(|e| e.to_lowercase() != needle);
        entries.insert(0, query.to_string());
        entries.truncate(Self::MAX_ENTRIES);

        write_json(self.store.as_ref(), StorageKey::SearchHistory, &entries)?;
        Ok(entries)
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(StorageKey::SearchHistory)
    }
}
