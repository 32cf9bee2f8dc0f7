//! Journal management use cases

use crate::domain::{now_timestamp, JournalEntry, JournalFilter, JournalUpdate, NewJournalEntry};
use crate::error::Result;
use crate::infrastructure::{JsonStore, StoreKind};

/// Service for managing the journal store
pub struct JournalService {
    store: JsonStore<JournalEntry>,
}

impl JournalService {
    /// Open the store at the resolved data file location
    pub fn open_default() -> Result<Self> {
        Self::open(StoreKind::Journal.resolve_data_file())
    }

    pub fn open(path: impl Into<std::path::PathBuf>) -> Result<Self> {
        Ok(JournalService {
            store: JsonStore::open(path)?,
        })
    }

    /// Add a new entry with a fresh id and a creation timestamp
    pub fn add(&mut self, draft: NewJournalEntry) -> Result<JournalEntry> {
        let entry = JournalEntry::create(self.store.next_id(), draft, now_timestamp());
        Ok(self.store.add(entry)?.clone())
    }

    /// List entries matching the filter, in store order
    pub fn list(&self, filter: &JournalFilter) -> Vec<JournalEntry> {
        self.store
            .records()
            .iter()
            .filter(|entry| filter.matches(entry))
            .cloned()
            .collect()
    }

    /// Apply a partial update; the entry timestamp is left as-is.
    ///
    /// Returns `None` when the id does not exist.
    pub fn update(&mut self, id: u64, update: &JournalUpdate) -> Result<Option<JournalEntry>> {
        let updated = self.store.update_with(id, |entry| update.apply(entry))?;
        Ok(updated.cloned())
    }

    /// Delete by id; false when the id does not exist
    pub fn delete(&mut self, id: u64) -> Result<bool> {
        self.store.delete(id)
    }

    /// Case-insensitive keyword search on entry content
    pub fn search(&self, keyword: &str) -> Vec<JournalEntry> {
        self.store.search(keyword).into_iter().cloned().collect()
    }
}
