//! JSON-file-backed record store
//!
//! One store per record kind, backed 1:1 by a JSON array file. The whole
//! file is read on open and rewritten after every mutation; there is no
//! append log and no cross-process locking.

use crate::domain::Record;
use crate::error::Result;
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;

/// In-memory record sequence backed by a JSON file on disk.
pub struct JsonStore<R: Record> {
    path: PathBuf,
    records: Vec<R>,
}

impl<R: Record> JsonStore<R> {
    /// Open a store, eagerly loading the backing file.
    ///
    /// A missing file yields an empty store; a malformed one yields an
    /// empty store with a warning. Only genuine I/O failures are errors.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let records = Self::load(&path)?;
        Ok(JsonStore { path, records })
    }

    fn load(path: &Path) -> Result<Vec<R>> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let value: Value = match serde_json::from_str(&contents) {
            Ok(value) => value,
            Err(_) => {
                warn!("Could not parse {}, starting fresh", path.display());
                return Ok(Vec::new());
            }
        };

        let Value::Array(items) = value else {
            warn!("Invalid data format in {}, starting fresh", path.display());
            return Ok(Vec::new());
        };

        // Skip elements that are not objects or do not decode as the record
        // kind; a partially corrupted file must not take the store down.
        let total = items.len();
        let mut records = Vec::with_capacity(total);
        for item in items {
            if !item.is_object() {
                continue;
            }
            match serde_json::from_value::<R>(item) {
                Ok(record) => records.push(record),
                Err(_) => continue,
            }
        }
        if records.len() != total {
            warn!(
                "Filtered {} invalid items from {}",
                total - records.len(),
                path.display()
            );
        }

        Ok(records)
    }

    /// Rewrite the whole store to disk: pretty JSON, temp file, rename.
    fn save(&self) -> Result<()> {
        let contents = serde_json::to_string_pretty(&self.records)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp_path = self.path.with_extension("json.tmp");
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(contents.as_bytes())?;
        file.write_all(b"\n")?;
        file.sync_all()?;
        drop(file);

        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records in insertion order
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Next free id: max existing id + 1, so ids survive deletions.
    pub fn next_id(&self) -> u64 {
        self.records.iter().map(Record::id).max().unwrap_or(0) + 1
    }

    /// Append a record and persist. Returns a reference to the stored record.
    pub fn add(&mut self, record: R) -> Result<&R> {
        let index = self.records.len();
        self.records.push(record);
        self.save()?;
        Ok(&self.records[index])
    }

    /// Find a record by id
    pub fn find(&self, id: u64) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Apply a mutation to the record with the given id, then persist.
    ///
    /// Returns `None` without touching the file when the id does not exist.
    pub fn update_with(
        &mut self,
        id: u64,
        mutate: impl FnOnce(&mut R),
    ) -> Result<Option<&R>> {
        let Some(index) = self.records.iter().position(|r| r.id() == id) else {
            return Ok(None);
        };

        mutate(&mut self.records[index]);
        self.save()?;
        Ok(Some(&self.records[index]))
    }

    /// Remove the record with the given id. Persists only when something
    /// was actually removed.
    pub fn delete(&mut self, id: u64) -> Result<bool> {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);

        if self.records.len() < before {
            self.save()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Case-insensitive substring search on the primary text field.
    pub fn search(&self, keyword: &str) -> Vec<&R> {
        let needle = keyword.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.primary_text().to_lowercase().contains(&needle))
            .collect()
    }
}
