//! TODO management use cases

use crate::domain::{now_timestamp, NewTodo, TodoFilter, TodoItem, TodoUpdate};
use crate::error::Result;
use crate::infrastructure::{JsonStore, StoreKind};

/// Service for managing the TODO store
pub struct TodoService {
    store: JsonStore<TodoItem>,
}

impl TodoService {
    /// Open the store at the resolved data file location
    pub fn open_default() -> Result<Self> {
        Self::open(StoreKind::Todo.resolve_data_file())
    }

    pub fn open(path: impl Into<std::path::PathBuf>) -> Result<Self> {
        Ok(TodoService {
            store: JsonStore::open(path)?,
        })
    }

    /// Add a new item with a fresh id and creation timestamps
    pub fn add(&mut self, draft: NewTodo) -> Result<TodoItem> {
        let item = TodoItem::create(self.store.next_id(), draft, now_timestamp());
        Ok(self.store.add(item)?.clone())
    }

    /// List items matching the filter, in store order
    pub fn list(&self, filter: &TodoFilter) -> Vec<TodoItem> {
        self.store
            .records()
            .iter()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect()
    }

    /// Apply a partial update and refresh `updated_at`.
    ///
    /// Returns `None` when the id does not exist.
    pub fn update(&mut self, id: u64, update: &TodoUpdate) -> Result<Option<TodoItem>> {
        let updated = self.store.update_with(id, |item| {
            update.apply(item);
            item.updated_at = now_timestamp();
        })?;
        Ok(updated.cloned())
    }

    /// Delete by id; false when the id does not exist
    pub fn delete(&mut self, id: u64) -> Result<bool> {
        self.store.delete(id)
    }

    /// Case-insensitive keyword search on titles
    pub fn search(&self, keyword: &str) -> Vec<TodoItem> {
        self.store.search(keyword).into_iter().cloned().collect()
    }
}
