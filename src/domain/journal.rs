//! Journal record kind: entry schema, partial updates, list filters

use crate::domain::record::Record;
use serde::{Deserialize, Serialize};

fn default_category() -> String {
    "general".to_string()
}

/// A single journal entry as stored in `journals.json`.
///
/// Entries carry one creation `timestamp`; updates do not restamp it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: u64,
    pub content: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub timestamp: String,
}

impl Record for JournalEntry {
    const LABEL: &'static str = "Journal entry";

    fn id(&self) -> u64 {
        self.id
    }

    fn primary_text(&self) -> &str {
        &self.content
    }
}

/// Input for creating a journal entry.
#[derive(Debug, Clone, Default)]
pub struct NewJournalEntry {
    pub content: String,
    pub category: Option<String>,
    pub mood: Option<String>,
    pub tags: Vec<String>,
}

impl JournalEntry {
    /// Build a fresh entry from user input, with defaults and a timestamp.
    pub fn create(id: u64, draft: NewJournalEntry, stamp: String) -> Self {
        JournalEntry {
            id,
            content: draft.content,
            category: draft.category.unwrap_or_else(default_category),
            mood: draft.mood,
            tags: draft.tags,
            timestamp: stamp,
        }
    }
}

/// Partial update: only provided fields overwrite the stored entry.
#[derive(Debug, Clone, Default)]
pub struct JournalUpdate {
    pub content: Option<String>,
    pub category: Option<String>,
    pub mood: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl JournalUpdate {
    pub fn apply(&self, entry: &mut JournalEntry) {
        if let Some(content) = &self.content {
            entry.content = content.clone();
        }
        if let Some(category) = &self.category {
            entry.category = category.clone();
        }
        if let Some(mood) = &self.mood {
            entry.mood = Some(mood.clone());
        }
        if let Some(tags) = &self.tags {
            entry.tags = tags.clone();
        }
    }
}

/// Conjunctive list filters; date bounds are inclusive and compared
/// lexicographically against the ISO-8601 timestamp string.
#[derive(Debug, Clone, Default)]
pub struct JournalFilter {
    pub category: Option<String>,
    pub mood: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub tags: Vec<String>,
}

impl JournalFilter {
    pub fn matches(&self, entry: &JournalEntry) -> bool {
        if let Some(category) = &self.category {
            if &entry.category != category {
                return false;
            }
        }
        if let Some(mood) = &self.mood {
            if entry.mood.as_deref() != Some(mood.as_str()) {
                return false;
            }
        }
        if let Some(start) = &self.start_date {
            if entry.timestamp.as_str() < start.as_str() {
                return false;
            }
        }
        if let Some(end) = &self.end_date {
            if entry.timestamp.as_str() > end.as_str() {
                return false;
            }
        }
        self.tags.iter().all(|tag| entry.tags.contains(tag))
    }
}
