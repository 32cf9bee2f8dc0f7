//! TODO record kind: item schema, partial updates, list filters

use crate::domain::record::Record;
use serde::{Deserialize, Serialize};

fn default_category() -> String {
    "general".to_string()
}

fn default_priority() -> String {
    "medium".to_string()
}

fn default_status() -> String {
    "pending".to_string()
}

/// A single TODO item as stored in `todos.json`.
///
/// Optional fields serialize as explicit `null` so the on-disk shape stays
/// stable; missing fields in legacy files fall back to defaults on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: u64,
    pub title: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default = "default_priority")]
    pub priority: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Record for TodoItem {
    const LABEL: &'static str = "TODO";

    fn id(&self) -> u64 {
        self.id
    }

    fn primary_text(&self) -> &str {
        &self.title
    }
}

/// Input for creating a TODO item; unset fields take the documented defaults.
#[derive(Debug, Clone, Default)]
pub struct NewTodo {
    pub title: String,
    pub category: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<String>,
    pub project: Option<String>,
    pub assignee: Option<String>,
    pub tags: Vec<String>,
    pub description: Option<String>,
}

impl TodoItem {
    /// Build a fresh item from user input, with defaults and timestamps.
    pub fn create(id: u64, draft: NewTodo, stamp: String) -> Self {
        TodoItem {
            id,
            title: draft.title,
            category: draft.category.unwrap_or_else(default_category),
            priority: draft.priority.unwrap_or_else(default_priority),
            status: default_status(),
            due_date: draft.due_date,
            project: draft.project,
            assignee: draft.assignee,
            tags: draft.tags,
            description: draft.description,
            created_at: stamp.clone(),
            updated_at: stamp,
        }
    }
}

/// Partial update: only provided fields overwrite the stored item.
#[derive(Debug, Clone, Default)]
pub struct TodoUpdate {
    pub title: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub category: Option<String>,
    pub due_date: Option<String>,
    pub project: Option<String>,
    pub assignee: Option<String>,
    pub tags: Option<Vec<String>>,
    pub description: Option<String>,
}

impl TodoUpdate {
    /// Apply every provided field to the item; unset fields stay untouched.
    pub fn apply(&self, item: &mut TodoItem) {
        if let Some(title) = &self.title {
            item.title = title.clone();
        }
        if let Some(status) = &self.status {
            item.status = status.clone();
        }
        if let Some(priority) = &self.priority {
            item.priority = priority.clone();
        }
        if let Some(category) = &self.category {
            item.category = category.clone();
        }
        if let Some(due_date) = &self.due_date {
            item.due_date = Some(due_date.clone());
        }
        if let Some(project) = &self.project {
            item.project = Some(project.clone());
        }
        if let Some(assignee) = &self.assignee {
            item.assignee = Some(assignee.clone());
        }
        if let Some(tags) = &self.tags {
            item.tags = tags.clone();
        }
        if let Some(description) = &self.description {
            item.description = Some(description.clone());
        }
    }
}

/// Conjunctive list filters; every set field must match.
#[derive(Debug, Clone, Default)]
pub struct TodoFilter {
    pub category: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub project: Option<String>,
    pub assignee: Option<String>,
    pub tags: Vec<String>,
}

impl TodoFilter {
    pub fn matches(&self, item: &TodoItem) -> bool {
        if let Some(category) = &self.category {
            if &item.category != category {
                return false;
            }
        }
        if let Some(status) = &self.status {
            if &item.status != status {
                return false;
            }
        }
        if let Some(priority) = &self.priority {
            if &item.priority != priority {
                return false;
            }
        }
        if let Some(project) = &self.project {
            if item.project.as_deref() != Some(project.as_str()) {
                return false;
            }
        }
        if let Some(assignee) = &self.assignee {
            if item.assignee.as_deref() != Some(assignee.as_str()) {
                return false;
            }
        }
        // Item must carry every requested tag
        self.tags.iter().all(|tag| item.tags.contains(tag))
    }
}
