//! Data file location resolution
//!
//! Each store kind resolves its backing file from an environment variable
//! override, falling back to a fixed path under the hidden `.assistant/`
//! directory. The legacy project-root locations are only used as migration
//! sources.

use std::path::PathBuf;

/// Directory holding the current data files
pub const DATA_DIR: &str = ".assistant";

/// The two record kinds managed by this tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Todo,
    Journal,
}

impl StoreKind {
    /// Environment variable overriding the backing file path
    pub fn env_var(&self) -> &'static str {
        match self {
            StoreKind::Todo => "TODO_DATA_FILE",
            StoreKind::Journal => "JOURNAL_DATA_FILE",
        }
    }

    /// File name of the backing file
    pub fn file_name(&self) -> &'static str {
        match self {
            StoreKind::Todo => "todos.json",
            StoreKind::Journal => "journals.json",
        }
    }

    /// Label used in migration progress messages
    pub fn label(&self) -> &'static str {
        match self {
            StoreKind::Todo => "TODOs",
            StoreKind::Journal => "journals",
        }
    }

    /// Default backing file under `.assistant/`
    pub fn default_path(&self) -> PathBuf {
        PathBuf::from(DATA_DIR).join(self.file_name())
    }

    /// Legacy project-root location, pre-`.assistant/`
    pub fn legacy_path(&self) -> PathBuf {
        PathBuf::from(self.file_name())
    }

    /// Resolve the backing file: env override, else the `.assistant/` default
    pub fn resolve_data_file(&self) -> PathBuf {
        match std::env::var(self.env_var()) {
            Ok(path) if !path.is_empty() => PathBuf::from(path),
            _ => self.default_path(),
        }
    }

    /// Resolve the migration source: env override, else the legacy location
    pub fn migration_source(&self) -> PathBuf {
        match std::env::var(self.env_var()) {
            Ok(path) if !path.is_empty() => PathBuf::from(path),
            _ => self.legacy_path(),
        }
    }
}
