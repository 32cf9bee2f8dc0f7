//! CLI command definitions

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "assistant")]
#[command(about = "Personal TODO and journal manager", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage TODO items
    Todo {
        #[command(subcommand)]
        command: TodoCommands,
    },

    /// Manage journal entries
    Journal {
        #[command(subcommand)]
        command: JournalCommands,
    },

    /// Migrate legacy data files into the .assistant/ directory
    Migrate,
}

#[derive(Subcommand, Debug)]
pub enum TodoCommands {
    /// Add a new TODO item
    Add {
        /// Title of the item
        title: String,

        /// Category (default: general)
        #[arg(long)]
        category: Option<String>,

        /// Priority (default: medium)
        #[arg(long)]
        priority: Option<String>,

        /// Due date (ISO-8601)
        #[arg(long)]
        due_date: Option<String>,

        #[arg(long)]
        project: Option<String>,

        #[arg(long)]
        assignee: Option<String>,

        /// Comma-separated tags
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// List items, optionally filtered
    List {
        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        status: Option<String>,

        #[arg(long)]
        priority: Option<String>,

        #[arg(long)]
        project: Option<String>,

        #[arg(long)]
        assignee: Option<String>,

        /// Only items carrying all of these comma-separated tags
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
    },

    /// Update fields of an existing item
    Update {
        /// Id of the item to update
        id: u64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        status: Option<String>,

        #[arg(long)]
        priority: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        due_date: Option<String>,

        #[arg(long)]
        project: Option<String>,

        #[arg(long)]
        assignee: Option<String>,

        /// Replace the tag list (comma-separated)
        #[arg(long, value_delimiter = ',')]
        tags: Option<Vec<String>>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Delete an item by id
    Delete {
        id: u64,
    },

    /// Search item titles for a keyword (case-insensitive)
    Search {
        keyword: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum JournalCommands {
    /// Add a new journal entry
    Add {
        /// Entry content
        content: String,

        /// Category (default: general)
        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        mood: Option<String>,

        /// Comma-separated tags
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
    },

    /// List entries, optionally filtered
    List {
        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        mood: Option<String>,

        /// Inclusive lower bound on the entry timestamp (ISO-8601)
        #[arg(long)]
        start_date: Option<String>,

        /// Inclusive upper bound on the entry timestamp (ISO-8601)
        #[arg(long)]
        end_date: Option<String>,

        /// Only entries carrying all of these comma-separated tags
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
    },

    /// Update fields of an existing entry
    Update {
        /// Id of the entry to update
        id: u64,

        #[arg(long)]
        content: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        mood: Option<String>,

        /// Replace the tag list (comma-separated)
        #[arg(long, value_delimiter = ',')]
        tags: Option<Vec<String>>,
    },

    /// Delete an entry by id
    Delete {
        id: u64,
    },

    /// Search entry content for a keyword (case-insensitive)
    Search {
        keyword: String,
    },
}

/// Trim whitespace around comma-separated tags and drop empties.
pub fn clean_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}
