//! Application layer - Use cases and orchestration

pub mod manage_journal;
pub mod manage_todos;
pub mod migrate_data;

pub use manage_journal::JournalService;
pub use manage_todos::TodoService;
pub use migrate_data::{
    migrate_file, run_migration, ConsolePrompt, MigrationOutcome, MigrationPrompt,
};
