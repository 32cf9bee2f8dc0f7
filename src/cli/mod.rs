//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, JournalCommands, TodoCommands};
pub use output::{format_json, print_json};
