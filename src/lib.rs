//! assistant - Personal record-keeping CLI
//!
//! A command-line application that manages TODO items and journal entries
//! persisted as JSON files, with a one-time migration of legacy data files
//! into the `.assistant/` directory.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::AssistantError;
