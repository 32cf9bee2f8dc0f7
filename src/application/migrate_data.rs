//! One-time data migration into the `.assistant/` directory
//!
//! Moves the legacy project-root data files to their current locations,
//! merging when a destination file already exists. Records at the
//! destination win on id conflicts.

use crate::error::{AssistantError, Result};
use crate::infrastructure::paths::DATA_DIR;
use crate::infrastructure::StoreKind;
use anyhow::Context;
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Interactive decisions needed during migration.
///
/// A trait seam so the routine can be driven by stdin in the CLI and by
/// scripted answers in tests.
pub trait MigrationPrompt {
    fn confirm_merge(&mut self, old_path: &Path, new_path: &Path) -> anyhow::Result<bool>;
    fn confirm_delete_old(&mut self, old_path: &Path) -> anyhow::Result<bool>;
}

/// Prompt on stdout, read answers from stdin.
pub struct ConsolePrompt;

impl ConsolePrompt {
    fn ask(question: String) -> anyhow::Result<bool> {
        print!("{} (y/n): ", question);
        std::io::stdout().flush().context("failed to flush stdout")?;

        let mut answer = String::new();
        std::io::stdin()
            .read_line(&mut answer)
            .context("failed to read response")?;

        Ok(answer.trim().eq_ignore_ascii_case("y"))
    }
}

impl MigrationPrompt for ConsolePrompt {
    fn confirm_merge(&mut self, old_path: &Path, new_path: &Path) -> anyhow::Result<bool> {
        println!("Warning: {} already exists", new_path.display());
        Self::ask(format!("Do you want to merge with {}?", old_path.display()))
    }

    fn confirm_delete_old(&mut self, old_path: &Path) -> anyhow::Result<bool> {
        Self::ask(format!("Delete old file {}?", old_path.display()))
    }
}

/// What happened to one data file during migration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationOutcome {
    NothingToMigrate,
    Copied,
    Merged,
    MergeDeclined,
}

fn record_id(value: &Value) -> Option<u64> {
    value.get("id").and_then(Value::as_u64)
}

/// Merge old records into new ones: destination records win on id
/// conflicts, non-conflicting old records are appended in old-file order.
/// Old records without a usable integer id never conflict.
pub fn merge_records(old: Vec<Value>, new: Vec<Value>) -> Vec<Value> {
    let new_ids: HashSet<u64> = new.iter().filter_map(record_id).collect();

    let mut merged = new;
    for item in old {
        match record_id(&item) {
            Some(id) if new_ids.contains(&id) => {}
            _ => merged.push(item),
        }
    }
    merged
}

fn read_records(path: &Path) -> Result<Vec<Value>> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn write_records(path: &Path, records: &[Value]) -> Result<()> {
    let mut contents = serde_json::to_string_pretty(records)?;
    contents.push('\n');
    fs::write(path, contents)?;
    Ok(())
}

fn prompt_failed(err: anyhow::Error) -> AssistantError {
    AssistantError::Migration(format!("{:#}", err))
}

/// Migrate one data file from its old location to its new location.
pub fn migrate_file(
    kind: StoreKind,
    old_path: &Path,
    new_path: &Path,
    prompt: &mut dyn MigrationPrompt,
) -> Result<MigrationOutcome> {
    if !old_path.exists() {
        println!(
            "No old {} file found at {}, nothing to migrate",
            kind.label(),
            old_path.display()
        );
        return Ok(MigrationOutcome::NothingToMigrate);
    }

    if let Some(parent) = new_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let outcome = if new_path.exists() {
        if !prompt
            .confirm_merge(old_path, new_path)
            .map_err(prompt_failed)?
        {
            println!("Skipped merging {}", old_path.display());
            return Ok(MigrationOutcome::MergeDeclined);
        }

        let old_records = read_records(old_path)?;
        let new_records = read_records(new_path)?;
        let (old_count, new_count) = (old_records.len(), new_records.len());

        let merged = merge_records(old_records, new_records);
        write_records(new_path, &merged)?;

        println!(
            "Merged {} old items with {} new items",
            old_count, new_count
        );
        println!("Total items: {}", merged.len());
        MigrationOutcome::Merged
    } else {
        fs::copy(old_path, new_path)?;
        println!("Migrated {} -> {}", old_path.display(), new_path.display());
        MigrationOutcome::Copied
    };

    if prompt.confirm_delete_old(old_path).map_err(prompt_failed)? {
        fs::remove_file(old_path)?;
        println!("Deleted {}", old_path.display());
    } else {
        println!(
            "Kept {} (you can delete it manually later)",
            old_path.display()
        );
    }

    Ok(outcome)
}

/// Migrate both data files into the `.assistant/` directory.
pub fn run_migration(prompt: &mut dyn MigrationPrompt) -> Result<()> {
    println!("Assistant data migration");
    println!();

    for (step, kind) in [StoreKind::Todo, StoreKind::Journal].into_iter().enumerate() {
        println!("{}. Migrating {}...", step + 1, kind.label());
        migrate_file(kind, &kind.migration_source(), &kind.default_path(), prompt)?;
        println!();
    }

    println!("Migration complete. Data files now live in {}/", DATA_DIR);
    Ok(())
}
