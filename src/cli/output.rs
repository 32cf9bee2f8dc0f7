//! Output formatting utilities

use crate::error::Result;
use serde::Serialize;

/// Serialize a record (or list of records) as pretty-printed JSON.
pub fn format_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Print a record (or list of records) as pretty-printed JSON to stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", format_json(value)?);
    Ok(())
}
