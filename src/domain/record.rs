//! Record trait - the seam between the JSON store and the record kinds

use chrono::Local;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A record that can live in a JSON-backed store.
///
/// Implemented by each record kind; the store only needs the id and the
/// primary text field used for keyword search.
pub trait Record: Serialize + DeserializeOwned {
    /// User-facing label for this record kind (e.g. "TODO")
    const LABEL: &'static str;

    /// Unique id within the store
    fn id(&self) -> u64;

    /// Primary text field searched by the `search` operation
    fn primary_text(&self) -> &str;
}

/// Current local time as an ISO-8601 string with microsecond precision.
///
/// Stored as a plain string so date-range filters can compare
/// lexicographically.
pub fn now_timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_shape() {
        let stamp = now_timestamp();
        // YYYY-MM-DDTHH:MM:SS.ffffff
        assert_eq!(stamp.len(), 26);
        assert_eq!(&stamp[4..5], "-");
        assert_eq!(&stamp[10..11], "T");
        assert_eq!(&stamp[19..20], ".");
    }

    #[test]
    fn test_timestamps_sort_lexicographically() {
        let a = now_timestamp();
        let b = now_timestamp();
        assert!(a <= b);
        assert!("2025-01-01T00:00:00.000000" < a.as_str());
    }
}
