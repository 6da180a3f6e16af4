//! Utilities for records output format

use std::path::Path;

use crate::location::Location;

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Format the records header line for a command
pub fn format_header(db: &Path, mode: &str, count: usize) -> String {
    format!(
        "H placemark=1 records=1 db={} mode={} locations={}",
        db.display(),
        mode,
        count
    )
}

/// Format a single location line in records format
pub fn format_location_record(location: &Location) -> String {
    format!(
        "L {} \"{}\" lat={} lon={}",
        location.id,
        escape_quotes(&location.name),
        location.latitude,
        location.longitude
    )
}

/// Format a deletion line in records format
pub fn format_delete_record(name: &str, removed: usize) -> String {
    format!("D \"{}\" removed={}", escape_quotes(name), removed)
}
