//! Location record types

use serde::{Deserialize, Serialize};

/// A named geographic point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Store-assigned id; stable, unique, never reused after deletion
    pub id: i64,
    /// Unique name (exact-match uniqueness at the storage layer)
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Field changes for a partial update
///
/// Absent fields keep their prior values. An empty `new_name` counts as
/// absent, matching the form-driven callers this store was built for.
#[derive(Debug, Clone, Default)]
pub struct LocationUpdate {
    pub new_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl LocationUpdate {
    /// The requested rename, treating an empty string as no change
    pub fn effective_name(&self) -> Option<&str> {
        self.new_name.as_deref().filter(|n| !n.is_empty())
    }

    /// True when the update would change nothing
    pub fn is_empty(&self) -> bool {
        self.effective_name().is_none() && self.latitude.is_none() && self.longitude.is_none()
    }
}
