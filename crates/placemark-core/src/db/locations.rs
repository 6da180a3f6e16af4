//! CRUD operations on the locations table

use rusqlite::{params, OptionalExtension};

use crate::error::{PlacemarkError, Result};
use crate::location::{Location, LocationUpdate};

use super::LocationStore;

fn row_to_location(row: &rusqlite::Row) -> rusqlite::Result<Location> {
    Ok(Location {
        id: row.get(0)?,
        name: row.get(1)?,
        latitude: row.get(2)?,
        longitude: row.get(3)?,
    })
}

fn check_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PlacemarkError::InvalidCoordinate { field, value })
    }
}

impl LocationStore {
    /// Insert a new location, assigning a fresh id.
    ///
    /// The insert is attempted without a pre-check; a uniqueness violation
    /// on `name` maps to [`PlacemarkError::LocationExists`].
    pub fn add(&self, name: &str, latitude: f64, longitude: f64) -> Result<Location> {
        check_finite("latitude", latitude)?;
        check_finite("longitude", longitude)?;

        self.conn
            .execute(
                "INSERT INTO locations (name, latitude, longitude) VALUES (?1, ?2, ?3)",
                params![name, latitude, longitude],
            )
            .map_err(|e| match e {
                rusqlite::Error::SqliteFailure(err, _)
                    if err.code == rusqlite::ErrorCode::ConstraintViolation =>
                {
                    PlacemarkError::LocationExists {
                        name: name.to_string(),
                    }
                }
                other => PlacemarkError::db_operation("insert location", other),
            })?;

        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, name, "location added");

        Ok(Location {
            id,
            name: name.to_string(),
            latitude,
            longitude,
        })
    }

    /// Case-insensitive exact-match lookup by name.
    ///
    /// Returns the canonical stored record. If the uniqueness constraint is
    /// ever bypassed and several rows share a case-insensitive name, an
    /// arbitrary one of them is returned.
    pub fn find_by_name(&self, query: &str) -> Result<Option<Location>> {
        self.conn
            .query_row(
                "SELECT id, name, latitude, longitude FROM locations WHERE LOWER(name) = LOWER(?1)",
                params![query],
                row_to_location,
            )
            .optional()
            .map_err(|e| PlacemarkError::db_operation("query location by name", e))
    }

    /// Apply a partial update to the record matching `original_name`.
    ///
    /// Matching is case-insensitive; the write targets the resolved
    /// record's id. Returns the merged record.
    pub fn update(&self, original_name: &str, changes: &LocationUpdate) -> Result<Location> {
        let current = self.find_by_name(original_name)?.ok_or_else(|| {
            PlacemarkError::LocationNotFound {
                name: original_name.to_string(),
            }
        })?;

        if let Some(latitude) = changes.latitude {
            check_finite("latitude", latitude)?;
        }
        if let Some(longitude) = changes.longitude {
            check_finite("longitude", longitude)?;
        }

        let merged = Location {
            id: current.id,
            name: changes
                .effective_name()
                .unwrap_or(&current.name)
                .to_string(),
            latitude: changes.latitude.unwrap_or(current.latitude),
            longitude: changes.longitude.unwrap_or(current.longitude),
        };

        // A rename that lands on a case-insensitive twin of another record
        // would make that record unreachable through the lookup path.
        if let Some(existing) = self.find_by_name(&merged.name)? {
            if existing.id != merged.id {
                return Err(PlacemarkError::LocationExists { name: merged.name });
            }
        }

        let affected = self
            .conn
            .execute(
                "UPDATE locations SET name = ?1, latitude = ?2, longitude = ?3 WHERE id = ?4",
                params![merged.name, merged.latitude, merged.longitude, merged.id],
            )
            .map_err(|e| PlacemarkError::db_operation("update location", e))?;

        if affected == 0 {
            return Err(PlacemarkError::LocationNotFound {
                name: original_name.to_string(),
            });
        }

        tracing::debug!(id = merged.id, name = %merged.name, "location updated");
        Ok(merged)
    }

    /// Delete by exact, case-sensitive name match.
    ///
    /// Returns the number of rows removed (0 or 1 given the uniqueness
    /// constraint). The exact matching here is deliberately stricter than
    /// the lookup path; callers decide how to surface a zero count.
    pub fn delete(&self, name: &str) -> Result<usize> {
        let affected = self
            .conn
            .execute("DELETE FROM locations WHERE name = ?1", params![name])
            .map_err(|e| PlacemarkError::db_operation("delete location", e))?;

        tracing::debug!(name, affected, "location delete");
        Ok(affected)
    }

    /// Every record, fully materialized. Storage order is incidental and
    /// not part of the contract.
    pub fn list_all(&self) -> Result<Vec<Location>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, latitude, longitude FROM locations")
            .map_err(|e| PlacemarkError::db_operation("prepare list query", e))?;

        let locations = stmt
            .query_map([], row_to_location)
            .map_err(|e| PlacemarkError::db_operation("execute list query", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| PlacemarkError::db_operation("read list results", e))?;

        Ok(locations)
    }
}
