//! SQLite-backed location store

mod locations;
mod schema;
mod seed;

#[cfg(test)]
mod tests;

use std::path::Path;

use rusqlite::Connection;

use crate::error::{PlacemarkError, Result};

pub use schema::{create_schema, SchemaCreateResult, CURRENT_SCHEMA_VERSION};
pub use seed::{RESERVED_RECORDS, SEED_LOCALITIES};

/// SQLite-backed store of named geographic points
#[derive(Debug)]
pub struct LocationStore {
    conn: Connection,
}

impl LocationStore {
    /// Open or create the database at the given path.
    ///
    /// A freshly created schema (first open, or a destructive version
    /// upgrade) is seeded with the default locality catalog.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|e| PlacemarkError::InvalidDatabase {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| PlacemarkError::db_operation("enable WAL mode", e))?;

        Self::initialize(conn)
    }

    /// Open an ephemeral in-memory store (used by tests).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| PlacemarkError::db_operation("open in-memory database", e))?;
        Self::initialize(conn)
    }

    fn initialize(conn: Connection) -> Result<Self> {
        let schema_result = create_schema(&conn)
            .map_err(|e| PlacemarkError::db_operation("create database schema", e))?;

        let store = LocationStore { conn };

        // Seeding runs only against a fresh schema; seed_if_empty applies
        // its own row-count gate on top, so re-opening an already-seeded
        // store never duplicates data.
        if schema_result != SchemaCreateResult::Current {
            store.seed_if_empty()?;
        }

        Ok(store)
    }

    pub fn count(&self) -> Result<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM locations", [], |r| r.get(0))
            .map_err(|e| PlacemarkError::db_operation("count locations", e))
    }

    pub fn schema_version(&self) -> Result<i64> {
        self.conn
            .query_row(
                "SELECT value FROM store_meta WHERE key = 'schema_version'",
                [],
                |r| {
                    let s: String = r.get(0)?;
                    Ok(s.parse().unwrap_or(0))
                },
            )
            .map_err(|e| PlacemarkError::db_operation("get schema version", e))
    }
}

impl Drop for LocationStore {
    fn drop(&mut self) {
        // Checkpoint WAL changes before closing so rapid open/close cycles
        // (common in tests) observe committed data.
        let _ = self.conn.pragma_update(None, "wal_checkpoint", "TRUNCATE");
    }
}
