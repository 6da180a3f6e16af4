//! SQLite schema for the location store

use rusqlite::{Connection, Result};

pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Result of schema creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaCreateResult {
    /// Schema already at the current version; nothing changed
    Current,
    /// Schema created for the first time
    Created,
    /// Version mismatch; tables were dropped and recreated, all rows lost
    Recreated,
}

const SCHEMA_SQL: &str = r#"
-- Named geographic points. AUTOINCREMENT keeps ids monotonic and never
-- reused after deletion.
CREATE TABLE IF NOT EXISTS locations (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    latitude REAL NOT NULL,
    longitude REAL NOT NULL
);

-- Store metadata
CREATE TABLE IF NOT EXISTS store_meta (
    key TEXT PRIMARY KEY,
    value TEXT
);
"#;

fn drop_all_tables(conn: &Connection) -> Result<()> {
    conn.execute("DROP TABLE IF EXISTS locations", [])?;
    conn.execute("DROP TABLE IF EXISTS store_meta", [])?;
    Ok(())
}

fn write_schema_version(conn: &Connection) -> Result<()> {
    conn.execute(
        "INSERT INTO store_meta (key, value) VALUES ('schema_version', ?1)",
        [&CURRENT_SCHEMA_VERSION.to_string()],
    )?;
    Ok(())
}

/// Create or upgrade the schema.
///
/// Upgrades are destructive: any version other than the current one drops
/// and recreates all tables. The store is a disposable local cache, not a
/// system of record, and callers must expect total data loss across a
/// version bump.
pub fn create_schema(conn: &Connection) -> Result<SchemaCreateResult> {
    let current_version: Option<i32> = conn
        .query_row(
            "SELECT value FROM store_meta WHERE key = 'schema_version'",
            [],
            |r| r.get::<_, String>(0).map(|s| s.parse().unwrap_or(0)),
        )
        .ok();

    match current_version {
        None => {
            conn.execute_batch(SCHEMA_SQL)?;
            write_schema_version(conn)?;
            Ok(SchemaCreateResult::Created)
        }
        Some(v) if v == CURRENT_SCHEMA_VERSION => Ok(SchemaCreateResult::Current),
        Some(v) => {
            drop_all_tables(conn)?;
            conn.execute_batch(SCHEMA_SQL)?;
            write_schema_version(conn)?;
            tracing::info!(
                "Database schema updated from version {} to {}, store reset",
                v,
                CURRENT_SCHEMA_VERSION
            );
            Ok(SchemaCreateResult::Recreated)
        }
    }
}

#[cfg(test)]
pub fn force_set_schema_version(conn: &Connection, version: i32) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO store_meta (key, value) VALUES ('schema_version', ?1)",
        [&version.to_string()],
    )?;
    Ok(())
}
