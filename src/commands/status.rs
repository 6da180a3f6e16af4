//! `placemark status` command - database path, schema version, record count

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use placemark_core::db::LocationStore;
use placemark_core::error::Result;
use placemark_core::records;

/// Execute the status command
pub fn execute(cli: &Cli, store: &LocationStore, db_path: &Path) -> Result<()> {
    let count = store.count()?;
    let schema_version = store.schema_version()?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "db": db_path.display().to_string(),
                "schema_version": schema_version,
                "locations": count,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("db: {}", db_path.display());
            println!("schema version: {}", schema_version);
            println!("locations: {}", count);
        }
        OutputFormat::Records => {
            println!(
                "{}",
                records::format_header(db_path, "status", count as usize)
            );
            println!("S schema_version={}", schema_version);
        }
    }

    Ok(())
}
