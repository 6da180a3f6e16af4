//! `placemark init` command - create and seed the database
//!
//! Opening the store already creates the schema and seeds the catalog when
//! the backing file is new; this command exists to do that explicitly and
//! report the result.

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use placemark_core::config::GlobalConfig;
use placemark_core::db::LocationStore;
use placemark_core::error::Result;
use placemark_core::records;

/// Execute the init command
pub fn execute(cli: &Cli, store: &LocationStore, db_path: &Path, set_default: bool) -> Result<()> {
    let count = store.count()?;

    if set_default {
        let mut config = GlobalConfig::load()?;
        config.db_path = Some(db_path.to_path_buf());
        config.save()?;
    }

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "db": db_path.display().to_string(),
                "locations": count,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "Store ready at {} ({} locations)",
                    db_path.display(),
                    count
                );
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                records::format_header(db_path, "init", count as usize)
            );
        }
    }

    Ok(())
}
