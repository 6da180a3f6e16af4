//! `placemark add` command - add a named location
//!
//! Fails with a conflict when the exact name already exists. Validation of
//! coordinate ranges is deliberately not performed here; the store accepts
//! any finite pair.

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use placemark_core::db::LocationStore;
use placemark_core::error::Result;
use placemark_core::records;

/// Execute the add command
pub fn execute(
    cli: &Cli,
    store: &LocationStore,
    db_path: &Path,
    name: &str,
    lat: f64,
    lon: f64,
) -> Result<()> {
    let location = store.add(name, lat, lon)?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&location)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "Added #{} {} ({}, {})",
                    location.id, location.name, location.latitude, location.longitude
                );
            }
        }
        OutputFormat::Records => {
            println!("{}", records::format_header(db_path, "add", 1));
            println!("{}", records::format_location_record(&location));
        }
    }

    Ok(())
}
