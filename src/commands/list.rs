//! `placemark list` command - list all locations
//!
//! Storage order is incidental; output is sorted by id for stable display.

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use placemark_core::db::LocationStore;
use placemark_core::error::Result;
use placemark_core::records;

/// Execute the list command
pub fn execute(cli: &Cli, store: &LocationStore, db_path: &Path) -> Result<()> {
    let mut locations = store.list_all()?;
    locations.sort_by_key(|l| l.id);

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&locations)?);
        }
        OutputFormat::Human => {
            if locations.is_empty() {
                if !cli.quiet {
                    println!("No locations");
                }
            } else {
                for location in &locations {
                    println!(
                        "#{} {} ({}, {})",
                        location.id, location.name, location.latitude, location.longitude
                    );
                }
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                records::format_header(db_path, "list", locations.len())
            );
            for location in &locations {
                println!("{}", records::format_location_record(location));
            }
        }
    }

    Ok(())
}
