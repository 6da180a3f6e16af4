//! `placemark find` command - look up a location by name
//!
//! Matching is case-insensitive and exact (not substring). A missing name
//! is surfaced as a not-found error.

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use placemark_core::db::LocationStore;
use placemark_core::error::{PlacemarkError, Result};
use placemark_core::records;

/// Execute the find command
pub fn execute(cli: &Cli, store: &LocationStore, db_path: &Path, name: &str) -> Result<()> {
    let location =
        store
            .find_by_name(name)?
            .ok_or_else(|| PlacemarkError::LocationNotFound {
                name: name.to_string(),
            })?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&location)?);
        }
        OutputFormat::Human => {
            println!(
                "#{} {} ({}, {})",
                location.id, location.name, location.latitude, location.longitude
            );
        }
        OutputFormat::Records => {
            println!("{}", records::format_header(db_path, "find", 1));
            println!("{}", records::format_location_record(&location));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_cli(format: OutputFormat, quiet: bool) -> Cli {
        Cli {
            db: None,
            format,
            quiet,
            verbose: false,
            log_level: None,
            log_json: false,
            command: None,
        }
    }

    fn create_test_store() -> (TempDir, LocationStore, std::path::PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("placemark.db");
        let store = LocationStore::open(&db_path).unwrap();
        (temp_dir, store, db_path)
    }

    #[test]
    fn test_find_case_insensitive() {
        let (_temp_dir, store, db_path) = create_test_store();
        let cli = create_cli(OutputFormat::Human, false);

        let result = execute(&cli, &store, &db_path, "TORONTO");
        assert!(result.is_ok());
    }

    #[test]
    fn test_find_missing_location() {
        let (_temp_dir, store, db_path) = create_test_store();
        let cli = create_cli(OutputFormat::Human, false);

        let err = execute(&cli, &store, &db_path, "Atlantis").unwrap_err();
        assert!(matches!(err, PlacemarkError::LocationNotFound { .. }));
    }

    #[test]
    fn test_find_all_formats() {
        let (_temp_dir, store, db_path) = create_test_store();
        for format in [
            OutputFormat::Human,
            OutputFormat::Json,
            OutputFormat::Records,
        ] {
            let cli = create_cli(format, false);
            let result = execute(&cli, &store, &db_path, "Toronto");
            assert!(result.is_ok());
        }
    }
}
