//! `placemark update` command - partial update of a location
//!
//! Omitted flags keep their current values. The record is resolved
//! case-insensitively; at least one change flag is required.

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use placemark_core::db::LocationStore;
use placemark_core::error::{PlacemarkError, Result};
use placemark_core::location::LocationUpdate;
use placemark_core::records;

/// Execute the update command
pub fn execute(
    cli: &Cli,
    store: &LocationStore,
    db_path: &Path,
    name: &str,
    new_name: Option<&str>,
    lat: Option<f64>,
    lon: Option<f64>,
) -> Result<()> {
    let changes = LocationUpdate {
        new_name: new_name.map(str::to_string),
        latitude: lat,
        longitude: lon,
    };

    if changes.is_empty() {
        return Err(PlacemarkError::UsageError(
            "update requires at least one of --name, --lat, --lon".to_string(),
        ));
    }

    let location = store.update(name, &changes)?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&location)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "Updated #{} {} ({}, {})",
                    location.id, location.name, location.latitude, location.longitude
                );
            }
        }
        OutputFormat::Records => {
            println!("{}", records::format_header(db_path, "update", 1));
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
    fn test_update_latitude_only() {
        let (_temp_dir, store, db_path) = create_test_store();
        let cli = create_cli(OutputFormat::Human, false);

        let result = execute(&cli, &store, &db_path, "UpdateMeCity", None, Some(44.0), None);
        assert!(result.is_ok());

        let stored = store.find_by_name("UpdateMeCity").unwrap().unwrap();
        assert_eq!(stored.latitude, 44.0);
        assert_eq!(stored.longitude, -79.555);
    }

    #[test]
    fn test_update_without_changes_is_usage_error() {
        let (_temp_dir, store, db_path) = create_test_store();
        let cli = create_cli(OutputFormat::Human, false);

        let err = execute(&cli, &store, &db_path, "UpdateMeCity", None, None, None).unwrap_err();
        assert!(matches!(err, PlacemarkError::UsageError(_)));
    }

    #[test]
    fn test_update_missing_location() {
        let (_temp_dir, store, db_path) = create_test_store();
        let cli = create_cli(OutputFormat::Human, false);

        let err =
            execute(&cli, &store, &db_path, "Atlantis", None, Some(44.0), None).unwrap_err();
        assert!(matches!(err, PlacemarkError::LocationNotFound { .. }));
    }

    #[test]
    fn test_update_rename_collision() {
        let (_temp_dir, store, db_path) = create_test_store();
        let cli = create_cli(OutputFormat::Human, false);

        let err = execute(
            &cli,
            &store,
            &db_path,
            "TestTown1",
            Some("Toronto"),
            None,
            None,
        )
        .unwrap_err();
        assert!(matches!(err, PlacemarkError::LocationExists { .. }));
    }

    #[test]
    fn test_update_all_formats() {
        let (_temp_dir, store, db_path) = create_test_store();
        for format in [
            OutputFormat::Human,
            OutputFormat::Json,
            OutputFormat::Records,
        ] {
            let cli = create_cli(format, false);
            let result = execute(
                &cli,
                &store,
                &db_path,
                "UpdateMeCity",
                None,
                Some(44.1),
                None,
            );
            assert!(result.is_ok());
        }
    }
}
