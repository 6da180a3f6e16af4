//! `placemark delete` command - delete a location by exact name
//!
//! Matching here is case-sensitive, unlike find and update. A zero
//! affected-row count is surfaced as a not-found error.

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use placemark_core::db::LocationStore;
use placemark_core::error::{PlacemarkError, Result};
use placemark_core::records;

/// Execute the delete command
pub fn execute(cli: &Cli, store: &LocationStore, db_path: &Path, name: &str) -> Result<()> {
    let removed = store.delete(name)?;

    if removed == 0 {
        return Err(PlacemarkError::LocationNotFound {
            name: name.to_string(),
        });
    }

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "deleted": name,
                "removed": removed,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Deleted {}", name);
            }
        }
        OutputFormat::Records => {
            println!("{}", records::format_header(db_path, "delete", 0));
            println!("{}", records::format_delete_record(name, removed));
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
    fn test_delete_exact_name() {
        let (_temp_dir, store, db_path) = create_test_store();
        let cli = create_cli(OutputFormat::Human, false);

        let result = execute(&cli, &store, &db_path, "DeleteMeSpot");
        assert!(result.is_ok());
        assert!(store.find_by_name("DeleteMeSpot").unwrap().is_none());
    }

    #[test]
    fn test_delete_wrong_case_is_not_found() {
        let (_temp_dir, store, db_path) = create_test_store();
        let cli = create_cli(OutputFormat::Human, false);

        let err = execute(&cli, &store, &db_path, "deletemespot").unwrap_err();
        assert!(matches!(err, PlacemarkError::LocationNotFound { .. }));
        assert!(store.find_by_name("DeleteMeSpot").unwrap().is_some());
    }

    #[test]
    fn test_delete_all_formats() {
        for format in [
            OutputFormat::Human,
            OutputFormat::Json,
            OutputFormat::Records,
        ] {
            let (_temp_dir, store, db_path) = create_test_store();
            let cli = create_cli(format, false);
            let result = execute(&cli, &store, &db_path, "DeleteMeSpot");
            assert!(result.is_ok());
        }
    }
}
