//! CLI argument parsing for placemark
//!
//! Uses clap for argument parsing.
//! Supports global flags: --db, --format, --quiet, --verbose, --log-level,
//! --log-json

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use placemark_core::format::OutputFormat;

use parse::parse_format;

/// Placemark - local gazetteer of named geographic points
#[derive(Parser, Debug)]
#[command(name = "placemark")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Database file path (overrides the global config)
    #[arg(long, global = true, env = "PLACEMARK_DB")]
    pub db: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the database (seeding the default catalog) if missing
    Init {
        /// Record this database as the default in the global config
        #[arg(long)]
        default: bool,
    },

    /// Add a named location
    Add {
        /// Location name (must not already exist)
        name: String,

        /// Latitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },

    /// Look up a location by name (case-insensitive)
    Find {
        /// Name to look up
        name: String,
    },

    /// Update fields of a location; omitted fields keep their values
    Update {
        /// Current name (matched case-insensitively)
        name: String,

        /// New name
        #[arg(long = "name", value_name = "NEW_NAME")]
        new_name: Option<String>,

        /// New latitude
        #[arg(long, allow_negative_numbers = true)]
        lat: Option<f64>,

        /// New longitude
        #[arg(long, allow_negative_numbers = true)]
        lon: Option<f64>,
    },

    /// Delete a location by exact name (case-sensitive)
    Delete {
        /// Name to delete (exact case)
        name: String,
    },

    /// List all locations
    List,

    /// Show database path, schema version and record count
    Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_help() {
        // Should not panic
        let result = Cli::try_parse_from(["placemark", "--help"]);
        assert!(result.is_err()); // --help exits
    }

    #[test]
    fn test_parse_init() {
        let cli = Cli::try_parse_from(["placemark", "init"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Init { default: false })));
    }

    #[test]
    fn test_parse_add_with_negative_coordinates() {
        let cli = Cli::try_parse_from([
            "placemark", "add", "Toronto", "--lat", "43.65", "--lon", "-79.38",
        ])
        .unwrap();
        if let Some(Commands::Add { name, lat, lon }) = cli.command {
            assert_eq!(name, "Toronto");
            assert_eq!(lat, 43.65);
            assert_eq!(lon, -79.38);
        } else {
            panic!("Expected Add command");
        }
    }

    #[test]
    fn test_parse_update_partial_flags() {
        let cli =
            Cli::try_parse_from(["placemark", "update", "UpdateMeCity", "--lat", "44.0"]).unwrap();
        if let Some(Commands::Update {
            name,
            new_name,
            lat,
            lon,
        }) = cli.command
        {
            assert_eq!(name, "UpdateMeCity");
            assert_eq!(new_name, None);
            assert_eq!(lat, Some(44.0));
            assert_eq!(lon, None);
        } else {
            panic!("Expected Update command");
        }
    }

    #[test]
    fn test_parse_update_rename_flag() {
        let cli = Cli::try_parse_from([
            "placemark", "update", "Old Town", "--name", "New Town",
        ])
        .unwrap();
        if let Some(Commands::Update { name, new_name, .. }) = cli.command {
            assert_eq!(name, "Old Town");
            assert_eq!(new_name, Some("New Town".to_string()));
        } else {
            panic!("Expected Update command");
        }
    }

    #[test]
    fn test_parse_format() {
        let cli = Cli::try_parse_from(["placemark", "--format", "json", "list"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        let result = Cli::try_parse_from(["placemark", "--format", "yaml", "list"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_db_flag() {
        let cli = Cli::try_parse_from(["placemark", "--db", "/tmp/test.db", "list"]).unwrap();
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/test.db")));
    }
}
