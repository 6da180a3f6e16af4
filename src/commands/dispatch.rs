//! Command dispatch logic for placemark

use crate::cli::{Cli, Commands};
use crate::commands;
use placemark_core::config::resolve_db_path;
use placemark_core::db::LocationStore;
use placemark_core::error::{PlacemarkError, Result};

pub fn run(cli: &Cli) -> Result<()> {
    let Some(command) = &cli.command else {
        return Err(PlacemarkError::UsageError(
            "no command given (try `placemark --help`)".to_string(),
        ));
    };

    let db_path = resolve_db_path(cli.db.as_deref())?;
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let store = LocationStore::open(&db_path)?;

    match command {
        Commands::Init { default } => commands::init::execute(cli, &store, &db_path, *default),
        Commands::Add { name, lat, lon } => {
            commands::add::execute(cli, &store, &db_path, name, *lat, *lon)
        }
        Commands::Find { name } => commands::find::execute(cli, &store, &db_path, name),
        Commands::Update {
            name,
            new_name,
            lat,
            lon,
        } => commands::update::execute(cli, &store, &db_path, name, new_name.as_deref(), *lat, *lon),
        Commands::Delete { name } => commands::delete::execute(cli, &store, &db_path, name),
        Commands::List => commands::list::execute(cli, &store, &db_path),
        Commands::Status => commands::status::execute(cli, &store, &db_path),
    }
}
