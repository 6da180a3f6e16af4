//! Global configuration for placemark (stored in ~/.config/placemark/config.toml)

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PlacemarkError, Result};

const CONFIG_DIR: &str = "placemark";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "PLACEMARK_CONFIG_DIR";
const DB_FILE: &str = "placemark.db";

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, Default)]
pub struct GlobalConfig {
    /// Default database location when neither `--db` nor PLACEMARK_DB is set
    #[serde(default)]
    pub db_path: Option<PathBuf>,
}

impl GlobalConfig {
    fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    PlacemarkError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            PlacemarkError::Other(format!(
                "failed to read global config from {}: {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            PlacemarkError::Other(format!(
                "failed to parse global config from {}: {}",
                path.display(),
                e
            ))
        })
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let config_dir = path
            .parent()
            .ok_or_else(|| PlacemarkError::Other("invalid config path".to_string()))?;

        fs::create_dir_all(config_dir).map_err(|e| {
            PlacemarkError::Other(format!(
                "failed to create config directory {}: {}",
                config_dir.display(),
                e
            ))
        })?;

        let content = toml::to_string_pretty(self)
            .map_err(|e| PlacemarkError::Other(format!("failed to serialize config: {}", e)))?;

        fs::write(&path, content).map_err(|e| {
            PlacemarkError::Other(format!(
                "failed to write config to {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(())
    }
}

/// Resolve the database path for a command invocation.
///
/// Resolution order: the `--db` flag (which also absorbs PLACEMARK_DB at
/// the argument-parsing layer), then the global config's `db_path`, then
/// the platform data directory.
pub fn resolve_db_path(flag: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path.to_path_buf());
    }

    let config = GlobalConfig::load()?;
    if let Some(path) = config.db_path {
        return Ok(path);
    }

    let data_dir = dirs::data_dir().ok_or_else(|| {
        PlacemarkError::Other("unable to determine data directory".to_string())
    })?;
    Ok(data_dir.join(CONFIG_DIR).join(DB_FILE))
}
