//! ConfigStore - Local Configuration Storage

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Serialize, de::DeserializeOwned};

use crate::constants::CONFIG_FILE;
use crate::domain::config::AppConfig;

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "lotto", "lotto-admin")
        .ok_or_else(|| anyhow::anyhow!("Could not resolve a home directory"))
}

/// Get the application data directory
pub fn app_data_dir() -> Result<PathBuf> {
    let dir = project_dirs()?.data_local_dir().to_path_buf();

    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create data directory {}", dir.display()))?;
    }

    Ok(dir)
}

/// Default location of the TOML application config
pub fn app_config_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join(CONFIG_FILE))
}

/// Load a JSON file, falling back to `T::default()` when it does not exist
pub fn load_json<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Ok(T::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value: T = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(value)
}

/// Save a value as pretty JSON
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Load a JSON config file from the data directory
pub fn load_config<T: DeserializeOwned + Default>(filename: &str) -> Result<T> {
    load_json(&app_data_dir()?.join(filename))
}

/// Save a JSON config file to the data directory
pub fn save_config<T: Serialize>(filename: &str, config: &T) -> Result<()> {
    save_json(&app_data_dir()?.join(filename), config)
}

/// Delete a config file
pub fn delete_config(filename: &str) -> Result<()> {
    let path = app_data_dir()?.join(filename);
    if path.exists() {
        fs::remove_file(&path)?;
    }
    Ok(())
}

/// Load the application config.
///
/// An explicit path must exist. Without one, the default location is used if
/// present and built-in defaults otherwise.
pub fn load_app_config(explicit: Option<&Path>) -> Result<AppConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = app_config_path()?;
            if !path.exists() {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                return Ok(AppConfig::default());
            }
            path
        }
    };

    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = AppConfig::from_toml_str(&text)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "Loaded config");
    Ok(config)
}
