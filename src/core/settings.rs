// src/core/settings.rs

use crate::models::Settings;
use std::{fs, path::Path};
use thiserror::Error;

/// The settings shipped with the binary, written to disk on first run.
pub const BUNDLED_SETTINGS: &str = include_str!("../../assets/settings.toml");

/// Failures reading or writing `settings.toml`.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Reading or writing the file failed.
    #[error("Filesystem Error: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid settings TOML.
    #[error("Failed to parse settings: {0}")]
    TomlParse(#[from] toml::de::Error),
    /// The settings could not be serialized.
    #[error("Failed to serialize settings to TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Loads `settings.toml`, writing the bundled defaults first if it does not exist.
pub fn load_or_init(path: &Path) -> Result<Settings, SettingsError> {
    if !path.exists() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, BUNDLED_SETTINGS)?;
        log::debug!("Wrote default settings to '{}'", path.display());
        return Ok(toml::from_str(BUNDLED_SETTINGS)?);
    }
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Writes `settings` to `path` as TOML.
pub fn save(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    let toml_string = toml::to_string_pretty(settings)?;
    fs::write(path, toml_string)?;
    Ok(())
}
