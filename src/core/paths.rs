// src/core/paths.rs

use crate::constants::{CONFIG_DIR_ENV, SETTINGS_FILENAME};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Failures resolving configuration paths.
#[derive(Error, Debug)]
pub enum PathError {
    /// The platform has no config directory.
    #[error("Could not find system config directory.")]
    ConfigDirNotFound,
    /// The config directory could not be created.
    #[error("Could not create config directory at '{path}': {source}")]
    ConfigDirCreation {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// A `~` or `$VAR` could not be expanded.
    #[error("Failed to expand path '{path}': {reason}")]
    Expansion { path: String, reason: String },
}

/// Returns the stackctl configuration directory, creating it if needed.
///
/// `$STACKCTL_CONFIG_DIR` takes precedence over the platform config directory
/// (`~/.config/stackctl` on Linux).
pub fn get_config_dir() -> Result<PathBuf, PathError> {
    let config_path = match env::var_os(CONFIG_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => dirs::config_dir()
            .ok_or(PathError::ConfigDirNotFound)?
            .join("stackctl"),
    };

    if !config_path.exists() {
        fs::create_dir_all(&config_path).map_err(|e| PathError::ConfigDirCreation {
            path: config_path.display().to_string(),
            source: e,
        })?;
    }
    Ok(config_path)
}

/// Location of `settings.toml` inside `config_dir`.
pub fn settings_path(config_dir: &Path) -> PathBuf {
    config_dir.join(SETTINGS_FILENAME)
}

/// Expands `~` and environment variables in `template`. Relative results are
/// taken relative to `base`.
pub fn resolve_path(template: &str, base: &Path) -> Result<PathBuf, PathError> {
    let expanded = shellexpand::full(template).map_err(|e| PathError::Expansion {
        path: template.to_string(),
        reason: e.to_string(),
    })?;
    let path = PathBuf::from(expanded.into_owned());
    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(base.join(path))
    }
}
