//! # Application Context
//!
//! Everything a command needs besides its own arguments: the settings, the
//! color palette and the command grammar. The context is loaded once when the
//! process starts, shared read-only through an `Arc`, and dropped at exit.

use crate::{
    core::{
        color::Palette,
        grammar::{self, GrammarStore},
        paths::{self, PathError},
        settings::{self, SettingsError},
    },
    models::Settings,
};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use thiserror::Error;

/// Why the context could not be loaded.
#[derive(Error, Debug)]
pub enum ContextError {
    /// The configuration directory is unusable.
    #[error(transparent)]
    Path(#[from] PathError),
    /// `settings.toml` could not be read or parsed.
    #[error("Could not load '{path}': {source}")]
    Settings {
        path: String,
        #[source]
        source: SettingsError,
    },
}

/// Shared, read-only state for one process run.
#[derive(Debug)]
pub struct AppContext {
    /// Directory holding `settings.toml` and the grammar.
    pub config_dir: PathBuf,
    /// Parsed `settings.toml`.
    pub settings: Settings,
    /// Palette built from `settings.palette`.
    pub palette: Palette,
    /// The command grammar, shared with the validator.
    pub grammar: Arc<GrammarStore>,
}

impl AppContext {
    /// Assembles a context from already-loaded parts.
    pub fn new(config_dir: PathBuf, settings: Settings, grammar: GrammarStore) -> Self {
        let palette = Palette::from_config(&settings.palette);
        Self {
            config_dir,
            settings,
            palette,
            grammar: Arc::new(grammar),
        }
    }

    /// Loads settings and grammar from the configuration directory, writing
    /// the bundled defaults for whichever file is missing.
    pub fn load() -> Result<Self, ContextError> {
        let config_dir = paths::get_config_dir()?;
        Self::load_from(&config_dir)
    }

    /// Like [`AppContext::load`], for an explicit directory.
    pub fn load_from(config_dir: &Path) -> Result<Self, ContextError> {
        let settings_path = paths::settings_path(config_dir);
        let settings =
            settings::load_or_init(&settings_path).map_err(|source| ContextError::Settings {
                path: settings_path.display().to_string(),
                source,
            })?;

        let grammar_path = paths::resolve_path(&settings.grammar_file, config_dir)?;
        if let Err(e) = grammar::ensure_default_grammar(&grammar_path) {
            log::warn!(
                "Could not write the default grammar to '{}': {}",
                grammar_path.display(),
                e
            );
        }
        let grammar = GrammarStore::load(&grammar_path);

        Ok(Self::new(config_dir.to_path_buf(), settings, grammar))
    }

    /// Location of `settings.toml`.
    pub fn settings_path(&self) -> PathBuf {
        paths::settings_path(&self.config_dir)
    }

    /// The directory handler commands run in, if one is configured.
    pub fn working_dir(&self) -> Result<Option<PathBuf>, PathError> {
        self.settings
            .working_dir
            .as_deref()
            .map(|dir| paths::resolve_path(dir, &self.config_dir))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_empty_dir_bootstraps_defaults() {
        let dir = TempDir::new().unwrap();
        let context = AppContext::load_from(dir.path()).unwrap();
        assert!(dir.path().join("settings.toml").exists());
        assert!(dir.path().join("commands.json").exists());
        assert!(context.grammar.has_category("mysql"));
        assert_eq!(context.working_dir().unwrap(), None);
    }

    #[test]
    fn test_malformed_grammar_loads_empty() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("commands.json"), "not json").unwrap();
        let context = AppContext::load_from(dir.path()).unwrap();
        assert!(context.grammar.is_empty());
    }

    #[test]
    fn test_working_dir_is_resolved_against_config_dir() {
        let dir = TempDir::new().unwrap();
        let settings = Settings {
            working_dir: Some("stack".to_string()),
            ..Settings::default()
        };
        let context = AppContext::new(dir.path().to_path_buf(), settings, GrammarStore::default());
        assert_eq!(context.working_dir().unwrap(), Some(dir.path().join("stack")));
    }
}
