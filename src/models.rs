// src/models.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// --- RUNTIME MODELS ---

/// The canonical `(category, action, args)` triple produced by the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Top-level grouping, e.g. `mysql` or `utils`.
    pub category: String,
    /// Operation within the category; may be empty for shorthands.
    pub action: String,
    /// Remaining tokens.
    pub args: Vec<String>,
}

impl Invocation {
    /// Builds an invocation. A lone empty argument (`[""]`), which some shells
    /// pass when a trailing variable expands to nothing, is treated as no arguments.
    pub fn new(category: impl Into<String>, action: impl Into<String>, args: Vec<String>) -> Self {
        let args = match args.as_slice() {
            [only] if only.is_empty() => Vec::new(),
            _ => args,
        };
        Self {
            category: category.into(),
            action: action.into(),
            args,
        }
    }

    /// The invocation as typed, e.g. `mysql create db shop`.
    pub fn command_line(&self) -> String {
        std::iter::once(self.category.as_str())
            .chain(std::iter::once(self.action.as_str()))
            .chain(self.args.iter().map(String::as_str))
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// --- `settings.toml` MODELS ---

/// Represents the deserialized structure of `settings.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Preferred language code managed by `stackctl lang`. Stored only;
    /// messages are always printed in English.
    pub language: String,
    /// Path of the command grammar file, relative to the config directory unless absolute.
    pub grammar_file: String,
    /// Directory in which handler commands run. Supports `~` and `$VAR`.
    pub working_dir: Option<String>,
    /// Exit with status 2 when a command is rejected by validation.
    pub strict_exit_status: bool,
    /// Color names for the terminal palette.
    pub palette: PaletteConfig,
    /// Services started and stopped by the bare `start`/`stop` actions.
    pub services: BTreeMap<String, ServiceConfig>,
    /// Per-category command templates, keyed by `action [subcommand...]`.
    pub commands: BTreeMap<String, BTreeMap<String, String>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            grammar_file: crate::constants::GRAMMAR_FILENAME.to_string(),
            working_dir: None,
            strict_exit_status: false,
            palette: PaletteConfig::default(),
            services: BTreeMap::new(),
            commands: BTreeMap::new(),
        }
    }
}

/// Color names for each role of the terminal palette.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PaletteConfig {
    /// Color of rejections and failures.
    pub error: String,
    /// Color of completed actions.
    pub success: String,
    /// Color of command keys.
    pub info: String,
    /// Color of configuration warnings.
    pub warning: String,
    /// Color of headers.
    pub accent: String,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            error: "red".to_string(),
            success: "green".to_string(),
            info: "cyan".to_string(),
            warning: "yellow".to_string(),
            accent: "magenta".to_string(),
        }
    }
}

/// Command lines that control one long-running service.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Command line that starts the service.
    pub start: Option<String>,
    /// Command line that stops the service.
    pub stop: Option<String>,
    /// Command line that succeeds while the service runs.
    pub status: Option<String>,
}
