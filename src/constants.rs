// src/constants.rs

/// Environment variable that overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "STACKCTL_CONFIG_DIR";

/// The name of the settings file inside the configuration directory.
pub const SETTINGS_FILENAME: &str = "settings.toml";

/// The default name of the command grammar file inside the configuration directory.
pub const GRAMMAR_FILENAME: &str = "commands.json";

/// Actions that may be typed without a category (`stackctl status detail`).
pub const CORE_ACTIONS: &[&str] = &["-v", "--version", "status", "lang", "start", "stop"];

/// The category assigned to bare core actions.
pub const CORE_CATEGORY: &str = "core";

/// Shorthand that routes to the `utils` category (`stackctl -u backup create`).
pub const UTILS_PREFIX: &str = "-u";

/// Shorthand that routes to the `vhosts` category (`stackctl -vh open mysite`).
pub const VHOSTS_PREFIX: &str = "-vh";

/// The action assumed when a category is given on its own.
pub const DEFAULT_ACTION: &str = "help";

/// The only argument accepted by `status`.
pub const STATUS_DETAIL: &str = "detail";

/// Utils commands under this prefix suggest their subcommands when one is missing.
pub const BACKUP_PREFIX: &str = "-u backup";

/// Every category the dispatcher knows how to bind to a handler.
pub const KNOWN_CATEGORIES: &[&str] = &[
    "core", "help", "php", "mysql", "utils", "vhosts", "apache", "laravel",
];
