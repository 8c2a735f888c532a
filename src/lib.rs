//! stackctl: routes, validates and dispatches commands for a local
//! Apache, MySQL and PHP development stack.

/// Command-line surface: router, dispatcher and handlers.
pub mod cli;
/// Fixed names, prefixes and whitelists.
pub mod constants;
/// Grammar, validation and configuration.
pub mod core;
/// Invocation and settings data types.
pub mod models;
pub mod system;
