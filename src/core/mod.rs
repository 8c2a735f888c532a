// src/core/mod.rs

/// Terminal palette.
pub mod color;
pub mod context;
pub mod grammar;
/// Validation results and the rejection taxonomy.
pub mod outcome;
/// Configuration directory and path expansion.
pub mod paths;
/// `settings.toml` loading and saving.
pub mod settings;
pub mod strategies;
pub mod validator;
