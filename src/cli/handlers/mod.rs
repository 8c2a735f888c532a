// src/cli/handlers/mod.rs

// This module contains the handlers the dispatcher binds categories to.

use anyhow::Result;
use std::fmt::Debug;

/// Handler for the configured service categories.
pub mod command;
/// Helpers shared by the handlers.
pub mod commons;
/// Handler for the bare core actions.
pub mod core_actions;
/// Handler for `help`.
pub mod help;

/// The work behind a validated invocation.
///
/// Both methods are optional. The dispatcher calls `execute` when a handler
/// provides it, falls back to `help`, and reports an error when neither exists.
pub trait Handler: Debug {
    /// Runs `action` with its arguments. `None` means the handler does not execute actions.
    fn execute(&self, _action: &str, _args: &[String]) -> Option<Result<String>> {
        None
    }

    /// A summary of what the handler can do. `None` means no help is available.
    fn help(&self) -> Option<String> {
        None
    }
}
