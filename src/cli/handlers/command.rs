// src/cli/handlers/command.rs

use super::{Handler, commons};
use crate::core::context::AppContext;
use anyhow::Result;
use std::sync::Arc;

/// Runs the command templates configured under `[commands.<category>]`.
///
/// Serves every service category (`apache`, `mysql`, `php`, `utils`, `vhosts`,
/// `laravel`). The `help` action, or no action at all, lists the category's grammar.
#[derive(Debug)]
pub struct CommandHandler {
    category: &'static str,
    context: Arc<AppContext>,
}

impl CommandHandler {
    /// A handler serving `category`.
    pub fn new(category: &'static str, context: Arc<AppContext>) -> Self {
        Self { category, context }
    }

    /// Factory used by the dispatcher bindings.
    pub fn build(category: &'static str, context: &Arc<AppContext>) -> Result<Box<dyn Handler>> {
        Ok(Box::new(Self::new(category, Arc::clone(context))))
    }
}

impl Handler for CommandHandler {
    fn execute(&self, action: &str, args: &[String]) -> Option<Result<String>> {
        if action.is_empty() || action == "help" {
            return self.help().map(Ok);
        }
        Some(commons::run_configured(&self.context, self.category, action, args))
    }

    fn help(&self) -> Option<String> {
        Some(commons::render_category_help(
            &self.context.grammar,
            &self.context.palette,
            self.category,
        ))
    }
}
