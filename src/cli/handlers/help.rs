// src/cli/handlers/help.rs

use super::{Handler, commons};
use crate::core::context::AppContext;
use anyhow::Result;
use std::sync::Arc;

/// Lists the command categories, or the commands of one category.
#[derive(Debug)]
pub struct HelpHandler {
    context: Arc<AppContext>,
}

impl HelpHandler {
    /// A handler over the shared context.
    pub fn new(context: Arc<AppContext>) -> Self {
        Self { context }
    }

    /// Factory used by the dispatcher bindings.
    pub fn build(context: &Arc<AppContext>) -> Result<Box<dyn Handler>> {
        Ok(Box::new(Self::new(Arc::clone(context))))
    }

    fn overview(&self) -> String {
        let palette = &self.context.palette;
        let mut lines = vec![
            palette.accent("Usage: stackctl <category> <action> [args...]"),
            "       stackctl -u <utility> [args...]".to_string(),
            "       stackctl -vh <action> [args...]".to_string(),
            String::new(),
            palette.accent("Categories:"),
        ];
        lines.extend(
            self.context
                .grammar
                .categories()
                .map(|category| format!("  {}", palette.info(category))),
        );
        lines.push(String::new());
        lines.push("Run 'stackctl help <category>' to list its commands.".to_string());
        lines.join("\n")
    }
}

impl Handler for HelpHandler {
    fn execute(&self, action: &str, _args: &[String]) -> Option<Result<String>> {
        match action {
            "" | "help" => self.help().map(Ok),
            category => Some(Ok(commons::render_category_help(
                &self.context.grammar,
                &self.context.palette,
                category,
            ))),
        }
    }

    fn help(&self) -> Option<String> {
        Some(self.overview())
    }
}
