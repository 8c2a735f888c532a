// src/core/strategies/help.rs

use super::ValidationStrategy;
use crate::{
    core::{grammar::GrammarStore, outcome::ValidationOutcome},
    models::Invocation,
};

/// `help` lists every category; `help <category>` lists one category's commands.
#[derive(Debug, Default)]
pub struct HelpStrategy;

impl ValidationStrategy for HelpStrategy {
    fn name(&self) -> &'static str {
        "help"
    }

    fn validate(&self, invocation: &Invocation, grammar: &GrammarStore) -> ValidationOutcome {
        let action = invocation.action.as_str();

        // `stackctl help` routes with the default action, which is `help` itself.
        if action.is_empty() || (action == "help" && invocation.args.is_empty()) {
            return ValidationOutcome::ok(0);
        }
        if !grammar.has_category(action) || !invocation.args.is_empty() {
            return ValidationOutcome::unknown_command(invocation.command_line());
        }
        ValidationOutcome::ok(0)
    }
}
