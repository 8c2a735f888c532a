// src/core/strategies/php.rs

use super::{ValidationStrategy, check_at_most, generic::GenericStrategy};
use crate::{
    core::{grammar::GrammarStore, outcome::ValidationOutcome},
    models::Invocation,
};

const ZERO_ARG_ACTIONS: &[&str] = &["version", "info", "ini", "update"];

/// `ext` subcommands that take an extension name.
const EXT_TOGGLES: &[&str] = &["enable", "disable"];

/// Rules for the `php` category.
#[derive(Debug, Default)]
pub struct PhpStrategy;

impl PhpStrategy {
    fn validate_ext(invocation: &Invocation) -> ValidationOutcome {
        let args = &invocation.args;
        match args.as_slice() {
            [] => ValidationOutcome::ok(0),
            [sub] if sub == "list" => ValidationOutcome::ok(0),
            [sub, rest @ ..] if EXT_TOGGLES.contains(&sub.as_str()) => {
                let command = format!("php ext {}", sub);
                if rest.is_empty() {
                    ValidationOutcome::missing_args(command, 1)
                } else {
                    check_at_most(&command, 1, rest)
                }
            }
            _ => ValidationOutcome::unknown_command(invocation.command_line()),
        }
    }
}

impl ValidationStrategy for PhpStrategy {
    fn name(&self) -> &'static str {
        "php"
    }

    fn validate(&self, invocation: &Invocation, grammar: &GrammarStore) -> ValidationOutcome {
        let action = invocation.action.as_str();

        if ZERO_ARG_ACTIONS.contains(&action) {
            return check_at_most(&format!("php {}", action), 0, &invocation.args);
        }
        if action == "ext" {
            return Self::validate_ext(invocation);
        }
        GenericStrategy.validate(invocation, grammar)
    }
}
