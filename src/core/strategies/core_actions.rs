// src/core/strategies/core_actions.rs

use super::{ValidationStrategy, check_at_most};
use crate::{
    constants::{CORE_ACTIONS, STATUS_DETAIL},
    core::{grammar::GrammarStore, outcome::ValidationOutcome},
    models::Invocation,
};

/// Bare actions usable without a category: `status`, `lang`, `start`, ...
#[derive(Debug, Default)]
pub struct CoreStrategy;

impl ValidationStrategy for CoreStrategy {
    fn name(&self) -> &'static str {
        "core"
    }

    fn validate(&self, invocation: &Invocation, _grammar: &GrammarStore) -> ValidationOutcome {
        let action = invocation.action.as_str();
        let args = &invocation.args;

        if !CORE_ACTIONS.contains(&action) {
            return ValidationOutcome::unknown_command(invocation.command_line());
        }

        match action {
            "lang" => check_at_most(action, 1, args),
            "status" => match args.first() {
                Some(arg) if arg != STATUS_DETAIL => {
                    ValidationOutcome::too_many_args(action, arg.as_str())
                }
                _ => check_at_most(action, 1, args),
            },
            _ => check_at_most(action, 0, args),
        }
    }
}
