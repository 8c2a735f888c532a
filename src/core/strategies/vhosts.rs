// src/core/strategies/vhosts.rs

use super::{ValidationStrategy, check_at_most};
use crate::{
    constants::VHOSTS_PREFIX,
    core::{grammar::GrammarStore, outcome::ValidationOutcome},
    models::Invocation,
};

/// Rules for the `vhosts` category.
#[derive(Debug, Default)]
pub struct VhostsStrategy;

impl ValidationStrategy for VhostsStrategy {
    fn name(&self) -> &'static str {
        "vhosts"
    }

    fn validate(&self, invocation: &Invocation, _grammar: &GrammarStore) -> ValidationOutcome {
        let args = &invocation.args;
        let command = format!("{} {}", VHOSTS_PREFIX, invocation.action);

        match invocation.action.as_str() {
            "show" => check_at_most(&command, 0, args),
            "open" if args.is_empty() => ValidationOutcome::missing_args(command, 1),
            "open" => check_at_most(&command, 1, args),
            _ => ValidationOutcome::ok(args.len()),
        }
    }
}
