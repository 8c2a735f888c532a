//! # Validation Strategies
//!
//! Each category validates its actions with its own rules. A strategy receives
//! the invocation and the grammar and returns a [`ValidationOutcome`]; it never
//! executes anything.
//!
//! - **`core`**: fixed whitelist of bare actions with literal argument rules.
//! - **`help`**: the action, if any, must name a grammar category.
//! - **`php`**: zero-argument actions and the two-level `ext` subcommand.
//! - **`mysql`**: static argument tables plus the `user` and info groups.
//! - **`utils`**: literal-prefix lookup with subcommand suggestions.
//! - **`vhosts`**: `show` and `open` arity rules.
//! - **`generic`**: longest literal-head match against the grammar, used by
//!   every other category.

use crate::{
    core::{grammar::GrammarStore, outcome::ValidationOutcome},
    models::Invocation,
};
use std::{cmp::Ordering, fmt::Debug};

/// Bare core actions.
pub mod core_actions;
/// Grammar-driven fallback for every other category.
pub mod generic;
/// `help` targets.
pub mod help;
/// `mysql` argument tables.
pub mod mysql;
/// `php` actions and `ext` subcommands.
pub mod php;
/// `-u` utilities.
pub mod utils;
/// `-vh` virtual hosts.
pub mod vhosts;

/// Validation rules for one category.
pub trait ValidationStrategy: Debug {
    /// Name used in debug logs.
    fn name(&self) -> &'static str;

    fn validate(&self, invocation: &Invocation, grammar: &GrammarStore) -> ValidationOutcome;
}

/// Compares the supplied arguments with the expected count. Surplus arguments
/// are all named in the rejection.
pub(crate) fn check_arity(command: &str, expected: usize, provided: &[String]) -> ValidationOutcome {
    match provided.len().cmp(&expected) {
        Ordering::Less => ValidationOutcome::missing_args(command, expected),
        Ordering::Greater => {
            let extra = provided.get(expected..).unwrap_or_default().join(" ");
            ValidationOutcome::too_many_args(command, extra)
        }
        Ordering::Equal => ValidationOutcome::ok(expected),
    }
}

/// Accepts at most `max` arguments. Only the first surplus argument is named.
pub(crate) fn check_at_most(command: &str, max: usize, provided: &[String]) -> ValidationOutcome {
    match provided.get(max) {
        Some(extra) => ValidationOutcome::too_many_args(command, extra.as_str()),
        None => ValidationOutcome::ok(provided.len()),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub(crate) fn invocation(category: &str, action: &str, args: &[&str]) -> Invocation {
        Invocation::new(category, action, args.iter().map(|s| s.to_string()).collect())
    }

    pub(crate) fn bundled() -> GrammarStore {
        GrammarStore::bundled().unwrap()
    }
}
