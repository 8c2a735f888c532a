// src/core/strategies/generic.rs

use super::{ValidationStrategy, check_arity};
use crate::{
    core::{
        grammar::{GrammarEntry, GrammarStore, expected_arg_count},
        outcome::ValidationOutcome,
    },
    models::Invocation,
};

/// Grammar-driven validation used by every category without dedicated rules
/// (`apache`, `laravel`, ...).
///
/// The invocation is compared token by token against the literal head of each
/// key in its category. The longest matching head wins; the literal tokens it
/// contains beyond `<category> <action>` are not counted as arguments.
#[derive(Debug, Default)]
pub struct GenericStrategy;

/// A grammar entry resolved for an invocation.
#[derive(Debug)]
struct Resolved<'g> {
    entry: &'g GrammarEntry,
    /// Literal key tokens consumed from the front of the arguments.
    literal_args: usize,
}

impl GenericStrategy {
    fn resolve<'g>(invocation: &Invocation, grammar: &'g GrammarStore) -> Option<Resolved<'g>> {
        let category = invocation.category.as_str();
        let action = invocation.action.as_str();
        let candidate: Vec<&str> = [category, action]
            .into_iter()
            .chain(invocation.args.iter().map(String::as_str))
            .collect();

        let mut best: Option<(Resolved<'g>, usize, bool)> = None;
        for entry in grammar.entries(category) {
            let head = entry.literal_head();
            if head.len() < 2 || !candidate.starts_with(&head) {
                continue;
            }
            let literal_args = head.len() - 2;
            let fits =
                invocation.args.len().saturating_sub(literal_args) == expected_arg_count(entry);
            let better = match &best {
                None => true,
                Some((_, best_len, best_fits)) => {
                    head.len() > *best_len || (head.len() == *best_len && fits && !best_fits)
                }
            };
            if better {
                best = Some((
                    Resolved {
                        entry,
                        literal_args,
                    },
                    head.len(),
                    fits,
                ));
            }
        }

        if let Some((resolved, _, _)) = best {
            return Some(resolved);
        }

        grammar
            .lookup(category, &format!("{} {}", category, action))
            .or_else(|| grammar.lookup(category, action))
            .map(|entry| Resolved {
                entry,
                literal_args: 0,
            })
    }
}

impl ValidationStrategy for GenericStrategy {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn validate(&self, invocation: &Invocation, grammar: &GrammarStore) -> ValidationOutcome {
        let Some(resolved) = Self::resolve(invocation, grammar) else {
            return ValidationOutcome::unknown_command(invocation.command_line());
        };
        log::debug!(
            "Resolved '{}' to grammar key '{}'",
            invocation.command_line(),
            resolved.entry.key
        );

        let label = resolved.entry.literal_head().join(" ");
        let provided = invocation
            .args
            .get(resolved.literal_args..)
            .unwrap_or_default();
        check_arity(&label, expected_arg_count(resolved.entry), provided)
    }
}
