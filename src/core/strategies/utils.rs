// src/core/strategies/utils.rs

use super::{ValidationStrategy, check_arity};
use crate::{
    constants::{BACKUP_PREFIX, UTILS_PREFIX},
    core::{
        grammar::{GrammarEntry, GrammarStore, expected_arg_count},
        outcome::ValidationOutcome,
    },
    models::Invocation,
};
use std::collections::BTreeMap;

const CATEGORY: &str = "utils";

/// Utility commands, written `-u <action> [subcommand] [args...]` in the grammar.
///
/// Keys are found by their literal head, so `-u logs apache` resolves to
/// `-u logs <service>`. Expected counts come from the number of key segments
/// after the head, falling back to the description's placeholders for keys
/// that have no segments after it.
#[derive(Debug, Default)]
pub struct UtilsStrategy {
    /// Literal head -> number of key tokens that follow it.
    segment_overrides: BTreeMap<String, usize>,
}

impl UtilsStrategy {
    /// Builds the segment table from the `utils` entries of `grammar`.
    pub fn from_grammar(grammar: &GrammarStore) -> Self {
        let mut segment_overrides: BTreeMap<String, usize> = BTreeMap::new();
        for entry in grammar.entries(CATEGORY) {
            let tail = entry.tail_len();
            if tail == 0 {
                continue;
            }
            let count = segment_overrides
                .entry(entry.literal_head().join(" "))
                .or_insert(tail);
            *count = (*count).max(tail);
        }
        Self { segment_overrides }
    }

    fn expected_for(&self, entry: &GrammarEntry) -> usize {
        self.segment_overrides
            .get(&entry.literal_head().join(" "))
            .copied()
            .unwrap_or_else(|| expected_arg_count(entry))
    }

    /// `backup` becomes `-u backup`; an action that already carries the prefix is kept.
    fn lookup_base(action: &str) -> String {
        if action.is_empty() || action == UTILS_PREFIX {
            UTILS_PREFIX.to_string()
        } else if action.starts_with(&format!("{} ", UTILS_PREFIX)) {
            action.to_string()
        } else {
            format!("{} {}", UTILS_PREFIX, action)
        }
    }

    fn is_backup_command(base: &str) -> bool {
        let wanted: Vec<&str> = BACKUP_PREFIX.split_whitespace().collect();
        base.split_whitespace().collect::<Vec<_>>().starts_with(&wanted)
    }

    fn backup_subcommands(grammar: &GrammarStore) -> Vec<String> {
        let depth = BACKUP_PREFIX.split_whitespace().count();
        let mut options: Vec<String> = grammar
            .keys_with_prefix(CATEGORY, BACKUP_PREFIX)
            .iter()
            .filter_map(|key| key.split_whitespace().nth(depth).map(str::to_string))
            .collect();
        options.dedup();
        options
    }

    fn validate_restore(args: &[String]) -> ValidationOutcome {
        check_arity(
            &format!("{} restore", BACKUP_PREFIX),
            1,
            args.get(1..).unwrap_or_default(),
        )
    }
}

impl ValidationStrategy for UtilsStrategy {
    fn name(&self) -> &'static str {
        "utils"
    }

    fn validate(&self, invocation: &Invocation, grammar: &GrammarStore) -> ValidationOutcome {
        let action = invocation.action.as_str();
        let args = &invocation.args;

        if action == "backup" && args.first().is_some_and(|a| a == "restore") {
            return Self::validate_restore(args);
        }

        let base = Self::lookup_base(action);
        let raw_action = action
            .strip_prefix(&format!("{} ", UTILS_PREFIX))
            .unwrap_or(action);

        // (candidate key, arguments it consumes)
        let mut candidates = Vec::with_capacity(3);
        if let Some(first) = args.first() {
            candidates.push((format!("{} {}", base, first), 1));
        }
        candidates.push((base.clone(), 0));
        candidates.push((raw_action.to_string(), 0));

        for (candidate, consumed) in candidates.iter().filter(|(c, _)| !c.is_empty()) {
            if let Some(entry) = grammar.lookup_literal(CATEGORY, candidate) {
                log::debug!("Resolved utils candidate '{}' to '{}'", candidate, entry.key);
                let label = entry.literal_head().join(" ");
                let remaining = args.get(*consumed..).unwrap_or_default();
                return check_arity(&label, self.expected_for(entry), remaining);
            }
        }

        if Self::is_backup_command(&base) {
            return ValidationOutcome::missing_subcommand(
                BACKUP_PREFIX,
                Self::backup_subcommands(grammar),
            );
        }

        let command_text = std::iter::once(base.as_str())
            .chain(args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ");
        ValidationOutcome::unknown_utils_command(command_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{outcome::ValidationError, strategies::test_support::*};

    fn check(action: &str, args: &[&str]) -> ValidationOutcome {
        let store = bundled();
        UtilsStrategy::from_grammar(&store).validate(&invocation("utils", action, args), &store)
    }

    #[test]
    fn test_backup_restore() {
        assert_eq!(
            check("backup", &["restore"]).error(),
            Some(&ValidationError::MissingArgs {
                command: "-u backup restore".to_string(),
                expected: 1,
            })
        );
        assert!(check("backup", &["restore", "site.zip"]).is_ok());
        assert!(matches!(
            check("backup", &["restore", "site.zip", "extra"]).error(),
            Some(ValidationError::TooManyArgs { extra, .. }) if extra == "extra"
        ));
    }

    #[test]
    fn test_backup_without_subcommand_lists_options() {
        let expected = Some(ValidationError::MissingSubcommand {
            command: "-u backup".to_string(),
            options: vec!["create".to_string(), "list".to_string(), "restore".to_string()],
        });
        assert_eq!(check("backup", &[]).error().cloned(), expected);
        assert_eq!(check("backup", &["nope"]).error().cloned(), expected);
    }

    #[test]
    fn test_subcommand_consumes_first_argument() {
        assert!(check("backup", &["create"]).is_ok());
        assert!(matches!(
            check("backup", &["list", "all"]).error(),
            Some(ValidationError::TooManyArgs { extra, .. }) if extra == "all"
        ));
        assert!(check("hosts", &["add", "shop.test"]).is_ok());
        assert!(matches!(
            check("hosts", &["remove"]).error(),
            Some(ValidationError::MissingArgs { command, expected: 1 }) if command == "-u hosts remove"
        ));
    }

    #[test]
    fn test_literal_head_lookup_for_placeholder_keys() {
        assert!(check("logs", &["apache"]).is_ok());
        assert!(matches!(
            check("logs", &[]).error(),
            Some(ValidationError::MissingArgs { command, expected: 1 }) if command == "-u logs"
        ));
    }

    #[test]
    fn test_prefixed_action_is_accepted() {
        assert!(check("-u ports", &[]).is_ok());
        assert!(check("clean", &[]).is_ok());
    }

    #[test]
    fn test_unknown_utility() {
        assert!(matches!(
            check("warp", &["9"]).error(),
            Some(ValidationError::UnknownUtilsCommand { command }) if command == "-u warp 9"
        ));
        assert!(matches!(
            check("", &[]).error(),
            Some(ValidationError::UnknownUtilsCommand { command }) if command == "-u"
        ));
    }

    #[test]
    fn test_overrides_take_the_longest_tail() {
        let store = GrammarStore::from_json(
            r#"{"commands": {"utils": {
                "-u logs <service>": "Tail logs",
                "-u logs <service> <lines>": "Tail <lines> of logs"
            }}}"#,
        )
        .unwrap();
        let strategy = UtilsStrategy::from_grammar(&store);
        assert_eq!(strategy.segment_overrides.get("-u logs"), Some(&2));
        assert!(strategy
            .validate(&invocation("utils", "logs", &["apache", "20"]), &store)
            .is_ok());
    }
}
