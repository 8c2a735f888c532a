// src/core/strategies/mysql.rs

use super::{ValidationStrategy, check_arity, check_at_most};
use crate::{
    core::{
        grammar::{GrammarStore, expected_arg_count},
        outcome::ValidationOutcome,
    },
    models::Invocation,
};

/// Actions whose only accepted argument is the literal `info`.
const INFO_ACTIONS: &[&str] = &["users", "status", "ports", "shell", "version", "health"];

/// Database-level actions with a fixed argument count.
fn table_arity(action: &str, args: &[String]) -> Option<usize> {
    match action {
        "export" | "import" => Some(2),
        "create" if args.first().is_some_and(|a| a == "db") => Some(2),
        "create" | "drop" | "data" => Some(1),
        _ => None,
    }
}

/// Rules for the `mysql` category.
#[derive(Debug, Default)]
pub struct MysqlStrategy;

impl MysqlStrategy {
    fn validate_user(args: &[String]) -> ValidationOutcome {
        match args.first().map(String::as_str) {
            Some("add") => check_arity("mysql user add", 3, args),
            Some("del") => check_arity("mysql user del", 2, args),
            _ => ValidationOutcome::ok(args.len()),
        }
    }

    fn validate_info(action: &str, args: &[String]) -> ValidationOutcome {
        let command = format!("mysql {}", action);
        match args.first() {
            Some(arg) if arg != "info" => ValidationOutcome::too_many_args(command, arg.as_str()),
            _ => check_at_most(&command, 1, args),
        }
    }
}

impl ValidationStrategy for MysqlStrategy {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn validate(&self, invocation: &Invocation, grammar: &GrammarStore) -> ValidationOutcome {
        let action = invocation.action.as_str();
        let args = &invocation.args;

        if let Some(expected) = table_arity(action, args) {
            return check_arity(&format!("mysql {}", action), expected, args);
        }
        if action == "user" {
            return Self::validate_user(args);
        }
        if INFO_ACTIONS.contains(&action) {
            return Self::validate_info(action, args);
        }

        let key = format!("mysql {}", action);
        match grammar.lookup_literal("mysql", &key) {
            Some(entry) => check_arity(&key, expected_arg_count(entry), args),
            None => ValidationOutcome::unknown_command(invocation.command_line()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{outcome::ValidationError, strategies::test_support::*};

    fn check(action: &str, args: &[&str]) -> ValidationOutcome {
        MysqlStrategy.validate(&invocation("mysql", action, args), &bundled())
    }

    #[test]
    fn test_create_db_needs_two_arguments() {
        assert!(check("create", &["db", "mydb"]).is_ok());
        assert_eq!(
            check("create", &["db"]).error(),
            Some(&ValidationError::MissingArgs {
                command: "mysql create".to_string(),
                expected: 2,
            })
        );
    }

    #[test]
    fn test_create_without_db_needs_one_argument() {
        assert!(check("create", &["table"]).is_ok());
        assert!(matches!(
            check("create", &["table", "extra"]).error(),
            Some(ValidationError::TooManyArgs { extra, .. }) if extra == "extra"
        ));
        assert!(matches!(
            check("create", &[]).error(),
            Some(ValidationError::MissingArgs { expected: 1, .. })
        ));
    }

    #[test]
    fn test_export_reports_only_overflow_tokens() {
        assert!(check("export", &["shop", "shop.sql"]).is_ok());
        assert!(matches!(
            check("export", &["shop", "shop.sql", "a", "b"]).error(),
            Some(ValidationError::TooManyArgs { extra, .. }) if extra == "a b"
        ));
    }

    #[test]
    fn test_user_add_and_del() {
        assert!(check("user", &["add", "bob", "secret"]).is_ok());
        assert!(matches!(
            check("user", &["add", "bob"]).error(),
            Some(ValidationError::MissingArgs { expected: 3, .. })
        ));
        assert!(check("user", &["del", "bob"]).is_ok());
        assert!(!check("user", &["del", "bob", "alice"]).is_ok());
        assert!(check("user", &["rename", "bob", "alice", "x"]).is_ok());
    }

    #[test]
    fn test_info_group() {
        assert!(check("status", &[]).is_ok());
        assert!(check("ports", &["info"]).is_ok());
        assert!(matches!(
            check("health", &["now"]).error(),
            Some(ValidationError::TooManyArgs { extra, .. }) if extra == "now"
        ));
        assert!(matches!(
            check("users", &["info", "more"]).error(),
            Some(ValidationError::TooManyArgs { extra, .. }) if extra == "more"
        ));
    }

    #[test]
    fn test_other_actions_use_the_grammar() {
        assert!(check("start", &[]).is_ok());
        assert!(!check("logs", &["20"]).is_ok());
        assert!(matches!(
            check("optimize", &[]).error(),
            Some(ValidationError::UnknownCommand { command }) if command == "mysql optimize"
        ));
    }
}
