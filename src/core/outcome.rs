// src/core/outcome.rs

use thiserror::Error;

/// The ways an invocation can be rejected by validation.
///
/// Messages are plain text; coloring belongs to the presentation layer, so two
/// outcomes of the same kind compare equal however they end up being printed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The category is not in the grammar.
    #[error("Unknown category '{category}'. Run 'stackctl help' to list the categories.")]
    UnknownCategory { category: String },
    /// The category exists but no entry matches.
    #[error("Unknown command '{command}'.")]
    UnknownCommand { command: String },
    /// No utility matches the typed prefix.
    #[error("Unknown utility '{command}'. Run 'stackctl -u help' to list the utilities.")]
    UnknownUtilsCommand { command: String },
    /// Fewer arguments than the entry expects.
    #[error("Missing arguments for '{command}': expected {expected}.")]
    MissingArgs { command: String, expected: usize },
    /// More arguments than the entry expects.
    #[error("Too many arguments for '{command}': unexpected '{extra}'.")]
    TooManyArgs { command: String, extra: String },
    /// A multi-word utility was given without its subcommand.
    #[error("'{command}' needs a subcommand. Available: {}.", .options.join(", "))]
    MissingSubcommand {
        command: String,
        options: Vec<String>,
    },
}

/// The result of validating one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    expected_args: usize,
    error: Option<ValidationError>,
}

impl ValidationOutcome {
    /// Accepted, expecting `expected_args` arguments.
    pub fn ok(expected_args: usize) -> Self {
        Self {
            expected_args,
            error: None,
        }
    }

    /// Rejected: unknown category.
    pub fn unknown_category(category: impl Into<String>) -> Self {
        Self::rejected(ValidationError::UnknownCategory {
            category: category.into(),
        })
    }

    /// Rejected: no grammar entry for `command`.
    pub fn unknown_command(command: impl Into<String>) -> Self {
        Self::rejected(ValidationError::UnknownCommand {
            command: command.into(),
        })
    }

    /// Rejected: no utility for `command`.
    pub fn unknown_utils_command(command: impl Into<String>) -> Self {
        Self::rejected(ValidationError::UnknownUtilsCommand {
            command: command.into(),
        })
    }

    /// Rejected: `extra` was not expected.
    pub fn too_many_args(command: impl Into<String>, extra: impl Into<String>) -> Self {
        Self::rejected(ValidationError::TooManyArgs {
            command: command.into(),
            extra: extra.into(),
        })
    }

    /// Rejected: `command` needs `expected` arguments.
    pub fn missing_args(command: impl Into<String>, expected: usize) -> Self {
        Self {
            expected_args: expected,
            error: Some(ValidationError::MissingArgs {
                command: command.into(),
                expected,
            }),
        }
    }

    /// Rejected: `command` needs one of `options`.
    pub fn missing_subcommand(command: impl Into<String>, options: Vec<String>) -> Self {
        Self::rejected(ValidationError::MissingSubcommand {
            command: command.into(),
            options,
        })
    }

    fn rejected(error: ValidationError) -> Self {
        Self {
            expected_args: 0,
            error: Some(error),
        }
    }

    /// True when validation passed.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// The user-facing message; empty when validation passed.
    pub fn message(&self) -> String {
        self.error
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    /// The argument count the resolved command expects, or 0 when not applicable.
    pub fn expected_args(&self) -> usize {
        self.expected_args
    }

    /// The rejection, if any.
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// The expected argument count, or the rejection.
    pub fn into_result(self) -> Result<usize, ValidationError> {
        match self.error {
            None => Ok(self.expected_args),
            Some(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_has_empty_message() {
        let outcome = ValidationOutcome::ok(2);
        assert!(outcome.is_ok());
        assert_eq!(outcome.message(), "");
        assert_eq!(outcome.expected_args(), 2);
        assert_eq!(outcome.into_result(), Ok(2));
    }

    #[test]
    fn test_missing_args_carries_expected_count() {
        let outcome = ValidationOutcome::missing_args("mysql create", 2);
        assert!(!outcome.is_ok());
        assert_eq!(outcome.expected_args(), 2);
        assert_eq!(
            outcome.message(),
            "Missing arguments for 'mysql create': expected 2."
        );
    }

    #[test]
    fn test_missing_subcommand_lists_options() {
        let outcome = ValidationOutcome::missing_subcommand(
            "-u backup",
            vec!["create".to_string(), "list".to_string()],
        );
        assert_eq!(
            outcome.message(),
            "'-u backup' needs a subcommand. Available: create, list."
        );
    }

    #[test]
    fn test_rejections_report_no_expected_count() {
        for outcome in [
            ValidationOutcome::unknown_category("docker"),
            ValidationOutcome::unknown_command("apache fly"),
            ValidationOutcome::unknown_utils_command("-u warp"),
            ValidationOutcome::too_many_args("-vh show", "x"),
        ] {
            assert!(!outcome.is_ok());
            assert!(!outcome.message().is_empty());
            assert_eq!(outcome.expected_args(), 0);
        }
    }
}
