// src/cli/handlers/commons.rs

// Shared functions used by multiple handlers.

use crate::{
    core::{color::Palette, context::AppContext, grammar::GrammarStore},
    system::executor,
};
use anyhow::{Context, Result, anyhow};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::collections::BTreeMap;

lazy_static! {
    static ref POSITIONAL_RE: Regex = Regex::new(r"\{(\d+)(?::(\w+))?\}").unwrap();
}

/// Escapes `value` for the modifier written after a positional (`{0:sql}`).
///
/// - `sql`: the inside of a single-quoted SQL string literal.
/// - `ident`: the inside of a backquoted SQL identifier.
fn apply_modifier(modifier: Option<&str>, value: &str) -> Result<String> {
    match modifier {
        None => Ok(value.to_string()),
        Some("sql") => Ok(value.replace('\\', "\\\\").replace('\'', "''")),
        Some("ident") => Ok(value.replace('`', "``")),
        Some(other) => Err(anyhow!("Unknown template modifier '{}'", other)),
    }
}

/// Token that expands to every argument not consumed by the template key.
const ALL_ARGS_TOKEN: &str = "{args}";

/// Finds the longest template key whose words start `action args...`.
/// Returns the template and the arguments left after the key's subcommand words.
pub fn resolve_template<'a>(
    templates: &'a BTreeMap<String, String>,
    action: &str,
    args: &'a [String],
) -> Option<(&'a str, &'a [String])> {
    let words: Vec<&str> = std::iter::once(action)
        .chain(args.iter().map(String::as_str))
        .collect();

    templates
        .iter()
        .filter_map(|(key, template)| {
            let key_words: Vec<&str> = key.split_whitespace().collect();
            (!key_words.is_empty() && words.starts_with(&key_words))
                .then_some((key_words.len(), template))
        })
        .max_by_key(|(len, _)| *len)
        .map(|(len, template)| {
            let remaining = args.get(len - 1..).unwrap_or_default();
            (template.as_str(), remaining)
        })
}

/// Splits a template into program and arguments, then substitutes `{N}`,
/// `{N:modifier}` and `{args}` inside each word. A substituted value never
/// splits a word.
pub fn interpolate(template: &str, args: &[String]) -> Result<Vec<String>> {
    let words = executor::split_command_line(template)?;
    let mut argv = Vec::with_capacity(words.len() + args.len());

    for word in words {
        if word == ALL_ARGS_TOKEN {
            argv.extend(args.iter().cloned());
            continue;
        }

        let mut failure = None;
        let substituted = POSITIONAL_RE.replace_all(&word, |caps: &Captures<'_>| {
            let token = caps.get(0).map_or("", |m| m.as_str());
            let value = caps
                .get(1)
                .and_then(|m| m.as_str().parse::<usize>().ok())
                .and_then(|index| args.get(index));
            let Some(value) = value else {
                failure.get_or_insert_with(|| {
                    anyhow!("Template '{}' needs an argument for {}", template, token)
                });
                return String::new();
            };
            apply_modifier(caps.get(2).map(|m| m.as_str()), value).unwrap_or_else(|e| {
                failure.get_or_insert(e);
                String::new()
            })
        });
        if let Some(e) = failure {
            return Err(e);
        }
        argv.push(substituted.replace(ALL_ARGS_TOKEN, &args.join(" ")));
    }
    Ok(argv)
}

/// Resolves, interpolates and runs the template configured for `category action`.
pub fn run_configured(
    context: &AppContext,
    category: &str,
    action: &str,
    args: &[String],
) -> Result<String> {
    let (template, remaining) = context
        .settings
        .commands
        .get(category)
        .and_then(|templates| resolve_template(templates, action, args))
        .ok_or_else(|| anyhow!("No command is configured for '{} {}'", category, action))?;

    let argv = interpolate(template, remaining)?;
    let cwd = context.working_dir()?;
    executor::execute_captured(&argv, cwd.as_deref())
        .with_context(|| format!("'{} {}' failed", category, action))
}

/// Renders the commands of one grammar category with their descriptions.
pub fn render_category_help(grammar: &GrammarStore, palette: &Palette, category: &str) -> String {
    let entries: Vec<_> = grammar.entries(category).collect();
    let width = entries.iter().map(|e| e.key.len()).max().unwrap_or(0);

    let mut lines = vec![palette.accent(&format!("{} commands:", category))];
    lines.extend(entries.iter().map(|entry| {
        format!(
            "  {}  {}",
            palette.info(&format!("{:<width$}", entry.key, width = width)),
            entry.description
        )
    }));
    lines.join("\n")
}
