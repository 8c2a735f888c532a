// src/cli/router.rs

use crate::{
    constants::{CORE_ACTIONS, CORE_CATEGORY, DEFAULT_ACTION, UTILS_PREFIX, VHOSTS_PREFIX},
    models::Invocation,
};
use thiserror::Error;

/// Why the tokens could not be routed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// Nothing was typed after the program name.
    #[error("No arguments given.")]
    NoArguments,
}

/// Turns the raw process tokens into a canonical [`Invocation`].
///
/// Token 0 is the program name and is ignored. The accepted shapes are:
///
/// - `stackctl <core-action> [args...]` (e.g. `stackctl status detail`)
/// - `stackctl -u <action> [args...]` (category `utils`)
/// - `stackctl -vh <action> [args...]` (category `vhosts`)
/// - `stackctl <category> [action] [args...]`, where the action defaults to `help`
pub fn route(tokens: &[String]) -> Result<Invocation, RouteError> {
    let Some(first) = tokens.get(1) else {
        return Err(RouteError::NoArguments);
    };
    let action = tokens.get(2).cloned();
    let rest = tokens.get(3..).unwrap_or_default().to_vec();

    let invocation = if CORE_ACTIONS.contains(&first.as_str()) {
        Invocation::new(
            CORE_CATEGORY,
            first.as_str(),
            tokens.get(2..).unwrap_or_default().to_vec(),
        )
    } else if first == UTILS_PREFIX {
        Invocation::new("utils", action.unwrap_or_default(), rest)
    } else if first == VHOSTS_PREFIX {
        Invocation::new("vhosts", action.unwrap_or_default(), rest)
    } else {
        Invocation::new(
            first.as_str(),
            action.unwrap_or_else(|| DEFAULT_ACTION.to_string()),
            rest,
        )
    };

    log::debug!("Routed {:?} to {:?}", tokens, invocation);
    Ok(invocation)
}
