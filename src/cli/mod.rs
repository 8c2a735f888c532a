use clap::Parser;
use std::sync::Arc;

use crate::{
    cli::{
        dispatcher::{Dispatcher, HandlerRegistry},
        handlers::{Handler, help::HelpHandler},
        router::RouteError,
    },
    core::{context::AppContext, validator::Validator},
    models::Settings,
};

/// Category to handler bindings.
pub mod dispatcher;
/// The work behind each category.
pub mod handlers;
/// Raw tokens to `Invocation`.
pub mod router;

/// stackctl: control panel for a local web development stack.
#[derive(Parser, Debug)]
#[command(author, about)]
// Help and version are commands of our own grammar; clap must not claim them.
/// Command-line arguments, passed through to the router untouched.
#[command(disable_help_flag = true)]
#[command(disable_version_flag = true)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// The raw command line after the program name.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// What one run of the pipeline produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliResponse {
    /// Text to print on stdout.
    pub output: String,
    /// True when the command never reached a handler, or its handler failed.
    pub rejected: bool,
}

impl CliResponse {
    fn accepted(output: String) -> Self {
        Self {
            output,
            rejected: false,
        }
    }

    fn rejected(output: String) -> Self {
        Self {
            output,
            rejected: true,
        }
    }
}

/// Routes, validates and dispatches one command line.
///
/// `tokens` includes the program name at index 0. Every failure is rendered
/// into the response text; nothing here panics or exits.
pub fn run(tokens: &[String], context: &Arc<AppContext>) -> CliResponse {
    let palette = &context.palette;

    let invocation = match router::route(tokens) {
        Ok(invocation) => invocation,
        Err(RouteError::NoArguments) => {
            let usage = HelpHandler::new(Arc::clone(context))
                .help()
                .unwrap_or_default();
            return CliResponse::rejected(usage);
        }
    };

    let validator = Validator::new(Arc::clone(&context.grammar));
    if let Err(e) = validator.validate(&invocation).into_result() {
        log::debug!("Rejected '{}': {:?}", invocation.command_line(), e);
        return CliResponse::rejected(palette.error(&e.to_string()));
    }

    let dispatcher = Dispatcher::new(HandlerRegistry::with_defaults(context));
    match dispatcher.dispatch(&invocation) {
        Ok(output) => CliResponse::accepted(output),
        Err(e) => CliResponse::rejected(palette.error(&e.to_string())),
    }
}

/// Exit code for a rejected command while `strict_exit_status` is set.
pub const REJECTED_EXIT_CODE: i32 = 2;

/// The process exit code for `response`. Rejections only change it under
/// `strict_exit_status`.
pub fn exit_code(response: &CliResponse, settings: &Settings) -> i32 {
    if response.rejected && settings.strict_exit_status {
        REJECTED_EXIT_CODE
    } else {
        0
    }
}
