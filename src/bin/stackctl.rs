// src/bin/stackctl.rs

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use stackctl::{
    cli::{self, Cli},
    core::context::AppContext,
};
use std::sync::Arc;

/// The main entry point of the `stackctl` application.
/// It sets up logging, loads the configuration once, runs the command and
/// performs centralized error handling.
fn main() {
    env_logger::init();

    match run_cli(Cli::parse()) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("\n{}: {:#}", "Error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run_cli(cli: Cli) -> Result<i32> {
    log::debug!("CLI args parsed: {:?}", cli);

    let context = Arc::new(AppContext::load().context("Could not load the configuration")?);

    // The router expects the program name at index 0.
    let tokens: Vec<String> = std::iter::once(env!("CARGO_PKG_NAME").to_string())
        .chain(cli.args)
        .collect();

    let response = cli::run(&tokens, &context);
    if !response.output.is_empty() {
        println!("{}", response.output);
    }

    Ok(cli::exit_code(&response, &context.settings))
}
