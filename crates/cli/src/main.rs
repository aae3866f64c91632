// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod cmd_enforce;
mod cmd_init;
mod cmd_report;

use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gherkin_audit::cli::{Cli, Command};
use gherkin_audit::error::{Error, ExitCode};

/// Environment variable holding a full `tracing` filter directive.
const LOG_ENV: &str = "GHERKIN_AUDIT_LOG";

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Command::Enforce(args) => cmd_enforce::run(&cli, args),
        Command::Report(args) => cmd_report::run(&cli, args),
        Command::Init(args) => cmd_init::run(&cli, args),
    };

    match result {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("gherkin-audit: {e:#}");
            let code = e.downcast_ref::<Error>().map_or(ExitCode::InternalError, Error::exit_code);
            code.into()
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}
