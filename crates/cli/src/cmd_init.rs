// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Init command implementation.

use gherkin_audit::cli::{Cli, InitArgs};
use gherkin_audit::config::defaults::{CONFIG_FILE, TEMPLATE};
use gherkin_audit::error::ExitCode;

/// Run the init command.
pub fn run(cli: &Cli, args: &InitArgs) -> anyhow::Result<ExitCode> {
    let root = cli.project_root()?;
    let config_path = root.join(CONFIG_FILE);

    if config_path.exists() && !args.force {
        eprintln!("{CONFIG_FILE} already exists. Use --force to overwrite.");
        return Ok(ExitCode::ConfigError);
    }

    std::fs::write(&config_path, TEMPLATE)?;
    println!("Created {CONFIG_FILE}");
    Ok(ExitCode::Success)
}
