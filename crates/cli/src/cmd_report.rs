// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report command implementation.
//!
//! Reads gherkin story reports and writes the HTML summary.

use gherkin_audit::cli::{Cli, ReportArgs};
use gherkin_audit::config;
use gherkin_audit::error::ExitCode;
use gherkin_audit::report;
use gherkin_audit::scan;

/// Run the report command.
pub fn run(cli: &Cli, args: &ReportArgs) -> anyhow::Result<ExitCode> {
    let root = cli.project_root()?;
    let config = config::load_project(&root, cli.config.as_deref())?;
    let settings = config.report.resolve(&root, &args.overrides());

    let stories = scan::gherkin::load_stories(&settings.gherkin_dir)?;
    report::write_report(&settings.target_file, &stories)?;

    tracing::info!("gherkin report written to {}", settings.target_file.display());
    Ok(ExitCode::Success)
}
