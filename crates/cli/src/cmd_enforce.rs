// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Enforce command implementation.
//!
//! Cross-references surefire reports with gherkin reports and logs every
//! finding before deciding whether the run fails.

use std::io::Write;

use serde::Serialize;

use gherkin_audit::cli::{Cli, EnforceArgs, OutputFormat};
use gherkin_audit::config;
use gherkin_audit::enforce::{self, Findings, Verdict};
use gherkin_audit::error::ExitCode;
use gherkin_audit::scan;

/// JSON form of an enforcement run.
#[derive(Serialize)]
struct JsonOutput<'a> {
    passed: bool,
    #[serde(flatten)]
    findings: &'a Findings,
}

/// Run the enforce command.
pub fn run(cli: &Cli, args: &EnforceArgs) -> anyhow::Result<ExitCode> {
    let root = cli.project_root()?;
    let config = config::load_project(&root, cli.config.as_deref())?;
    let settings = config.enforce.resolve(&root, &args.overrides());
    tracing::debug!("surefire reports: {}", settings.surefire_dir.display());
    tracing::debug!("gherkin reports: {}", settings.gherkin_dir.display());

    let surefire = scan::surefire::scan(&settings.surefire_dir)?;
    let gherkin = scan::gherkin::scan(&settings.gherkin_dir)?;
    let findings = enforce::reconcile(&surefire, &gherkin, &settings.flags);

    let fail_build = settings.flags.fail_build;
    let verdict = findings.verdict(fail_build);

    match args.output {
        OutputFormat::Text => findings.log(fail_build),
        OutputFormat::Json => {
            let output = JsonOutput { passed: verdict != Verdict::Failed, findings: &findings };
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            serde_json::to_writer_pretty(&mut handle, &output)?;
            writeln!(handle)?;
        }
    }

    match verdict {
        Verdict::Failed => {
            tracing::error!("{}", enforce::FAILURE_MESSAGE);
            Ok(ExitCode::PolicyViolation)
        }
        Verdict::Clean | Verdict::Reported => Ok(ExitCode::Success),
    }
}
