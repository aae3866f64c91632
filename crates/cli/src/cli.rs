//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{EnforceOverrides, ReportOverrides};

/// Audits unit-test reports against gherkin scenario reports
#[derive(Parser)]
#[command(name = "gherkin-audit")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "GHERKIN_AUDIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Project base directory (default: current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Project base directory: `--base-dir` resolved against the current directory.
    pub fn project_root(&self) -> std::io::Result<PathBuf> {
        let cwd = std::env::current_dir()?;
        Ok(match &self.base_dir {
            Some(dir) => cwd.join(dir),
            None => cwd,
        })
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Report unit tests without a documenting gherkin scenario
    Enforce(EnforceArgs),
    /// Render the gherkin HTML report
    Report(ReportArgs),
    /// Write a default gherkin-audit.toml
    Init(InitArgs),
}

#[derive(clap::Args)]
pub struct EnforceArgs {
    /// Report stories whose name was left as the class name
    #[arg(
        long,
        env = "GHERKIN_ENFORCER_STORY",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub story: Option<bool>,

    /// Report scenarios whose name was left as the method name
    #[arg(
        long,
        env = "GHERKIN_ENFORCER_SCENARIO",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub scenario: Option<bool>,

    /// Exit with a failure when anything is reported
    #[arg(
        long,
        env = "GHERKIN_ENFORCER_FAILBUILD",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub fail_build: Option<bool>,

    /// Directory holding surefire TEST-*.xml reports
    #[arg(long, env = "GHERKIN_ENFORCER_SUREFIREDIR", value_name = "DIR")]
    pub surefire_dir: Option<PathBuf>,

    /// Directory holding gherkin story reports
    #[arg(long, env = "GHERKIN_ENFORCER_GHERKINDIR", value_name = "DIR")]
    pub gherkin_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

impl EnforceArgs {
    pub fn overrides(&self) -> EnforceOverrides {
        EnforceOverrides {
            story: self.story,
            scenario: self.scenario,
            fail_build: self.fail_build,
            surefire_dir: self.surefire_dir.clone(),
            gherkin_dir: self.gherkin_dir.clone(),
        }
    }
}

#[derive(clap::Args)]
pub struct ReportArgs {
    /// Directory holding gherkin story reports
    #[arg(long, env = "GHERKIN_REPORT_GHERKINDIR", value_name = "DIR")]
    pub gherkin_dir: Option<PathBuf>,

    /// HTML file to write
    #[arg(long, env = "GHERKIN_REPORT_TARGETFILE", value_name = "FILE")]
    pub target_file: Option<PathBuf>,
}

impl ReportArgs {
    pub fn overrides(&self) -> ReportOverrides {
        ReportOverrides { gherkin_dir: self.gherkin_dir.clone(), target_file: self.target_file.clone() }
    }
}

#[derive(clap::Args)]
pub struct InitArgs {
    /// Overwrite existing config
    #[arg(long)]
    pub force: bool,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
