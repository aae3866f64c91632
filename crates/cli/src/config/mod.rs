// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading and resolution.
//!
//! Values resolve in order: built-in defaults, the config file, then
//! command-line overrides. Relative paths resolve against the project base
//! directory.

pub mod defaults;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::enforce::EnforceFlags;
use crate::error::{Error, Result};

/// Top-level config file schema.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config schema version; must be 1.
    pub version: u32,

    #[serde(default)]
    pub enforce: EnforceConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: defaults::CONFIG_VERSION,
            enforce: EnforceConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

/// `[enforce]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnforceConfig {
    pub story: bool,
    pub scenario: bool,
    pub fail_build: bool,
    pub surefire_dir: PathBuf,
    pub gherkin_dir: PathBuf,
}

impl Default for EnforceConfig {
    fn default() -> Self {
        Self {
            story: defaults::enforce::STORY,
            scenario: defaults::enforce::SCENARIO,
            fail_build: defaults::enforce::FAIL_BUILD,
            surefire_dir: PathBuf::from(defaults::paths::SUREFIRE_DIR),
            gherkin_dir: PathBuf::from(defaults::paths::GHERKIN_DIR),
        }
    }
}

/// `[report]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub gherkin_dir: PathBuf,
    /// Output file; `<gherkin_dir>/gherkin-report.html` when unset.
    pub target_file: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { gherkin_dir: PathBuf::from(defaults::paths::GHERKIN_DIR), target_file: None }
    }
}

/// Command-line overrides for the `[enforce]` section.
#[derive(Debug, Clone, Default)]
pub struct EnforceOverrides {
    pub story: Option<bool>,
    pub scenario: Option<bool>,
    pub fail_build: Option<bool>,
    pub surefire_dir: Option<PathBuf>,
    pub gherkin_dir: Option<PathBuf>,
}

/// Command-line overrides for the `[report]` section.
#[derive(Debug, Clone, Default)]
pub struct ReportOverrides {
    pub gherkin_dir: Option<PathBuf>,
    pub target_file: Option<PathBuf>,
}

/// Fully resolved settings for an enforcement run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnforceSettings {
    pub flags: EnforceFlags,
    pub surefire_dir: PathBuf,
    pub gherkin_dir: PathBuf,
}

/// Fully resolved settings for a report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    pub gherkin_dir: PathBuf,
    pub target_file: PathBuf,
}

impl EnforceConfig {
    pub fn resolve(&self, base: &Path, overrides: &EnforceOverrides) -> EnforceSettings {
        EnforceSettings {
            flags: EnforceFlags {
                enforce_story: overrides.story.unwrap_or(self.story),
                enforce_scenario: overrides.scenario.unwrap_or(self.scenario),
                fail_build: overrides.fail_build.unwrap_or(self.fail_build),
            },
            surefire_dir: base.join(overrides.surefire_dir.as_ref().unwrap_or(&self.surefire_dir)),
            gherkin_dir: base.join(overrides.gherkin_dir.as_ref().unwrap_or(&self.gherkin_dir)),
        }
    }
}

impl ReportConfig {
    pub fn resolve(&self, base: &Path, overrides: &ReportOverrides) -> ReportSettings {
        let gherkin_dir = base.join(overrides.gherkin_dir.as_ref().unwrap_or(&self.gherkin_dir));
        let target_file = match overrides.target_file.as_ref().or(self.target_file.as_ref()) {
            Some(path) => base.join(path),
            None => gherkin_dir.join(defaults::paths::REPORT_FILE),
        };
        ReportSettings { gherkin_dir, target_file }
    }
}

/// Parse config content; `path` is only used for error messages.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config: Config = toml::from_str(content)
        .map_err(|e| Error::Config { path: path.to_path_buf(), message: e.message().to_string() })?;

    if config.version != defaults::CONFIG_VERSION {
        return Err(Error::Config {
            path: path.to_path_buf(),
            message: format!(
                "unsupported config version {} (expected {})",
                config.version,
                defaults::CONFIG_VERSION
            ),
        });
    }
    Ok(config)
}

/// Load and parse a config file.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config { path: path.to_path_buf(), message: e.to_string() })?;
    parse(&content, path)
}

/// Load the config for a project.
///
/// Uses `explicit` when given, otherwise the file found by walking up from
/// `base`, otherwise built-in defaults.
pub fn load_project(base: &Path, explicit: Option<&Path>) -> Result<Config> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match crate::discovery::find_config(base) {
            Some(path) => path,
            None => {
                tracing::debug!("no {} found, using defaults", defaults::CONFIG_FILE);
                return Ok(Config::default());
            }
        },
    };
    tracing::debug!("loading config from {}", path.display());
    load(&path)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
