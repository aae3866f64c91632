// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reconciliation of surefire tests against gherkin scenarios.
//!
//! A surefire test is non-auditable when no gherkin scenario documents it.
//! Optionally, stories and scenarios that were never given a human-readable
//! name are reported as missing annotations.

use serde::Serialize;

use crate::model::TestMethod;
use crate::scan::gherkin::GherkinIndex;

pub const NON_AUDITABLE_HEADING: &str = "There are non-auditable tests:";
pub const MISSING_STORY_HEADING: &str = "There are missing story annotations:";
pub const MISSING_SCENARIO_HEADING: &str = "There are missing scenario annotations:";

/// Final message when findings fail the run.
pub const FAILURE_MESSAGE: &str = "There are non-auditable tests";

/// Prefix for each finding line.
const ITEM_PREFIX: &str = " - ";

/// Switches controlling which findings are collected and whether they fail the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnforceFlags {
    pub enforce_story: bool,
    pub enforce_scenario: bool,
    pub fail_build: bool,
}

impl Default for EnforceFlags {
    fn default() -> Self {
        Self { enforce_story: false, enforce_scenario: false, fail_build: true }
    }
}

/// Findings of one enforcement run, each list sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Findings {
    pub non_auditable: Vec<TestMethod>,
    pub missing_stories: Vec<String>,
    pub missing_scenarios: Vec<TestMethod>,
}

/// Outcome of an enforcement run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Nothing to report.
    Clean,
    /// Findings exist but the build is not configured to fail on them.
    Reported,
    /// Findings exist and the build must fail.
    Failed,
}

/// Compare surefire tests with documented gherkin scenarios.
pub fn reconcile(surefire: &[TestMethod], gherkin: &GherkinIndex, flags: &EnforceFlags) -> Findings {
    let grouped = gherkin.grouped();

    let mut non_auditable: Vec<TestMethod> = surefire
        .iter()
        .filter(|method| {
            !grouped
                .get(method.class_name.as_str())
                .is_some_and(|methods| methods.contains(method.method_name.as_str()))
        })
        .cloned()
        .collect();
    non_auditable.sort();

    let mut missing_stories =
        if flags.enforce_story { gherkin.missing_stories().to_vec() } else { Vec::new() };
    missing_stories.sort();

    let mut missing_scenarios =
        if flags.enforce_scenario { gherkin.missing_scenarios().to_vec() } else { Vec::new() };
    missing_scenarios.sort();

    Findings { non_auditable, missing_stories, missing_scenarios }
}

impl Findings {
    pub fn is_empty(&self) -> bool {
        self.non_auditable.is_empty()
            && self.missing_stories.is_empty()
            && self.missing_scenarios.is_empty()
    }

    pub fn verdict(&self, fail_build: bool) -> Verdict {
        match (self.is_empty(), fail_build) {
            (true, _) => Verdict::Clean,
            (false, true) => Verdict::Failed,
            (false, false) => Verdict::Reported,
        }
    }

    /// Log lines for every non-empty category.
    ///
    /// Each category starts with a blank line and its heading, followed by
    /// one `" - "` prefixed line per finding.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        push_section(&mut lines, NON_AUDITABLE_HEADING, &self.non_auditable);
        push_section(&mut lines, MISSING_STORY_HEADING, &self.missing_stories);
        push_section(&mut lines, MISSING_SCENARIO_HEADING, &self.missing_scenarios);
        lines
    }

    /// Emit the findings through `tracing`, at error severity when the build fails.
    pub fn log(&self, fail_build: bool) {
        for line in self.lines() {
            if fail_build {
                tracing::error!("{line}");
            } else {
                tracing::info!("{line}");
            }
        }
    }
}

fn push_section<T: std::fmt::Display>(lines: &mut Vec<String>, heading: &str, items: &[T]) {
    if items.is_empty() {
        return;
    }
    lines.push(String::new());
    lines.push(heading.to_string());
    lines.extend(items.iter().map(|item| format!("{ITEM_PREFIX}{item}")));
}

#[cfg(test)]
#[path = "enforce_tests.rs"]
mod tests;
