// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test identities and parsed gherkin story structures.

use std::fmt;

use serde::Serialize;

/// A test identified by its class and method name.
///
/// Ordering is lexicographic by class name, then method name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TestMethod {
    pub class_name: String,
    pub method_name: String,
}

impl TestMethod {
    pub fn new(class_name: impl Into<String>, method_name: impl Into<String>) -> Self {
        Self { class_name: class_name.into(), method_name: method_name.into() }
    }
}

impl fmt::Display for TestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.class_name, self.method_name)
    }
}

/// One story, as read from a gherkin report file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    /// Human-readable story name; equals `class_name` when no annotation was given.
    pub name: String,
    pub class_name: String,
    pub scenarios: Vec<Scenario>,
}

impl Story {
    /// True when the story name was left as the class name.
    pub fn is_missing_name(&self) -> bool {
        self.name == self.class_name
    }
}

/// One scenario within a story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    /// Human-readable scenario name; equals `method_name` when no annotation was given.
    pub name: String,
    pub method_name: String,
    pub failed: bool,
    pub steps: Vec<Step>,
}

impl Scenario {
    /// True when the scenario name was left as the method name.
    pub fn is_missing_name(&self) -> bool {
        self.name == self.method_name
    }
}

/// One executed step within a scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub readable: String,
    pub status: StepStatus,
}

/// Outcome of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepStatus {
    Passed,
    Failed,
    Skipped,
    Pending,
    Undefined,
    /// Any status value not listed above.
    Unknown,
}

impl StepStatus {
    /// Parse the on-disk status text, ignoring case and surrounding whitespace.
    pub fn parse(text: &str) -> Self {
        match text.trim().to_ascii_uppercase().as_str() {
            "PASSED" => StepStatus::Passed,
            "FAILED" => StepStatus::Failed,
            "SKIPPED" => StepStatus::Skipped,
            "PENDING" => StepStatus::Pending,
            "UNDEFINED" => StepStatus::Undefined,
            _ => StepStatus::Unknown,
        }
    }

    /// Upper-case label shown in reports.
    pub fn label(self) -> &'static str {
        match self {
            StepStatus::Passed => "PASSED",
            StepStatus::Failed => "FAILED",
            StepStatus::Skipped => "SKIPPED",
            StepStatus::Pending => "PENDING",
            StepStatus::Undefined => "UNDEFINED",
            StepStatus::Unknown => "UNKNOWN",
        }
    }

    /// Lower-case css class for the status label.
    pub fn css_class(self) -> &'static str {
        match self {
            StepStatus::Passed => "passed",
            StepStatus::Failed => "failed",
            StepStatus::Skipped => "skipped",
            StepStatus::Pending => "pending",
            StepStatus::Undefined => "undefined",
            StepStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
