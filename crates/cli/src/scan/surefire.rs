// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Surefire report scanning.
//!
//! Reads `TEST-*.xml` files and extracts one [`TestMethod`] per `<testcase>`.

use std::path::Path;

use serde::Deserialize;

use super::{parse_file, report_files};
use crate::error::Result;
use crate::model::TestMethod;

/// Root `<testsuite>` element of a surefire report.
#[derive(Debug, Deserialize)]
struct TestSuiteRecord {
    /// One or many `<testcase>` elements; both shapes land here as a list.
    #[serde(rename = "testcase", default)]
    testcases: Vec<TestCaseRecord>,
}

#[derive(Debug, Deserialize)]
struct TestCaseRecord {
    #[serde(rename = "@classname", alias = "classname")]
    class_name: String,
    #[serde(rename = "@name", alias = "name")]
    name: String,
}

/// Whether a file name looks like a surefire report.
pub fn is_report_file(name: &str) -> bool {
    name.starts_with("TEST-") && name.ends_with(".xml")
}

/// Strip a parameterization suffix such as `{0}` from a surefire test name.
pub fn bare_method_name(name: &str) -> &str {
    name.split('{').next().unwrap_or(name)
}

/// Scan a surefire report directory for executed test methods.
///
/// A missing directory yields an empty list.
pub fn scan(dir: &Path) -> Result<Vec<TestMethod>> {
    let mut methods = Vec::new();
    for path in report_files(dir, is_report_file)? {
        let suite: TestSuiteRecord = parse_file(&path)?;
        methods.extend(
            suite
                .testcases
                .into_iter()
                .map(|case| TestMethod::new(case.class_name, bare_method_name(&case.name))),
        );
    }
    tracing::debug!("found {} surefire test methods in {}", methods.len(), dir.display());
    Ok(methods)
}

#[cfg(test)]
#[path = "surefire_tests.rs"]
mod tests;
