//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for testing gherkin-audit CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Minimal valid config content.
pub const MINIMAL_CONFIG: &str = "version = 1\n";

/// Returns a Command configured to run the gherkin-audit binary.
///
/// Inherited configuration variables are cleared so specs only see what
/// they set explicitly.
pub fn audit_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gherkin-audit"));
    for var in [
        "GHERKIN_AUDIT_CONFIG",
        "GHERKIN_AUDIT_LOG",
        "GHERKIN_ENFORCER_STORY",
        "GHERKIN_ENFORCER_SCENARIO",
        "GHERKIN_ENFORCER_FAILBUILD",
        "GHERKIN_ENFORCER_SUREFIREDIR",
        "GHERKIN_ENFORCER_GHERKINDIR",
        "GHERKIN_REPORT_GHERKINDIR",
        "GHERKIN_REPORT_TARGETFILE",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Get path to a test fixture directory
pub fn fixture(name: &str) -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// A scratch project directory.
///
/// Contains an empty `.git` directory so config discovery stops here.
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// Project with no config file.
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    /// Project with a minimal config file.
    pub fn with_config() -> Self {
        let project = Self::empty();
        project.config(MINIMAL_CONFIG);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write gherkin-audit.toml.
    pub fn config(&self, content: &str) {
        self.file("gherkin-audit.toml", content);
    }

    /// Write a file, creating parent directories.
    pub fn file(&self, path: &str, content: &str) {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }

    /// Write a surefire report for `class` with the given test names.
    pub fn surefire(&self, class: &str, tests: &[&str]) {
        let cases: String = tests
            .iter()
            .map(|name| format!("  <testcase name=\"{name}\" classname=\"{class}\" time=\"0.001\"/>\n"))
            .collect();
        self.file(
            &format!("target/surefire-reports/TEST-{class}.xml"),
            &format!("<testsuite name=\"{class}\" tests=\"{}\">\n{cases}</testsuite>\n", tests.len()),
        );
    }

    /// Write a gherkin story for `class`; scenarios are (name, method name, failed).
    pub fn story(&self, name: &str, class: &str, scenarios: &[(&str, &str, bool)]) {
        let scenarios: String = scenarios
            .iter()
            .map(|(scenario, method, failed)| {
                format!(
                    "    <scenario>\n      <name>{scenario}</name>\n      <methodName>{method}</methodName>\n      \
<failed>{failed}</failed>\n      <steps>\n        <step>\n          <readable>Given {scenario}</readable>\n          \
<status>{}</status>\n        </step>\n      </steps>\n    </scenario>\n",
                    if *failed { "FAILED" } else { "PASSED" }
                )
            })
            .collect();
        self.file(
            &format!("target/gherkin/{class}.xml"),
            &format!(
                "<StoryStore>\n  <name>{name}</name>\n  <className>{class}</className>\n  <scenarios>\n{scenarios}  </scenarios>\n</StoryStore>\n"
            ),
        );
    }

    /// Read a file relative to the project root.
    pub fn read(&self, path: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(path)).unwrap()
    }
}
