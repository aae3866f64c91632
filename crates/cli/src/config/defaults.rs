// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! All default values are documented here for easy reference.
//! Config structs delegate to these constants via their `default_*` methods.

/// Name of the config file searched for during discovery.
pub const CONFIG_FILE: &str = "gherkin-audit.toml";

/// Only supported config schema version.
pub const CONFIG_VERSION: u32 = 1;

/// Default report locations, relative to the project base directory.
pub mod paths {
    /// Surefire report directory (`target/surefire-reports`).
    pub const SUREFIRE_DIR: &str = "target/surefire-reports";

    /// Gherkin report directory (`target/gherkin`).
    pub const GHERKIN_DIR: &str = "target/gherkin";

    /// Report file name, placed in the gherkin directory unless configured.
    pub const REPORT_FILE: &str = "gherkin-report.html";
}

/// Default enforcement switches.
pub mod enforce {
    pub const STORY: bool = false;
    pub const SCENARIO: bool = false;
    pub const FAIL_BUILD: bool = true;
}

/// Contents written by `gherkin-audit init`.
pub const TEMPLATE: &str = r#"version = 1

[enforce]
# Report stories whose name was left as the class name.
story = false
# Report scenarios whose name was left as the method name.
scenario = false
# Fail with a non-zero exit code when anything is reported.
fail_build = true
surefire_dir = "target/surefire-reports"
gherkin_dir = "target/gherkin"

[report]
gherkin_dir = "target/gherkin"
# Defaults to <gherkin_dir>/gherkin-report.html
# target_file = "target/gherkin/gherkin-report.html"
"#;
