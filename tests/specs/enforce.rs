//! Behavioral specs for `gherkin-audit enforce`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// CLEAN RUNS
// =============================================================================

/// > Empty report directories produce no findings regardless of flags
#[test]
fn missing_report_directories_pass() {
    let temp = Project::with_config();

    audit_cmd()
        .args(["enforce", "--story", "--scenario", "--fail-build"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicates::str::contains("There are").not());
}

/// > Every surefire test documented by a scenario passes silently
#[test]
fn fully_audited_project_passes() {
    audit_cmd()
        .args(["enforce", "--story", "--scenario"])
        .current_dir(fixture("audited-project"))
        .assert()
        .success()
        .stderr(predicates::str::contains("There are").not());
}

// =============================================================================
// NON-AUDITABLE TESTS
// =============================================================================

/// > An undocumented test fails the build and is listed under its heading
#[test]
fn undocumented_test_fails_build() {
    let temp = Project::with_config();
    temp.surefire("Foo", &["bar"]);

    audit_cmd()
        .arg("enforce")
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicates::str::contains("There are non-auditable tests:"))
        .stderr(predicates::str::contains(" - Foo.bar"))
        .stderr(predicates::str::contains("ERROR"));
}

/// > With fail_build disabled, findings are informational
#[test]
fn undocumented_test_reported_without_failing() {
    let temp = Project::with_config();
    temp.surefire("Foo", &["bar"]);

    audit_cmd()
        .args(["enforce", "--fail-build=false"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicates::str::contains(" - Foo.bar"))
        .stderr(predicates::str::contains("INFO"))
        .stderr(predicates::str::contains("ERROR").not());
}

/// > Parameterized surefire names match the bare gherkin method name
#[test]
fn parameterized_test_matches_scenario() {
    let temp = Project::with_config();
    temp.surefire("Foo", &["testX{0}", "testX{1}"]);
    temp.story("Foo story", "Foo", &[("Doing X", "testX", false)]);

    audit_cmd().arg("enforce").current_dir(temp.path()).assert().success();
}

/// > Findings are sorted by class then method
#[test]
fn findings_are_sorted() {
    let temp = Project::with_config();
    temp.surefire("b.Second", &["one"]);
    temp.surefire("a.First", &["zeta", "alpha"]);

    let output = audit_cmd()
        .args(["enforce", "--fail-build=false"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);

    let alpha = stderr.find(" - a.First.alpha").unwrap();
    let zeta = stderr.find(" - a.First.zeta").unwrap();
    let second = stderr.find(" - b.Second.one").unwrap();
    assert!(alpha < zeta && zeta < second, "unsorted findings:\n{stderr}");
}

// =============================================================================
// ANNOTATION CHECKS
// =============================================================================

/// > A story named after its class is reported only with --story
#[test]
fn missing_story_annotation_requires_flag() {
    let temp = Project::with_config();
    temp.story("Foo", "Foo", &[("Named scenario", "bar", false)]);

    audit_cmd()
        .arg("enforce")
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicates::str::contains("missing story annotations").not());

    audit_cmd()
        .args(["enforce", "--story"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicates::str::contains("There are missing story annotations:"))
        .stderr(predicates::str::contains(" - Foo"));
}

/// > A scenario named after its method is reported only with --scenario
#[test]
fn missing_scenario_annotation_requires_flag() {
    let temp = Project::with_config();
    temp.story("Foo story", "Foo", &[("bar", "bar", false)]);

    audit_cmd()
        .arg("enforce")
        .current_dir(temp.path())
        .assert()
        .success();

    audit_cmd()
        .args(["enforce", "--scenario"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicates::str::contains("There are missing scenario annotations:"))
        .stderr(predicates::str::contains(" - Foo.bar"));
}

/// > Annotation switches can come from the config file
#[test]
fn annotation_checks_enabled_by_config() {
    let temp = Project::empty();
    temp.config("version = 1\n\n[enforce]\nstory = true\n");
    temp.story("Foo", "Foo", &[("Named scenario", "bar", false)]);

    audit_cmd()
        .arg("enforce")
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicates::str::contains(" - Foo"));
}

/// > Environment variables override the config file
#[test]
fn environment_overrides_config() {
    let temp = Project::empty();
    temp.config("version = 1\n\n[enforce]\nstory = true\n");
    temp.story("Foo", "Foo", &[("Named scenario", "bar", false)]);

    audit_cmd()
        .arg("enforce")
        .env("GHERKIN_ENFORCER_FAILBUILD", "false")
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicates::str::contains("There are missing story annotations:"));
}

/// > All categories are logged before the run fails
#[test]
fn all_categories_logged_on_fixture() {
    audit_cmd()
        .args(["enforce", "--story", "--scenario"])
        .current_dir(fixture("login-project"))
        .assert()
        .code(1)
        .stderr(predicates::str::contains(" - com.acme.CartTest.testRemove"))
        .stderr(predicates::str::contains("There are missing story annotations:"))
        .stderr(predicates::str::contains(" - com.acme.CartTest\n"))
        .stderr(predicates::str::contains("There are missing scenario annotations:"))
        .stderr(predicates::str::contains(" - com.acme.LoginTest.testLogout"))
        .stderr(predicates::str::contains("com.acme.LoginTest.testLogin").not());
}

/// > --base-dir points at another project
#[test]
fn base_dir_selects_project() {
    let temp = Project::with_config();

    audit_cmd()
        .args(["enforce", "--base-dir"])
        .arg(fixture("login-project"))
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicates::str::contains(" - com.acme.CartTest.testRemove"));
}

// =============================================================================
// OUTPUT FORMATS
// =============================================================================

/// > JSON output lists findings and the pass/fail state
#[test]
fn json_output() {
    let temp = Project::with_config();
    temp.surefire("Foo", &["bar"]);

    let output = audit_cmd()
        .args(["enforce", "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["passed"], false);
    assert_eq!(json["non_auditable"][0]["class_name"], "Foo");
    assert_eq!(json["non_auditable"][0]["method_name"], "bar");
    assert_eq!(json["missing_stories"].as_array().unwrap().len(), 0);
}

// =============================================================================
// ERRORS
// =============================================================================

/// > A malformed surefire report aborts with the file path
#[test]
fn malformed_surefire_report_is_fatal() {
    let temp = Project::with_config();
    temp.file("target/surefire-reports/TEST-Broken.xml", "<testsuite><testcase name=");

    audit_cmd()
        .arg("enforce")
        .current_dir(temp.path())
        .assert()
        .code(3)
        .stderr(predicates::str::contains("error reading file"))
        .stderr(predicates::str::contains("TEST-Broken.xml"));
}

/// > A malformed gherkin report aborts with the file path
#[test]
fn malformed_gherkin_report_is_fatal() {
    let temp = Project::with_config();
    temp.file("target/gherkin/Broken.xml", "<StoryStore><name>Broken</name>");

    audit_cmd()
        .args(["enforce", "--fail-build=false"])
        .current_dir(temp.path())
        .assert()
        .code(3)
        .stderr(predicates::str::contains("Broken.xml"));
}
