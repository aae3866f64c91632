// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Gherkin report scanning.
//!
//! Each `*.xml` file in the gherkin directory holds one story. Values may be
//! written as child elements or as attributes; repeated `<scenario>` and
//! `<step>` elements are read as lists whether one or many are present.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::Deserialize;

use super::{parse_file, report_files};
use crate::error::Result;
use crate::model::{Scenario, Step, StepStatus, Story, TestMethod};

#[derive(Debug, Deserialize)]
struct StoryRecord {
    #[serde(alias = "@name")]
    name: String,
    #[serde(rename = "className", alias = "@className")]
    class_name: String,
    #[serde(default)]
    scenarios: ScenariosRecord,
}

#[derive(Debug, Default, Deserialize)]
struct ScenariosRecord {
    #[serde(default)]
    scenario: Vec<ScenarioRecord>,
}

#[derive(Debug, Deserialize)]
struct ScenarioRecord {
    #[serde(alias = "@name")]
    name: String,
    #[serde(rename = "methodName", alias = "@methodName")]
    method_name: String,
    #[serde(default, alias = "@failed")]
    failed: bool,
    #[serde(default)]
    steps: StepsRecord,
}

#[derive(Debug, Default, Deserialize)]
struct StepsRecord {
    #[serde(default, alias = "steps")]
    step: Vec<StepRecord>,
}

#[derive(Debug, Deserialize)]
struct StepRecord {
    #[serde(default, alias = "@readable")]
    readable: String,
    #[serde(default, alias = "@status")]
    status: String,
}

impl From<StoryRecord> for Story {
    fn from(record: StoryRecord) -> Self {
        Story {
            name: record.name,
            class_name: record.class_name,
            scenarios: record.scenarios.scenario.into_iter().map(Scenario::from).collect(),
        }
    }
}

impl From<ScenarioRecord> for Scenario {
    fn from(record: ScenarioRecord) -> Self {
        Scenario {
            name: record.name,
            method_name: record.method_name,
            failed: record.failed,
            steps: record
                .steps
                .step
                .into_iter()
                .map(|step| Step { readable: step.readable, status: StepStatus::parse(&step.status) })
                .collect(),
        }
    }
}

/// Whether a file name looks like a gherkin story report.
pub fn is_report_file(name: &str) -> bool {
    name.ends_with(".xml")
}

/// Load every story in a gherkin report directory.
///
/// A missing directory yields no stories. Stories are returned in directory
/// listing order.
pub fn load_stories(dir: &Path) -> Result<Vec<Story>> {
    let mut stories = Vec::new();
    for path in report_files(dir, is_report_file)? {
        let record: StoryRecord = parse_file(&path)?;
        stories.push(Story::from(record));
    }
    tracing::debug!("found {} gherkin stories in {}", stories.len(), dir.display());
    Ok(stories)
}

/// Scan a gherkin report directory into an index of documented tests.
pub fn scan(dir: &Path) -> Result<GherkinIndex> {
    Ok(GherkinIndex::from_stories(&load_stories(dir)?))
}

/// Test identities and annotation gaps collected from gherkin stories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GherkinIndex {
    methods: Vec<TestMethod>,
    missing_stories: Vec<String>,
    missing_scenarios: Vec<TestMethod>,
}

impl GherkinIndex {
    pub fn from_stories(stories: &[Story]) -> Self {
        let mut index = GherkinIndex::default();
        for story in stories {
            if story.is_missing_name() {
                index.missing_stories.push(story.class_name.clone());
            }
            for scenario in &story.scenarios {
                let method = TestMethod::new(story.class_name.as_str(), scenario.method_name.as_str());
                if scenario.is_missing_name() {
                    index.missing_scenarios.push(method.clone());
                }
                index.methods.push(method);
            }
        }
        index
    }

    /// One identity per scenario, in story order.
    pub fn methods(&self) -> &[TestMethod] {
        &self.methods
    }

    /// Method names documented for each class.
    pub fn grouped(&self) -> BTreeMap<&str, BTreeSet<&str>> {
        let mut grouped: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        for method in &self.methods {
            grouped
                .entry(method.class_name.as_str())
                .or_default()
                .insert(method.method_name.as_str());
        }
        grouped
    }

    /// Class names of stories whose name was left as the class name.
    pub fn missing_stories(&self) -> &[String] {
        &self.missing_stories
    }

    /// Scenarios whose name was left as the method name.
    pub fn missing_scenarios(&self) -> &[TestMethod] {
        &self.missing_scenarios
    }
}

#[cfg(test)]
#[path = "gherkin_tests.rs"]
mod tests;
