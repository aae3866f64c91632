// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Audits unit-test execution reports against gherkin scenario reports.
//!
//! The library exposes the scanning, reconciliation and rendering steps as
//! plain functions; the `gherkin-audit` binary wires them to the command line.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod enforce;
pub mod error;
pub mod model;
pub mod report;
pub mod scan;


pub use error::{Error, ExitCode, Result};
