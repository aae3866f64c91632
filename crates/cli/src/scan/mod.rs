// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report directory scanning.
//!
//! Both scanners share the same contract: a missing directory yields no
//! records, and any unreadable or malformed file aborts the scan with an
//! error naming the file's absolute path.

pub mod gherkin;
pub mod surefire;

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::{Error, Result, absolute};

/// List report files in `dir` whose file name satisfies `accept`.
///
/// Returns an empty list when `dir` does not exist. Files are returned in
/// directory listing order.
pub(crate) fn report_files(dir: &Path, accept: impl Fn(&str) -> bool) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        tracing::debug!("report directory {} does not exist", dir.display());
        return Ok(Vec::new());
    }

    let read_err = |source| Error::Read { path: absolute(dir), source };
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let path = entry.path();
        let accepted = path.file_name().and_then(|n| n.to_str()).is_some_and(|n| accept(n));
        if accepted && path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}

/// Read and deserialize one XML report file.
pub(crate) fn parse_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    tracing::debug!("reading {}", path.display());
    let content =
        fs::read_to_string(path).map_err(|source| Error::Read { path: absolute(path), source })?;
    quick_xml::de::from_str(&content).map_err(|source| Error::Parse { path: absolute(path), source })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
