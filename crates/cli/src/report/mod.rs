// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Gherkin HTML report.
//!
//! Renders parsed stories into a static HTML page and saves it to disk.

mod html;

use std::fs;
use std::path::Path;

use crate::error::{Error, Result, absolute};
use crate::model::Story;

pub use html::escape;

/// Render stories into a complete HTML document.
///
/// Output depends only on `stories`, so unchanged input renders byte-identical
/// output.
pub fn render(stories: &[Story]) -> String {
    html::render(stories)
}

/// Render stories and write the document to `target`.
///
/// Creates the parent directory when missing. Failures carry the target path.
pub fn write_report(target: &Path, stories: &[Story]) -> Result<()> {
    let write_err = |source| Error::Write { path: absolute(target), source };

    if let Some(parent) = target.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut document = render(stories);
    document.push('\n');
    fs::write(target, document).map_err(write_err)?;
    tracing::debug!("wrote {} stories to {}", stories.len(), target.display());
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
