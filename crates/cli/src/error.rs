// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.

use std::io;
use std::path::{Path, PathBuf};

/// Errors raised while reading reports, loading config, or writing output.
///
/// A policy violation (findings with `fail_build` set) is not an error; it is
/// carried by [`crate::enforce::Verdict::Failed`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A report file or directory could not be read.
    #[error("error reading file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A report file is not well-formed or does not match the expected shape.
    #[error("error reading file: {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: quick_xml::DeError,
    },

    /// The HTML report could not be saved.
    #[error("error while saving report to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The config file is unreadable or invalid.
    #[error("{}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl Error {
    /// Exit code the binary should use for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Error::Config { .. } => ExitCode::ConfigError,
            Error::Read { .. } | Error::Parse { .. } | Error::Write { .. } => {
                ExitCode::InternalError
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    /// Findings were reported and the build is configured to fail on them.
    PolicyViolation = 1,
    ConfigError = 2,
    /// Report read/parse failure or output write failure.
    InternalError = 3,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

/// Absolute form of `path` for error messages, falling back to the path as given.
pub(crate) fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
