//! Error types
//!
//! Physics never fails; only I/O at the edges does.

use std::path::PathBuf;

use thiserror::Error;

/// Failure loading or validating a settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Failure writing or reading the results file
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("results file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed results row at line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

/// Failure talking to the terminal or reading input
#[derive(Debug, Error)]
pub enum FrontendError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
