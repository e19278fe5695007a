//! Error handling for the HiPack command-line tools.

use std::path::PathBuf;

use thiserror::Error;

/// Errors the CLI tools can report. Parse failures keep the full
/// `(message, line, column)` triple the core library reports rather than
/// flattening it into a string, so each binary's `main` can render it the
/// same way.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: hipack_util::ParseError,
    },

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{path}: key path {key_path:?} not found")]
    KeyNotFound { path: PathBuf, key_path: Vec<String> },

    #[error("{path}: round-trip mismatch, re-parsed value differs from the original")]
    RoundTripMismatch { path: PathBuf },

    #[error("writing output failed")]
    Write,
}

pub type Result<T> = std::result::Result<T, CliError>;
