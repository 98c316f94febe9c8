//! Error handling for the propconv binary.

use std::{io, result};

use thiserror::Error;

/// Convenient result type for command execution.
pub type Result<T> = result::Result<T, Error>;

/// Errors that end a command.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrapper for standard I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Input text is not valid JSON.
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),
    /// No converter is registered under the requested name.
    #[error("unknown type '{0}' (run `propconv types` for the list)")]
    UnknownType(String),
    /// `apply` input must be a JSON object.
    #[error("expected a JSON object of property paths, found {0}")]
    NotAnObject(&'static str),
    /// Some paths were not assigned under `--strict`.
    #[error("{0} of the given properties were not assigned")]
    Rejected(usize),
}
