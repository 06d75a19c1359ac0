use std::path::PathBuf;

use polars::prelude::PolarsError;

/// Errors returned by `tidypolars` verbs, helpers and I/O wrappers.
#[derive(Debug, thiserror::Error)]
pub enum TidyError {
    /// A verb argument is not a column name, an expression, or a list of either.
    #[error("invalid argument kind: {message}")]
    InvalidArgumentKind { message: String },

    /// Two mutually exclusive options were both supplied.
    #[error("conflicting arguments '{first}' and '{second}': {message}")]
    ConflictingArgument {
        first: String,
        second: String,
        message: String,
    },

    /// Invalid reader/writer configuration option was provided.
    #[error("invalid configuration option '{option}': {message}")]
    Configuration { option: String, message: String },

    /// OS-level I/O error (optionally associated with a path).
    #[error("I/O error{path}: {source}", path = path_display(.path))]
    Io {
        source: std::io::Error,
        path: Option<PathBuf>,
    },

    /// Error raised by Polars, surfaced exactly as the engine reported it.
    #[error(transparent)]
    Engine(#[from] PolarsError),
}

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, TidyError>;

impl TidyError {
    /// Create an invalid argument kind error.
    pub fn invalid_argument_kind(message: impl Into<String>) -> Self {
        Self::InvalidArgumentKind {
            message: message.into(),
        }
    }

    /// Create a conflicting argument error naming both options.
    pub fn conflicting_argument(
        first: impl Into<String>,
        second: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::ConflictingArgument {
            first: first.into(),
            second: second.into(),
            message: message.into(),
        }
    }

    /// Create an invalid configuration error.
    pub fn configuration(option: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Configuration {
            option: option.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error associated with a path.
    pub fn io_with_path(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: Some(path.into()),
        }
    }
}

fn path_display(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" for path '{}'", p.display()))
        .unwrap_or_default()
}
