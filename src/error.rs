//! Error types.
//!
//! Two families abort a run: configuration errors (invalid search or
//! acceptance parameters) and data errors (malformed instances, broken
//! matrices, empty demand). Feasibility problems during search are not
//! errors; they are absorbed into the objective.

use std::fmt;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// An error raised while configuring or loading a routing problem.
#[derive(Debug)]
pub enum Error {
    /// A search or acceptance parameter is out of range.
    Config {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Human-readable description.
        message: String,
    },
    /// The instance data is inconsistent.
    Data {
        /// Where the problem was found (row, matrix cell, entity).
        context: String,
        /// Human-readable description.
        message: String,
    },
    /// Reading an input file failed.
    Io(std::io::Error),
    /// The instance table could not be parsed.
    Csv(csv::Error),
    /// The matrix document could not be parsed.
    Json(serde_json::Error),
}

impl Error {
    pub(crate) fn config(parameter: &'static str, message: impl Into<String>) -> Self {
        Error::Config {
            parameter,
            message: message.into(),
        }
    }

    pub(crate) fn data(context: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Data {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Returns `true` for configuration errors.
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config { .. })
    }

    /// Returns `true` for data errors, including parse failures.
    pub fn is_data(&self) -> bool {
        matches!(self, Error::Data { .. } | Error::Csv(_) | Error::Json(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config { parameter, message } => {
                write!(f, "invalid configuration `{parameter}`: {message}")
            }
            Error::Data { context, message } => write!(f, "invalid data ({context}): {message}"),
            Error::Io(e) => write!(f, "i/o error: {e}"),
            Error::Csv(e) => write!(f, "malformed instance table: {e}"),
            Error::Json(e) => write!(f, "malformed matrix document: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Csv(e) => Some(e),
            Error::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Error::Csv(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}
