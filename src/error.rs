use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading employee data or creating reports.
#[derive(Error, Debug)]
pub enum Error {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Error reading file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid data in {} at line {line}: {message}", path.display())]
    Value {
        path: PathBuf,
        line: u64,
        message: String,
    },

    #[error("Unknown report type: {name}. Available reports: {available:?}")]
    UnknownReport {
        name: String,
        available: Vec<String>,
    },
}

/// Broad categories of [`Error`], for callers that report failures to users.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// An input file doesn't exist.
    NotFound,
    /// Bad data in a row, or an unknown report type.
    Value,
    /// Anything else, such as a file that exists but can't be read.
    Other,
}

impl Error {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Value { .. } | Self::UnknownReport { .. } => ErrorKind::Value,
            Self::Read { .. } => ErrorKind::Other,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
