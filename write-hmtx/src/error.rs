//! Errors that occur during writing

use crate::validate::ValidationReport;

/// An error occured while writing a table
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// The table failed pre-write validation.
    ValidationFailed(ValidationReport),
    /// The sink rejected a write.
    ///
    /// Some bytes may already have been written; the output should be
    /// discarded.
    WriteFailed(std::io::Error),
}

impl From<ValidationReport> for Error {
    fn from(report: ValidationReport) -> Self {
        Error::ValidationFailed(report)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ValidationFailed(report) => std::fmt::Display::fmt(report, f),
            Error::WriteFailed(error) => write!(f, "Failed to write table data: {error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ValidationFailed(_) => None,
            Error::WriteFailed(error) => Some(error),
        }
    }
}
