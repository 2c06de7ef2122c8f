//! Error types for the page size scanner

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the page size scanner
#[derive(Error, Debug)]
pub enum Error {
    /// The directory to scan is missing or cannot be listed
    #[error("Cannot read directory {}: {source}", .path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file could not be decoded as a PDF
    #[error("Cannot decode {}: {reason}", .path.display())]
    Decode { path: PathBuf, reason: String },

    /// Page index outside 1..=count
    #[error("Page {index} out of range (document has {count} pages)")]
    PageOutOfRange { index: usize, count: usize },

    /// Malformed page geometry
    #[error("Invalid page {page}: {reason}")]
    InvalidPage { page: usize, reason: String },

    /// IO error while writing the report
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Wrap any error raised while reading `path` as a decode failure
    pub fn decode(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Error::Decode {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// True for failures that belong to a single file rather than the scan
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode { .. })
    }
}
