//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatLensError`] enum covering all error
//! cases in the library.
//!
//! Note that an *unrecognized export format* is deliberately not an error:
//! the parser returns an empty record sequence instead, and every aggregate
//! query returns zero/empty results over it. Errors here are reserved for
//! I/O failures and missing configuration resources.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::MessageRecord;
///
/// fn my_function() -> Result<Vec<MessageRecord>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatLensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatLensError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input export file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing a report)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A required static resource could not be loaded.
    ///
    /// The stop-word list and the emoji table are configuration supplied by
    /// the caller at startup. Failing to load either is a configuration
    /// error and is raised before any record is parsed, never per record.
    #[error("failed to load {name} from {}: {source}", path.display())]
    Resource {
        /// Which resource failed (e.g. "stop-word list", "emoji table")
        name: &'static str,
        /// The path that was attempted
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// CSV writing error.
    ///
    /// Can occur when serializing the summary report.
    #[cfg(feature = "csv-report")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ChatLensError {
    /// Creates a [`ChatLensError::Resource`] error.
    pub fn resource(name: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        ChatLensError::Resource {
            name,
            path: path.into(),
            source,
        }
    }
}
