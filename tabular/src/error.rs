//! Error types for tabular loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading CSV input.
#[derive(Debug, Error)]
pub enum TabularError {
    /// The CSV reader rejected the input.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The input file could not be opened.
    #[error("Failed to open {}: {source}", path.display())]
    Open {
        /// The input path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A delimiter or quote character is not a single byte.
    #[error("Invalid {what}: {value:?} is not a single ASCII character")]
    InvalidDialect {
        /// Which option was invalid.
        what: &'static str,
        /// The rejected value.
        value: String,
    },
}

/// Result type for tabular operations.
pub type Result<T> = std::result::Result<T, TabularError>;
