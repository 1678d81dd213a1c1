//! Error types for graph parsing and serialization.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading or writing RDF documents.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The input could not be parsed in the declared format.
    #[error("Malformed {format} input: {message}")]
    MalformedInput {
        /// Name of the declared format.
        format: &'static str,
        /// Parser diagnostic.
        message: String,
    },

    /// The format name is unknown, or the format cannot be used in this direction.
    #[error("Unsupported RDF format: {0}")]
    UnsupportedFormat(String),

    /// An input file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// The input path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An output graph could not be written to its destination.
    #[error("Failed to write {}: {source}", path.display())]
    Serialization {
        /// The destination path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
