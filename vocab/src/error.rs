//! Error types for vocabulary normalization.

use std::path::PathBuf;

use csv2rdf_graph::Term;
use thiserror::Error;

/// Errors from configuring or running a normalization.
#[derive(Debug, Error)]
pub enum VocabError {
    /// A source-property object was not a literal and strict mode is on.
    #[error("Object of {subject} is not a literal: {object}")]
    NonLiteralObject {
        /// The subject carrying the offending value.
        subject: Term,
        /// The offending object.
        object: Term,
    },

    /// A configuration value is unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An options or mapping file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// The file path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An options or mapping file is not valid TOML for its schema.
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        /// The file path.
        path: PathBuf,
        /// The underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
}

/// Result type for vocabulary operations.
pub type Result<T> = std::result::Result<T, VocabError>;
