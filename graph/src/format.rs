//! RDF document formats.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::GraphError;

/// Serialization formats understood by the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdfFormat {
    /// Turtle 1.1 (read and write).
    Turtle,
    /// N-Triples (read and write).
    NTriples,
    /// JSON-LD 1.1 (write only).
    JsonLd,
}

impl RdfFormat {
    /// Canonical short name, as accepted by `--format`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            RdfFormat::Turtle => "turtle",
            RdfFormat::NTriples => "nt",
            RdfFormat::JsonLd => "json-ld",
        }
    }

    /// Guesses the format from a file extension. Returns `None` for unknown
    /// or missing extensions.
    #[must_use]
    pub fn guess(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "ttl" | "turtle" => Some(RdfFormat::Turtle),
            "nt" => Some(RdfFormat::NTriples),
            "jsonld" | "json" => Some(RdfFormat::JsonLd),
            _ => None,
        }
    }

    /// Returns true if documents in this format can be parsed.
    #[must_use]
    pub fn is_readable(self) -> bool {
        !matches!(self, RdfFormat::JsonLd)
    }
}

impl fmt::Display for RdfFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RdfFormat {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "turtle" | "ttl" => Ok(RdfFormat::Turtle),
            "nt" | "ntriples" | "n-triples" => Ok(RdfFormat::NTriples),
            "json-ld" | "jsonld" => Ok(RdfFormat::JsonLd),
            other => Err(GraphError::UnsupportedFormat(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aliases() {
        assert_eq!("TTL".parse::<RdfFormat>().ok(), Some(RdfFormat::Turtle));
        assert_eq!("n-triples".parse::<RdfFormat>().ok(), Some(RdfFormat::NTriples));
        assert_eq!("jsonld".parse::<RdfFormat>().ok(), Some(RdfFormat::JsonLd));
        assert!("xml".parse::<RdfFormat>().is_err());
    }

    #[test]
    fn guesses_from_extension() {
        assert_eq!(RdfFormat::guess(Path::new("out/data.ttl")), Some(RdfFormat::Turtle));
        assert_eq!(RdfFormat::guess(Path::new("data.NT")), Some(RdfFormat::NTriples));
        assert_eq!(RdfFormat::guess(Path::new("data")), None);
    }

    #[test]
    fn json_ld_is_write_only() {
        assert!(RdfFormat::Turtle.is_readable());
        assert!(RdfFormat::NTriples.is_readable());
        assert!(!RdfFormat::JsonLd.is_readable());
    }
}
