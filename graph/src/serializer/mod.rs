//! Serializers for triple graphs.
//!
//! Three serialization formats are supported:
//! - **Turtle** ([`turtle`]): prefixed, grouped by subject
//! - **N-Triples** ([`ntriples`]): one triple per line, absolute IRIs
//! - **JSON-LD** ([`jsonld`]): flattened `@graph` of node objects
//!
//! All serializers are deterministic: output follows the graph's triple order.

pub mod jsonld;
pub mod ntriples;
pub mod turtle;

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::error::{GraphError, Result};
use crate::format::RdfFormat;
use crate::model::Graph;

/// Serializes `graph` in `format`.
#[must_use]
pub fn serialize(graph: &Graph, format: RdfFormat) -> String {
    match format {
        RdfFormat::Turtle => turtle::to_turtle(graph),
        RdfFormat::NTriples => ntriples::to_ntriples(graph),
        RdfFormat::JsonLd => {
            let value = jsonld::to_json_ld(graph);
            // Serializing a `serde_json::Value` cannot fail.
            serde_json::to_string_pretty(&value).unwrap_or_default()
        }
    }
}

/// Writes `graph` to `path` in `format`.
///
/// The document is written to a temporary file next to `path` and renamed
/// over it, so a failed write never leaves a truncated document at `path`.
///
/// # Errors
///
/// Returns [`GraphError::Serialization`] if the temporary file cannot be
/// written or renamed.
pub fn write_graph(path: &Path, graph: &Graph, format: RdfFormat) -> Result<()> {
    let body = serialize(graph, format);
    let fail = |source: std::io::Error| GraphError::Serialization {
        path: path.to_path_buf(),
        source,
    };

    let file_name = path
        .file_name()
        .and_then(|s| s.to_str())
        .ok_or_else(|| {
            fail(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "destination has no file name",
            ))
        })?;
    let tmp_path = path.with_file_name(format!(".{file_name}.tmp.{}", std::process::id()));

    let written = fs::File::create(&tmp_path).and_then(|mut f| {
        f.write_all(body.as_bytes())?;
        f.sync_all()
    });
    if let Err(e) = written.and_then(|()| fs::rename(&tmp_path, path)) {
        let _ = fs::remove_file(&tmp_path);
        return Err(fail(e));
    }

    debug!(path = %path.display(), triples = graph.len(), %format, "wrote graph");
    Ok(())
}

/// Escapes a string for use inside a double-quoted N-Triples or Turtle literal.
pub(crate) fn escape_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}
