//! Literal values to a controlled vocabulary.
//!
//! The `csv2rdf-vocab` crate scans a graph for one source property, splits
//! each literal value into terms, and mints one stable identifier per
//! distinct term. Terms whose slugs collide but whose values differ get
//! suffixed identifiers (`nakki`, `nakki_1`); repeated values share one.
//!
//! # Entry Point
//!
//! ```
//! use csv2rdf_graph::{Graph, Literal, Term, Triple};
//! use csv2rdf_vocab::{normalize, NormalizerConfig};
//!
//! let input: Graph = [
//!     Triple::new(Term::iri("http://example.com/r_0"), "http://example.com/occupation", Literal::plain("nakki")),
//!     Triple::new(Term::iri("http://example.com/r_1"), "http://example.com/occupation", Literal::plain("näkki")),
//! ]
//! .into_iter()
//! .collect();
//!
//! let config = NormalizerConfig::new(
//!     "http://example.com/vocab/",
//!     "http://example.com/occupation",
//!     "http://example.com/hasOccupation",
//!     "http://example.com/Occupation",
//! );
//! let out = normalize(&input, &config).unwrap();
//! assert_eq!(out.annotations.len(), 2);
//! assert_eq!(out.vocabulary.len(), 4);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod config;
pub mod error;
pub mod normalize;
pub mod registry;
pub mod report;
pub mod rewrite;

pub use config::{EmptySegments, NormalizerConfig, NormalizerOptions};
pub use error::{Result, VocabError};
pub use normalize::{normalize, normalize_with, split_terms, Normalization};
pub use registry::{IdentifierRegistry, Outcome, Resolution};
pub use report::{Diagnostic, NormalizationReport, Severity};
pub use rewrite::{
    Chain, Identity, NoteTemplate, Rewritten, TermRewrite, UncertaintyMarker, ValueOverrides,
};
