//! Triple graphs for csv2rdf.
//!
//! The `csv2rdf-graph` crate provides the in-memory triple model shared by
//! the workspace, a slug function for minting IRIs from free text, Turtle and
//! N-Triples parsing, and Turtle, N-Triples, and JSON-LD serializers.
//!
//! # Entry Point
//!
//! ```
//! use csv2rdf_graph::{Graph, Literal, Term, Triple, RdfFormat};
//!
//! let mut graph = Graph::new();
//! graph.add(Triple::new(
//!     Term::iri("http://example.com/r_0"),
//!     "http://example.com/occupation",
//!     Literal::plain("nakki"),
//! ));
//! let nt = csv2rdf_graph::serializer::serialize(&graph, RdfFormat::NTriples);
//! let back = csv2rdf_graph::parser::parse_str(&nt, RdfFormat::NTriples).unwrap();
//! assert_eq!(graph, back);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod error;
pub mod format;
pub mod model;
pub mod parser;
pub mod serializer;
pub mod slug;

pub use error::{GraphError, Result};
pub use format::RdfFormat;
pub use model::{iris, Graph, Iri, Literal, Namespace, Term, Triple};
