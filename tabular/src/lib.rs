//! Tabular input for csv2rdf.
//!
//! Loads delimited text into a [`Table`] and materializes it as a flat
//! instance graph: one subject per row, one property per column.
//!
//! # Entry Point
//!
//! ```
//! use csv2rdf_graph::{Iri, Namespace};
//! use csv2rdf_tabular::{load_csv, materialize, LoadOptions};
//!
//! let table = load_csv("name,occupation\nMatti,nakki\n".as_bytes(), &LoadOptions::default()).unwrap();
//! let ns = Namespace::new("http://example.com/");
//! let out = materialize(&table, &ns, &ns, &Iri::new("http://example.com/Person"));
//! assert_eq!(out.data.len(), 3);
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
pub mod loader;
pub mod materialize;

pub use error::{Result, TabularError};
pub use loader::{load_csv, load_csv_path, LoadOptions, Table};
pub use materialize::{column_property, materialize, row_subject, Materialized};
