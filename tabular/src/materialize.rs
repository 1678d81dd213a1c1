//! Row/column to triple materialization.
//!
//! Each row becomes one instance of the configured class, each column one
//! `rdf:Property`, and each non-empty cell one literal statement.

use csv2rdf_graph::slug::slugify;
use csv2rdf_graph::{iris, Graph, Iri, Literal, Namespace, Term, Triple};
use tracing::debug;

use crate::loader::Table;

/// Instance data and property schema produced from one table.
#[derive(Debug, Default, Clone)]
pub struct Materialized {
    /// Row instances and their literal values.
    pub data: Graph,
    /// One `rdf:Property` declaration per column.
    pub schema: Graph,
}

/// Returns the subject IRI of row `index`.
#[must_use]
pub fn row_subject(data_ns: &Namespace, index: usize) -> Iri {
    data_ns.term(&format!("r_{index}"))
}

/// Returns the property IRI of a column.
#[must_use]
pub fn column_property(schema_ns: &Namespace, column: &str) -> Iri {
    schema_ns.term(&slugify(column))
}

/// Converts `table` into instance data and schema graphs.
pub fn materialize(
    table: &Table,
    data_ns: &Namespace,
    schema_ns: &Namespace,
    instance_class: &Iri,
) -> Materialized {
    let rdf_type = Iri::new(iris::RDF_TYPE);
    let rdf_property = Term::iri(iris::RDF_PROPERTY);
    let class = Term::Iri(instance_class.clone());

    let properties: Vec<Iri> = table
        .headers
        .iter()
        .map(|h| column_property(schema_ns, h))
        .collect();

    let mut out = Materialized::default();
    for property in &properties {
        out.schema.add(Triple::new(
            property.clone(),
            rdf_type.clone(),
            rdf_property.clone(),
        ));
    }

    for (index, row) in table.rows.iter().enumerate() {
        let subject = Term::Iri(row_subject(data_ns, index));
        out.data
            .add(Triple::new(subject.clone(), rdf_type.clone(), class.clone()));
        for (property, value) in properties.iter().zip(row) {
            if !value.is_empty() {
                out.data.add(Triple::new(
                    subject.clone(),
                    property.clone(),
                    Literal::plain(value.as_str()),
                ));
            }
        }
    }

    debug!(
        data = out.data.len(),
        schema = out.schema.len(),
        "materialized table"
    );
    out
}
