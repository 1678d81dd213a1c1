//! N-Triples serializer.
//!
//! Produces a valid N-Triples document (one triple per line, absolute IRIs).
//! N-Triples is suitable for streaming, bulk loading, and diff-friendly storage.

use crate::model::{Graph, Term};

use super::escape_literal;

/// Serializes `graph` to an N-Triples string.
#[must_use]
pub fn to_ntriples(graph: &Graph) -> String {
    let mut out = String::with_capacity(graph.len() * 96);

    for t in graph {
        out.push_str(&term(&t.subject));
        out.push_str(" <");
        out.push_str(t.predicate.as_str());
        out.push_str("> ");
        out.push_str(&term(&t.object));
        out.push_str(" .\n");
    }

    out
}

/// Renders a single term in N-Triples syntax.
#[must_use]
pub fn term(term: &Term) -> String {
    match term {
        Term::Iri(iri) => format!("<{}>", iri),
        Term::BlankNode(label) => format!("_:{}", label),
        Term::Literal(lit) => {
            let mut s = format!("\"{}\"", escape_literal(&lit.lexical));
            if let Some(lang) = &lit.language {
                s.push('@');
                s.push_str(lang);
            } else if let Some(dt) = &lit.datatype {
                s.push_str(&format!("^^<{}>", dt));
            }
            s
        }
    }
}
