//! Turtle 1.1 serializer.
//!
//! Produces a valid Turtle document: prefix declarations followed by one
//! block per subject, predicates separated by `;` and objects by `,`.

use crate::model::{iris, Graph, Iri, Term};

use super::{escape_literal, ntriples};

/// Serializes `graph` to a Turtle string using the well-known prefixes.
#[must_use]
pub fn to_turtle(graph: &Graph) -> String {
    to_turtle_with_prefixes(graph, &[])
}

/// Serializes `graph` to a Turtle string, abbreviating IRIs with the
/// well-known prefixes plus `extra` `(prefix, namespace)` pairs.
#[must_use]
pub fn to_turtle_with_prefixes(graph: &Graph, extra: &[(&str, &str)]) -> String {
    let prefixes: Vec<(&str, &str)> = iris::WELL_KNOWN_PREFIXES
        .iter()
        .copied()
        .chain(extra.iter().copied())
        .collect();

    let mut out = String::with_capacity(graph.len() * 64 + 512);

    for (prefix, ns) in &prefixes {
        out.push_str(&format!("@prefix {}: <{}> .\n", prefix, ns));
    }

    let mut current_subject: Option<&Term> = None;
    let mut current_predicate: Option<&Iri> = None;

    for t in graph {
        if current_subject == Some(&t.subject) {
            if current_predicate == Some(&t.predicate) {
                out.push_str(" ,\n    ");
            } else {
                out.push_str(" ;\n  ");
                out.push_str(&predicate(&t.predicate, &prefixes));
                out.push(' ');
            }
        } else {
            if current_subject.is_some() {
                out.push_str(" .\n");
            }
            out.push('\n');
            out.push_str(&term(&t.subject, &prefixes));
            out.push_str("\n  ");
            out.push_str(&predicate(&t.predicate, &prefixes));
            out.push(' ');
        }
        out.push_str(&term(&t.object, &prefixes));
        current_subject = Some(&t.subject);
        current_predicate = Some(&t.predicate);
    }
    if current_subject.is_some() {
        out.push_str(" .\n");
    }

    out
}

fn predicate(iri: &Iri, prefixes: &[(&str, &str)]) -> String {
    if iri.as_str() == iris::RDF_TYPE {
        "a".to_owned()
    } else {
        iri_ref(iri, prefixes)
    }
}

fn term(term: &Term, prefixes: &[(&str, &str)]) -> String {
    match term {
        Term::Iri(iri) => iri_ref(iri, prefixes),
        Term::Literal(lit) if lit.language.is_none() => match &lit.datatype {
            Some(dt) => format!(
                "\"{}\"^^{}",
                escape_literal(&lit.lexical),
                iri_ref(dt, prefixes)
            ),
            None => format!("\"{}\"", escape_literal(&lit.lexical)),
        },
        other => ntriples::term(other),
    }
}

fn iri_ref(iri: &Iri, prefixes: &[(&str, &str)]) -> String {
    for (prefix, ns) in prefixes {
        if let Some(local) = iri.as_str().strip_prefix(ns) {
            if is_safe_local_name(local) {
                return format!("{}:{}", prefix, local);
            }
        }
    }
    format!("<{}>", iri)
}

/// Conservative subset of Turtle `PN_LOCAL`: ASCII letters, digits, `_` and
/// `-`, not starting with `-`.
fn is_safe_local_name(local: &str) -> bool {
    !local.is_empty()
        && !local.starts_with('-')
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
