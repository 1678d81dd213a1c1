//! Turtle and N-Triples parsing into a [`Graph`].
//!
//! Parsing is delegated to the `sophia_turtle` parsers; this module maps
//! their terms onto the workspace's own [`Term`] model.

use std::path::Path;

use sophia_api::source::TripleSource;
use sophia_api::term::{Term as SophiaTerm, TermKind};
use sophia_api::triple::Triple as SophiaTriple;
use sophia_turtle::parser::{nt, turtle};
use tracing::debug;

use crate::error::{GraphError, Result};
use crate::format::RdfFormat;
use crate::model::{iris, Graph, Iri, Literal, Term, Triple};

/// Parses a document held in memory.
///
/// # Errors
///
/// Returns [`GraphError::MalformedInput`] if the text is not valid in
/// `format`, or [`GraphError::UnsupportedFormat`] for formats that cannot
/// be read.
pub fn parse_str(text: &str, format: RdfFormat) -> Result<Graph> {
    let mut graph = Graph::new();
    let mut rejected: Option<String> = None;

    let mut sink = |t: Triple| {
        graph.add(t);
    };

    let outcome = match format {
        RdfFormat::Turtle => turtle::parse_str(text)
            .for_each_triple(|t| convert(&t, &mut sink, &mut rejected))
            .map_err(|e| e.to_string()),
        RdfFormat::NTriples => nt::parse_str(text)
            .for_each_triple(|t| convert(&t, &mut sink, &mut rejected))
            .map_err(|e| e.to_string()),
        RdfFormat::JsonLd => {
            return Err(GraphError::UnsupportedFormat(format!(
                "{format} cannot be used as an input format"
            )))
        }
    };

    outcome.map_err(|message| GraphError::MalformedInput {
        format: format.name(),
        message,
    })?;
    if let Some(message) = rejected {
        return Err(GraphError::MalformedInput {
            format: format.name(),
            message,
        });
    }

    debug!(triples = graph.len(), %format, "parsed graph");
    Ok(graph)
}

/// Reads and parses a document from disk.
///
/// # Errors
///
/// Returns [`GraphError::Read`] if the file cannot be read, otherwise the
/// errors of [`parse_str`].
pub fn parse_file(path: &Path, format: RdfFormat) -> Result<Graph> {
    let text = std::fs::read_to_string(path).map_err(|source| GraphError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(&text, format)
}

fn convert<T: SophiaTriple>(t: &T, sink: &mut impl FnMut(Triple), rejected: &mut Option<String>) {
    if rejected.is_some() {
        return;
    }
    let subject = convert_term(t.s());
    let predicate = t.p().iri().map(|iri| Iri::new(iri.as_str()));
    let object = convert_term(t.o());
    match (subject, predicate, object) {
        (Some(subject @ (Term::Iri(_) | Term::BlankNode(_))), Some(predicate), Some(object)) => {
            sink(Triple {
                subject,
                predicate,
                object,
            });
        }
        _ => {
            *rejected = Some("unsupported term in triple (quoted triple or variable)".to_owned());
        }
    }
}

fn convert_term<T: SophiaTerm>(term: T) -> Option<Term> {
    match term.kind() {
        TermKind::Iri => term.iri().map(|iri| Term::iri(iri.as_str())),
        TermKind::BlankNode => term
            .bnode_id()
            .map(|id| Term::BlankNode(id.as_str().to_owned())),
        TermKind::Literal => {
            let lexical = term.lexical_form()?.to_string();
            if let Some(tag) = term.language_tag() {
                return Some(Term::Literal(Literal::lang(lexical, tag.as_str())));
            }
            let literal = match term.datatype() {
                Some(dt) if dt.as_str() != iris::XSD_STRING => {
                    Literal::typed(lexical, Iri::new(dt.as_str()))
                }
                _ => Literal::plain(lexical),
            };
            Some(Term::Literal(literal))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_turtle_literals() {
        let ttl = r#"
            @prefix ex: <http://example.com/> .
            ex:r_0 ex:occupation "nakki" ;
                   ex:name "Matti"@FI ;
                   ex:age "42"^^<http://www.w3.org/2001/XMLSchema#integer> .
        "#;
        let g = parse_str(ttl, RdfFormat::Turtle).unwrap();
        assert_eq!(g.len(), 3);
        let occ = Iri::new("http://example.com/occupation");
        let (_, obj) = g.subject_objects(&occ).next().unwrap();
        assert_eq!(obj, &Term::Literal(Literal::plain("nakki")));

        let name = Iri::new("http://example.com/name");
        let (_, obj) = g.subject_objects(&name).next().unwrap();
        assert_eq!(obj, &Term::Literal(Literal::lang("Matti", "fi")));
    }

    #[test]
    fn parses_ntriples_blank_nodes() {
        let nt = "_:b0 <http://example.com/p> <http://example.com/o> .\n";
        let g = parse_str(nt, RdfFormat::NTriples).unwrap();
        let t = g.iter().next().unwrap();
        assert!(matches!(t.subject, Term::BlankNode(_)));
        assert_eq!(t.object, Term::iri("http://example.com/o"));
    }

    #[test]
    fn malformed_input_is_reported() {
        let err = parse_str("<http://a> <http://b> ", RdfFormat::NTriples).unwrap_err();
        assert!(matches!(err, GraphError::MalformedInput { format: "nt", .. }));
    }

    #[test]
    fn json_ld_is_not_readable() {
        let err = parse_str("{}", RdfFormat::JsonLd).unwrap_err();
        assert!(matches!(err, GraphError::UnsupportedFormat(_)));
    }

    #[test]
    fn empty_document_is_empty_graph() {
        assert!(parse_str("", RdfFormat::Turtle).unwrap().is_empty());
    }
}
