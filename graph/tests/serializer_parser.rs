//! Serialized output must be readable by a conforming Turtle / N-Triples parser.

use csv2rdf_graph::parser::parse_str;
use csv2rdf_graph::serializer::{serialize, turtle};
use csv2rdf_graph::{iris, Graph, Iri, Literal, RdfFormat, Term, Triple};

fn annotated() -> Graph {
    let subject = Term::iri("http://ldf.fi/warsa/prisoners/r_0");
    let vocab = "http://ldf.fi/warsa/occupations/";
    [
        Triple::new(
            subject.clone(),
            "http://ldf.fi/schema/warsa/prisoners/occupation",
            Term::iri(format!("{vocab}rakennustyomies")),
        ),
        Triple::new(
            subject.clone(),
            iris::SKOS_NOTE,
            Literal::lang("Ammatti \"aliupseeri\" epävarma", "fi"),
        ),
        Triple::new(
            subject,
            "http://ldf.fi/schema/warsa/prisoners/comment",
            Literal::plain("line one\nline two\\"),
        ),
        Triple::new(
            Term::iri(format!("{vocab}rakennustyomies")),
            iris::RDF_TYPE,
            Term::iri("http://ldf.fi/schema/warsa/Occupation"),
        ),
        Triple::new(
            Term::iri(format!("{vocab}rakennustyomies")),
            "http://example.com/count",
            Literal::typed("3", Iri::new("http://www.w3.org/2001/XMLSchema#integer")),
        ),
        Triple::new(
            Term::iri(format!("{vocab}nakki_1")),
            iris::SKOS_PREF_LABEL,
            Literal::lang("näkki", "fi"),
        ),
    ]
    .into_iter()
    .collect()
}

#[test]
fn turtle_output_parses_back_to_the_same_graph() {
    let graph = annotated();
    let ttl = turtle::to_turtle_with_prefixes(&graph, &[("occ", "http://ldf.fi/warsa/occupations/")]);
    let parsed = parse_str(&ttl, RdfFormat::Turtle).unwrap();
    assert_eq!(parsed, graph);
}

#[test]
fn ntriples_output_parses_back_to_the_same_graph() {
    let graph = annotated();
    let nt = serialize(&graph, RdfFormat::NTriples);
    assert_eq!(nt.lines().count(), graph.len());
    let parsed = parse_str(&nt, RdfFormat::NTriples).unwrap();
    assert_eq!(parsed, graph);
}

#[test]
fn json_ld_output_is_valid_json() {
    let json = serialize(&annotated(), RdfFormat::JsonLd);
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["@graph"].as_array().unwrap().len(), 3);
}
