//! Core triple model types.
//!
//! A [`Graph`] is an ordered set of [`Triple`]s. Ordering is total and
//! deterministic (subject, then predicate, then object), so every query and
//! every serializer sees triples in the same order across runs.

use std::collections::BTreeSet;
use std::fmt;

/// An absolute IRI, compared and ordered as its string form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Iri(String);

impl Iri {
    /// Wraps a string as an IRI. No syntax validation is performed.
    pub fn new(iri: impl Into<String>) -> Self {
        Self(iri.into())
    }

    /// Returns the IRI as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns a new IRI with `suffix` appended.
    #[must_use]
    pub fn with_suffix(&self, suffix: &str) -> Self {
        let mut s = String::with_capacity(self.0.len() + suffix.len());
        s.push_str(&self.0);
        s.push_str(suffix);
        Self(s)
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Iri {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Iri {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A literal value: lexical form plus an optional language tag or datatype.
///
/// A literal carries at most one of `language` and `datatype`; a literal
/// with neither is a plain `xsd:string`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    /// The lexical form.
    pub lexical: String,
    /// Language tag (e.g. `"fi"`), lowercased.
    pub language: Option<String>,
    /// Datatype IRI, absent for plain and language-tagged literals.
    pub datatype: Option<Iri>,
}

impl Literal {
    /// A plain string literal.
    pub fn plain(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            language: None,
            datatype: None,
        }
    }

    /// A language-tagged string literal.
    pub fn lang(lexical: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            language: Some(language.into().to_lowercase()),
            datatype: None,
        }
    }

    /// A typed literal.
    pub fn typed(lexical: impl Into<String>, datatype: Iri) -> Self {
        Self {
            lexical: lexical.into(),
            language: None,
            datatype: Some(datatype),
        }
    }
}

/// A node in a triple: IRI, blank node, or literal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    /// An IRI reference.
    Iri(Iri),
    /// A blank node, identified by its document-local label.
    BlankNode(String),
    /// A literal value.
    Literal(Literal),
}

impl Term {
    /// Shorthand for `Term::Iri(Iri::new(iri))`.
    pub fn iri(iri: impl Into<String>) -> Self {
        Term::Iri(Iri::new(iri))
    }

    /// Returns the IRI if this term is one.
    #[must_use]
    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Returns the literal if this term is one.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            _ => None,
        }
    }
}

impl From<Iri> for Term {
    fn from(iri: Iri) -> Self {
        Term::Iri(iri)
    }
}

impl From<Literal> for Term {
    fn from(lit: Literal) -> Self {
        Term::Literal(lit)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{iri}>"),
            Term::BlankNode(label) => write!(f, "_:{label}"),
            Term::Literal(lit) => {
                write!(f, "{:?}", lit.lexical)?;
                if let Some(lang) = &lit.language {
                    write!(f, "@{lang}")?;
                } else if let Some(dt) = &lit.datatype {
                    write!(f, "^^<{dt}>")?;
                }
                Ok(())
            }
        }
    }
}

/// A single (subject, predicate, object) statement.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triple {
    /// Subject: an IRI or blank node.
    pub subject: Term,
    /// Predicate IRI.
    pub predicate: Iri,
    /// Object: any term.
    pub object: Term,
}

impl Triple {
    /// Builds a triple.
    pub fn new(subject: impl Into<Term>, predicate: impl Into<Iri>, object: impl Into<Term>) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

/// An in-memory set of triples.
///
/// Duplicate triples collapse. Iteration order is the `Ord` order of
/// [`Triple`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    triples: BTreeSet<Triple>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a triple. Returns `false` if it was already present.
    pub fn add(&mut self, triple: Triple) -> bool {
        self.triples.insert(triple)
    }

    /// Returns true if the graph holds `triple`.
    #[must_use]
    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// Number of distinct triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns true if the graph holds no triples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterates over all triples in order.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Iterates over the triples matching every given position.
    ///
    /// `None` is a wildcard.
    pub fn matching<'a>(
        &'a self,
        subject: Option<&'a Term>,
        predicate: Option<&'a Iri>,
        object: Option<&'a Term>,
    ) -> impl Iterator<Item = &'a Triple> + 'a {
        self.triples.iter().filter(move |t| {
            subject.map_or(true, |s| &t.subject == s)
                && predicate.map_or(true, |p| &t.predicate == p)
                && object.map_or(true, |o| &t.object == o)
        })
    }

    /// Iterates over `(subject, object)` pairs of triples with `predicate`.
    pub fn subject_objects<'a>(
        &'a self,
        predicate: &'a Iri,
    ) -> impl Iterator<Item = (&'a Term, &'a Term)> + 'a {
        self.matching(None, Some(predicate), None)
            .map(|t| (&t.subject, &t.object))
    }
}

impl Extend<Triple> for Graph {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        self.triples.extend(iter);
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        Self {
            triples: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Graph {
    type Item = Triple;
    type IntoIter = std::collections::btree_set::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::collections::btree_set::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

/// An IRI prefix under which terms are minted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    base: String,
}

impl Namespace {
    /// Creates a namespace from its base IRI (e.g. `"http://example.com/vocab/"`).
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// The base IRI.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.base
    }

    /// Returns the IRI `base + local`.
    #[must_use]
    pub fn term(&self, local: &str) -> Iri {
        Iri::new(format!("{}{}", self.base, local))
    }
}

/// Standard IRI constants used across the workspace.
pub mod iris {
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    /// SKOS namespace.
    pub const SKOS: &str = "http://www.w3.org/2004/02/skos/core#";

    /// `rdf:type`.
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `rdf:Property`.
    pub const RDF_PROPERTY: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#Property";
    /// `skos:prefLabel`.
    pub const SKOS_PREF_LABEL: &str = "http://www.w3.org/2004/02/skos/core#prefLabel";
    /// `skos:note`.
    pub const SKOS_NOTE: &str = "http://www.w3.org/2004/02/skos/core#note";
    /// `xsd:string`.
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// Prefixes the serializers abbreviate, in declaration order.
    pub const WELL_KNOWN_PREFIXES: &[(&str, &str)] = &[
        ("rdf", RDF),
        ("rdfs", RDFS),
        ("xsd", XSD),
        ("owl", OWL),
        ("skos", SKOS),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit_triple(s: &str, p: &str, o: &str) -> Triple {
        Triple::new(Term::iri(s), p, Literal::plain(o))
    }

    #[test]
    fn duplicates_collapse() {
        let mut g = Graph::new();
        assert!(g.add(lit_triple("http://e/a", "http://e/p", "x")));
        assert!(!g.add(lit_triple("http://e/a", "http://e/p", "x")));
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn matching_filters_on_each_position() {
        let g: Graph = [
            lit_triple("http://e/a", "http://e/p", "x"),
            lit_triple("http://e/a", "http://e/q", "y"),
            lit_triple("http://e/b", "http://e/p", "z"),
        ]
        .into_iter()
        .collect();

        let p = Iri::new("http://e/p");
        assert_eq!(g.matching(None, Some(&p), None).count(), 2);

        let a = Term::iri("http://e/a");
        assert_eq!(g.matching(Some(&a), None, None).count(), 2);

        let y = Term::Literal(Literal::plain("y"));
        assert_eq!(g.matching(Some(&a), None, Some(&y)).count(), 1);
        assert_eq!(g.matching(None, None, None).count(), 3);
    }

    #[test]
    fn subject_objects_are_ordered_by_subject() {
        let g: Graph = [
            lit_triple("http://e/b", "http://e/p", "2"),
            lit_triple("http://e/a", "http://e/p", "1"),
        ]
        .into_iter()
        .collect();
        let p = Iri::new("http://e/p");
        let subjects: Vec<String> = g
            .subject_objects(&p)
            .map(|(s, _)| s.to_string())
            .collect();
        assert_eq!(subjects, vec!["<http://e/a>", "<http://e/b>"]);
    }

    #[test]
    fn namespace_concatenates() {
        let ns = Namespace::new("http://example.com/vocab/");
        assert_eq!(ns.term("nakki").as_str(), "http://example.com/vocab/nakki");
    }

    #[test]
    fn lang_tags_are_lowercased() {
        assert_eq!(Literal::lang("x", "FI").language.as_deref(), Some("fi"));
    }
}
