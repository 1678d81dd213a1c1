//! Property-based tests for vocabulary normalization.
//!
//! Values are drawn from a tiny alphabet with diacritics and case variants so
//! that slug collisions and exact repeats are frequent.

use std::collections::{BTreeMap, BTreeSet};

use csv2rdf_graph::slug::slugify;
use csv2rdf_graph::{iris, Graph, Iri, Literal, Term, Triple};
use csv2rdf_vocab::{normalize, split_terms, EmptySegments, NormalizerConfig};
use proptest::prelude::*;

const NS: &str = "http://example.com/vocab/";
const OCC: &str = "http://example.com/occupation";
const HAS: &str = "http://example.com/hasOccupation";
const CLASS: &str = "http://example.com/Occupation";

fn config() -> NormalizerConfig {
    NormalizerConfig::new(NS, OCC, HAS, CLASS)
}

fn input(values: &[String]) -> Graph {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            Triple::new(
                Term::iri(format!("http://example.com/r_{i:03}")),
                OCC,
                Literal::plain(v.as_str()),
            )
        })
        .collect()
}

/// `label -> identifiers` and `identifier -> labels` from a vocabulary graph.
fn label_maps(vocab: &Graph) -> (BTreeMap<String, BTreeSet<String>>, BTreeMap<String, BTreeSet<String>>) {
    let p = Iri::new(iris::SKOS_PREF_LABEL);
    let mut by_label: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    let mut by_id: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for t in vocab.matching(None, Some(&p), None) {
        let id = t.subject.to_string();
        let label = t.object.as_literal().map(|l| l.lexical.clone()).unwrap_or_default();
        by_label.entry(label.clone()).or_default().insert(id.clone());
        by_id.entry(id).or_default().insert(label);
    }
    (by_label, by_id)
}

fn values() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[aAäÄoOö ?]{0,3}(/[aäoö ]{0,2}){0,2}", 0..12)
}

proptest! {
    /// Two runs over the same input produce identical graphs.
    #[test]
    fn prop_rerun_is_identical(values in values()) {
        let g = input(&values);
        let first = normalize(&g, &config()).unwrap();
        let second = normalize(&g, &config()).unwrap();
        prop_assert_eq!(first.vocabulary, second.vocabulary);
        prop_assert_eq!(first.annotations, second.annotations);
    }

    /// Exactly one type and one label per minted identifier.
    #[test]
    fn prop_two_triples_per_identifier(values in values()) {
        let out = normalize(&input(&values), &config()).unwrap();
        let (_, by_id) = label_maps(&out.vocabulary);
        prop_assert_eq!(out.vocabulary.len(), 2 * by_id.len());
        prop_assert_eq!(out.report.minted, by_id.len());
        for labels in by_id.values() {
            prop_assert_eq!(labels.len(), 1);
        }
        let rdf_type = Iri::new(iris::RDF_TYPE);
        prop_assert_eq!(out.vocabulary.matching(None, Some(&rdf_type), None).count(), by_id.len());
    }

    /// Distinct values never share an identifier, and every repeat of a value
    /// lands on the same identifier.
    #[test]
    fn prop_labels_and_identifiers_are_one_to_one(values in values()) {
        let out = normalize(&input(&values), &config()).unwrap();
        let (by_label, _) = label_maps(&out.vocabulary);
        for ids in by_label.values() {
            prop_assert_eq!(ids.len(), 1);
        }
    }

    /// Every non-empty segment links its subject to the identifier labelled
    /// with that segment.
    #[test]
    fn prop_every_segment_is_annotated(values in values()) {
        let g = input(&values);
        let out = normalize(&g, &config().with_empty_segments(EmptySegments::Mint)).unwrap();
        let (by_label, _) = label_maps(&out.vocabulary);
        for (i, value) in values.iter().enumerate() {
            let subject = Term::iri(format!("http://example.com/r_{i:03}"));
            for segment in split_terms(value, "/") {
                let ids = by_label.get(&segment).cloned().unwrap_or_default();
                prop_assert_eq!(ids.len(), 1, "segment {:?} has no identifier", segment);
                let id = ids.iter().next().cloned().unwrap_or_default();
                let id = id.trim_start_matches('<').trim_end_matches('>');
                let linked = Triple::new(subject.clone(), HAS, Term::iri(id));
                prop_assert!(out.annotations.contains(&linked));
            }
        }
    }

    /// Identifiers are the slug of the value, optionally with a numeric suffix.
    #[test]
    fn prop_identifiers_extend_the_slug(values in values()) {
        let out = normalize(&input(&values), &config()).unwrap();
        let (by_label, _) = label_maps(&out.vocabulary);
        for (label, ids) in &by_label {
            let expected = format!("<{NS}{}", slugify(label));
            for id in ids {
                prop_assert!(id.starts_with(&expected), "{} does not extend {}", id, expected);
                let rest = &id[expected.len()..id.len() - 1];
                prop_assert!(
                    rest.is_empty()
                        || (rest.starts_with('_') && rest[1..].chars().all(|c| c.is_ascii_digit())),
                    "unexpected suffix {:?}", rest
                );
            }
        }
    }
}
