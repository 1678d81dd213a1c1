//! Literal-to-vocabulary normalization.
//!
//! For every `(subject, source_property, literal)` triple the literal is
//! lowercased, trimmed and split on the configured delimiter. Each segment is
//! rewritten, slugified under the target namespace, and resolved against the
//! run's [`IdentifierRegistry`]. The subject is linked to the resulting
//! identifier in the annotation graph, and the identifier is typed and
//! labelled in the vocabulary graph.

use csv2rdf_graph::slug::slugify;
use csv2rdf_graph::{iris, Graph, Iri, Literal, Term, Triple};
use tracing::{debug, warn};

use crate::config::{EmptySegments, NormalizerConfig};
use crate::error::{Result, VocabError};
use crate::registry::{IdentifierRegistry, Outcome};
use crate::report::{Diagnostic, NormalizationReport};
use crate::rewrite::{Identity, TermRewrite};

/// Output of one normalization run.
#[derive(Debug, Default, Clone)]
pub struct Normalization {
    /// `(subject, target_property, identifier)` links plus rewrite annotations.
    pub annotations: Graph,
    /// `rdf:type` and `skos:prefLabel` for each minted identifier.
    pub vocabulary: Graph,
    /// Counts and diagnostics.
    pub report: NormalizationReport,
}

/// Normalizes `input` with no term rewriting beyond the configured overrides.
///
/// # Errors
///
/// Returns [`VocabError::InvalidConfig`] for an unusable config, or
/// [`VocabError::NonLiteralObject`] in strict mode.
pub fn normalize(input: &Graph, config: &NormalizerConfig) -> Result<Normalization> {
    normalize_with(input, config, &Identity)
}

/// Normalizes `input`, passing each segment through the configured value
/// overrides and then `rewrite`.
///
/// # Errors
///
/// Returns [`VocabError::InvalidConfig`] for an unusable config, or
/// [`VocabError::NonLiteralObject`] in strict mode. No partial output is
/// returned on error.
pub fn normalize_with<R>(input: &Graph, config: &NormalizerConfig, rewrite: &R) -> Result<Normalization>
where
    R: TermRewrite + ?Sized,
{
    config.validate()?;

    let rdf_type = Iri::new(iris::RDF_TYPE);
    let pref_label = Iri::new(iris::SKOS_PREF_LABEL);
    let class = Term::Iri(config.target_class.clone());

    let mut registry = IdentifierRegistry::new();
    let mut out = Normalization::default();

    debug!(property = %config.source_property, "starting vocabulary creation");

    for (subject, object) in input.subject_objects(&config.source_property) {
        out.report.source_triples += 1;

        let Some(literal) = object.as_literal() else {
            if config.strict {
                return Err(VocabError::NonLiteralObject {
                    subject: subject.clone(),
                    object: object.clone(),
                });
            }
            warn!(%subject, %object, "skipping non-literal value");
            out.report.push(Diagnostic::skipped(
                subject,
                format!("object {object} is not a literal"),
            ));
            continue;
        };

        for segment in split_terms(&literal.lexical, &config.split_delimiter) {
            out.report.segments += 1;

            let overridden = config.value_overrides.rewrite(&segment);
            let rewritten = rewrite.rewrite(&overridden.term);
            let term = rewritten.term.trim();

            let slug = slugify(term);
            if slug.is_empty() && config.empty_segments == EmptySegments::Skip {
                let message = if term.is_empty() {
                    format!("empty segment in {:?}", literal.lexical)
                } else {
                    format!("segment {term:?} has no identifier characters")
                };
                warn!(%subject, "{message}, skipping");
                out.report.push(Diagnostic::skipped(subject, message));
                continue;
            }

            // Notes are kept only for segments that reach the vocabulary.
            for (predicate, value) in overridden
                .subject_annotations
                .into_iter()
                .chain(rewritten.subject_annotations)
            {
                out.annotations
                    .add(Triple::new(subject.clone(), predicate, value));
            }

            let candidate = config.target_namespace.term(&slug);
            let resolution = registry.mint(&candidate, term);
            match resolution.outcome {
                Outcome::Fresh => out.report.minted += 1,
                Outcome::Suffixed(_) => {
                    out.report.minted += 1;
                    out.report.collisions += 1;
                    out.report.push(Diagnostic::info(
                        subject,
                        format!(
                            "{term:?} collides with {:?}; minted {}",
                            registry.value_of(&candidate).unwrap_or_default(),
                            resolution.iri
                        ),
                    ));
                }
                Outcome::Reused => {}
            }

            let id = Term::Iri(resolution.iri);
            out.annotations.add(Triple::new(
                subject.clone(),
                config.target_property.clone(),
                id.clone(),
            ));
            out.vocabulary
                .add(Triple::new(id.clone(), rdf_type.clone(), class.clone()));
            out.vocabulary.add(Triple::new(
                id,
                pref_label.clone(),
                Literal::lang(term, config.literal_language.as_str()),
            ));
        }
    }

    debug!(
        source_triples = out.report.source_triples,
        minted = out.report.minted,
        collisions = out.report.collisions,
        "vocabulary creation finished"
    );
    Ok(out)
}

/// Splits a literal into normalized candidate terms.
///
/// The whole value and `delimiter` are lowercased, the value is trimmed and
/// split, and each piece is trimmed again. Empty pieces are kept.
pub fn split_terms(value: &str, delimiter: &str) -> Vec<String> {
    let delimiter = delimiter.to_lowercase();
    value
        .trim()
        .to_lowercase()
        .split(delimiter.as_str())
        .map(|s| s.trim().to_owned())
        .collect()
}
