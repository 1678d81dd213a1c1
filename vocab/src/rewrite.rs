//! Term rewriting applied between splitting and slugifying.
//!
//! A [`TermRewrite`] cleans up a single candidate term and may attach extra
//! statements to the subject the term came from. The normalizer is generic
//! over the rewrite, so domain tables (known transcription errors, marker
//! conventions) stay outside the core.

use std::collections::BTreeMap;
use std::path::Path;

use csv2rdf_graph::{iris, Iri, Literal, Term};

use crate::error::{Result, VocabError};

/// A rewritten term plus the statements it adds to its source subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten {
    /// The cleaned term; becomes the provenance value and preferred label.
    pub term: String,
    /// `(predicate, object)` pairs to attach to the original subject.
    pub subject_annotations: Vec<(Iri, Term)>,
}

impl Rewritten {
    /// A rewrite with no annotations.
    pub fn unchanged(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            subject_annotations: Vec::new(),
        }
    }
}

/// Rewrites one candidate term.
pub trait TermRewrite {
    /// Returns the cleaned term and any subject annotations.
    fn rewrite(&self, term: &str) -> Rewritten;
}

impl<F> TermRewrite for F
where
    F: Fn(&str) -> Rewritten,
{
    fn rewrite(&self, term: &str) -> Rewritten {
        self(term)
    }
}

/// Leaves every term as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl TermRewrite for Identity {
    fn rewrite(&self, term: &str) -> Rewritten {
        Rewritten::unchanged(term)
    }
}

/// Static string-to-string override table.
///
/// Keys are matched against the already lowercased, trimmed term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueOverrides {
    table: BTreeMap<String, String>,
}

impl ValueOverrides {
    /// Builds the table, normalizing keys the same way terms are normalized.
    pub fn new<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let table = entries
            .into_iter()
            .map(|(k, v)| (k.as_ref().trim().to_lowercase(), v.into()))
            .collect();
        Self { table }
    }

    /// Loads a TOML file of `"from" = "to"` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`VocabError::Read`] or [`VocabError::Parse`] if the file
    /// cannot be read or is not a flat string table.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| VocabError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let table: BTreeMap<String, String> =
            toml::from_str(&text).map_err(|source| VocabError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::new(table))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Adds every entry of `other`, replacing existing keys.
    pub fn extend(&mut self, other: ValueOverrides) {
        self.table.extend(other.table);
    }
}

impl TermRewrite for ValueOverrides {
    fn rewrite(&self, term: &str) -> Rewritten {
        match self.table.get(term) {
            Some(replacement) => Rewritten::unchanged(replacement.as_str()),
            None => Rewritten::unchanged(term),
        }
    }
}

/// One note attached to a subject whose term carried an uncertainty marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteTemplate {
    /// Language tag of the note literal.
    pub language: String,
    /// Note text; `{term}` is replaced by the cleaned term.
    pub template: String,
}

impl NoteTemplate {
    /// Creates a template.
    pub fn new(language: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            template: template.into(),
        }
    }
}

/// Treats a trailing marker (default `?`) as an uncertainty flag.
///
/// The marker is stripped from the term and one `skos:note` per template is
/// attached to the subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UncertaintyMarker {
    marker: char,
    notes: Vec<NoteTemplate>,
}

impl UncertaintyMarker {
    /// A marker with custom note templates.
    pub fn new(marker: char, notes: Vec<NoteTemplate>) -> Self {
        Self { marker, notes }
    }

    /// The occupation wording: an English and a Finnish note.
    pub fn occupation() -> Self {
        Self::new(
            '?',
            vec![
                NoteTemplate::new("en", "Occupation \"{term}\" uncertain"),
                NoteTemplate::new("fi", "Ammatti \"{term}\" epävarma"),
            ],
        )
    }
}

impl Default for UncertaintyMarker {
    fn default() -> Self {
        Self::occupation()
    }
}

impl TermRewrite for UncertaintyMarker {
    fn rewrite(&self, term: &str) -> Rewritten {
        let Some(stripped) = term.strip_suffix(self.marker) else {
            return Rewritten::unchanged(term);
        };
        let cleaned = stripped.trim().to_owned();
        let note = Iri::new(iris::SKOS_NOTE);
        let subject_annotations = self
            .notes
            .iter()
            .map(|n| {
                let text = n.template.replace("{term}", &cleaned);
                (note.clone(), Term::Literal(Literal::lang(text, n.language.as_str())))
            })
            .collect();
        Rewritten {
            term: cleaned,
            subject_annotations,
        }
    }
}

/// Applies rewrites in order, concatenating their annotations.
pub struct Chain<'a> {
    steps: Vec<&'a dyn TermRewrite>,
}

impl<'a> Chain<'a> {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Appends a step.
    #[must_use]
    pub fn then(mut self, step: &'a dyn TermRewrite) -> Self {
        self.steps.push(step);
        self
    }
}

impl Default for Chain<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl TermRewrite for Chain<'_> {
    fn rewrite(&self, term: &str) -> Rewritten {
        let mut acc = Rewritten::unchanged(term);
        for step in &self.steps {
            let next = step.rewrite(&acc.term);
            acc.term = next.term;
            acc.subject_annotations.extend(next.subject_annotations);
        }
        acc
    }
}
