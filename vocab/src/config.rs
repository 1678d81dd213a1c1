//! Normalizer configuration.
//!
//! [`NormalizerConfig`] carries the four required IRIs plus the optional
//! settings. The optional settings can also be read from a TOML file as
//! [`NormalizerOptions`] and layered onto a config:
//!
//! ```toml
//! literal_language = "fi"
//! split_delimiter = "/"
//! empty_segments = "skip"
//! strict = false
//!
//! [value_overrides]
//! "rakennus-työmies" = "rakennustyömies"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use csv2rdf_graph::{Iri, Namespace};
use serde::Deserialize;
use tracing::warn;

use crate::error::{Result, VocabError};
use crate::rewrite::ValueOverrides;

/// Default language tag of preferred labels.
pub const DEFAULT_LANGUAGE: &str = "fi";

/// Default multi-value delimiter.
pub const DEFAULT_DELIMITER: &str = "/";

/// What to do with segments that are empty after splitting and trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptySegments {
    /// Drop the segment and record a diagnostic.
    #[default]
    Skip,
    /// Mint an identifier for it (the bare namespace, or a suffixed variant).
    Mint,
}

/// Everything a normalization run needs to know.
#[derive(Debug, Clone)]
pub struct NormalizerConfig {
    /// Namespace under which vocabulary identifiers are minted.
    pub target_namespace: Namespace,
    /// Predicate whose literal objects are normalized.
    pub source_property: Iri,
    /// Predicate linking original subjects to vocabulary identifiers.
    pub target_property: Iri,
    /// Type of every minted identifier.
    pub target_class: Iri,
    /// Language tag of preferred labels.
    pub literal_language: String,
    /// Delimiter separating multiple values in one literal.
    pub split_delimiter: String,
    /// Handling of empty segments.
    pub empty_segments: EmptySegments,
    /// Overrides applied to each segment before slugifying.
    pub value_overrides: ValueOverrides,
    /// Accepted for command-line compatibility; has no effect.
    pub remove_source_triples: bool,
    /// Fail on non-literal objects instead of skipping them.
    pub strict: bool,
}

impl NormalizerConfig {
    /// Creates a config with default optional settings.
    pub fn new(
        target_namespace: impl Into<String>,
        source_property: impl Into<Iri>,
        target_property: impl Into<Iri>,
        target_class: impl Into<Iri>,
    ) -> Self {
        Self {
            target_namespace: Namespace::new(target_namespace),
            source_property: source_property.into(),
            target_property: target_property.into(),
            target_class: target_class.into(),
            literal_language: DEFAULT_LANGUAGE.to_owned(),
            split_delimiter: DEFAULT_DELIMITER.to_owned(),
            empty_segments: EmptySegments::Skip,
            value_overrides: ValueOverrides::default(),
            remove_source_triples: false,
            strict: false,
        }
    }

    /// Sets the preferred-label language.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.literal_language = language.into();
        self
    }

    /// Sets the multi-value delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.split_delimiter = delimiter.into();
        self
    }

    /// Sets the empty-segment policy.
    #[must_use]
    pub fn with_empty_segments(mut self, policy: EmptySegments) -> Self {
        self.empty_segments = policy;
        self
    }

    /// Adds value overrides.
    #[must_use]
    pub fn with_overrides(mut self, overrides: ValueOverrides) -> Self {
        self.value_overrides.extend(overrides);
        self
    }

    /// Sets strict mode.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Sets the remove-source-triples flag.
    #[must_use]
    pub fn with_remove_source_triples(mut self, remove: bool) -> Self {
        self.remove_source_triples = remove;
        self
    }

    /// Layers file options onto this config; values present in `options`
    /// replace the current ones and overrides are added to the table.
    #[must_use]
    pub fn with_options(mut self, options: NormalizerOptions) -> Self {
        if let Some(lang) = options.literal_language {
            self.literal_language = lang;
        }
        if let Some(delimiter) = options.split_delimiter {
            self.split_delimiter = delimiter;
        }
        if let Some(policy) = options.empty_segments {
            self.empty_segments = policy;
        }
        if let Some(remove) = options.remove_source_triples {
            self.remove_source_triples = remove;
        }
        if let Some(strict) = options.strict {
            self.strict = strict;
        }
        self.value_overrides
            .extend(ValueOverrides::new(options.value_overrides));
        self
    }

    /// Checks the settings a run depends on.
    ///
    /// # Errors
    ///
    /// Returns [`VocabError::InvalidConfig`] for an empty namespace,
    /// delimiter, or language tag.
    pub fn validate(&self) -> Result<()> {
        if self.target_namespace.as_str().is_empty() {
            return Err(VocabError::InvalidConfig(
                "target namespace must not be empty".to_owned(),
            ));
        }
        if self.split_delimiter.is_empty() {
            return Err(VocabError::InvalidConfig(
                "split delimiter must not be empty".to_owned(),
            ));
        }
        if self.literal_language.trim().is_empty() {
            return Err(VocabError::InvalidConfig(
                "literal language must not be empty".to_owned(),
            ));
        }
        if self.remove_source_triples {
            warn!("remove_source_triples is accepted but has no effect");
        }
        Ok(())
    }
}

/// Optional settings as read from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NormalizerOptions {
    /// Language tag of preferred labels.
    pub literal_language: Option<String>,
    /// Multi-value delimiter.
    pub split_delimiter: Option<String>,
    /// Empty-segment policy (`"skip"` or `"mint"`).
    pub empty_segments: Option<EmptySegments>,
    /// Remove-source-triples flag.
    pub remove_source_triples: Option<bool>,
    /// Strict mode.
    pub strict: Option<bool>,
    /// Value override table.
    #[serde(default)]
    pub value_overrides: BTreeMap<String, String>,
}

impl NormalizerOptions {
    /// Parses options from TOML text.
    ///
    /// # Errors
    ///
    /// Returns the TOML error if the text does not match the schema.
    pub fn from_toml_str(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Reads options from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`VocabError::Read`] or [`VocabError::Parse`].
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| VocabError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| VocabError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewrite::TermRewrite;

    fn base() -> NormalizerConfig {
        NormalizerConfig::new(
            "http://example.com/vocab/",
            "http://example.com/occupation",
            "http://example.com/hasOccupation",
            "http://example.com/Occupation",
        )
    }

    #[test]
    fn defaults() {
        let c = base();
        assert_eq!(c.literal_language, "fi");
        assert_eq!(c.split_delimiter, "/");
        assert_eq!(c.empty_segments, EmptySegments::Skip);
        assert!(!c.strict);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn options_layer_onto_config() {
        let opts = NormalizerOptions::from_toml_str(
            r#"
            literal_language = "en"
            split_delimiter = ";"
            empty_segments = "mint"
            strict = true

            [value_overrides]
            "Rakennus-työmies" = "rakennustyömies"
            "#,
        )
        .unwrap();
        let c = base().with_options(opts);
        assert_eq!(c.literal_language, "en");
        assert_eq!(c.split_delimiter, ";");
        assert_eq!(c.empty_segments, EmptySegments::Mint);
        assert!(c.strict);
        assert_eq!(
            c.value_overrides.rewrite("rakennus-työmies").term,
            "rakennustyömies"
        );
    }

    #[test]
    fn unknown_option_is_rejected() {
        assert!(NormalizerOptions::from_toml_str("colour = \"red\"").is_err());
    }

    #[test]
    fn empty_delimiter_is_invalid() {
        let err = base().with_delimiter("").validate().unwrap_err();
        assert!(matches!(err, VocabError::InvalidConfig(_)));
    }

    #[test]
    fn empty_namespace_is_invalid() {
        let c = NormalizerConfig::new("", "http://e/p", "http://e/q", "http://e/C");
        assert!(c.validate().is_err());
    }
}
