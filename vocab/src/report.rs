//! Normalization report: per-value diagnostics and run totals.

use csv2rdf_graph::Term;

/// Severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational; nothing was dropped.
    Info,
    /// A value was skipped.
    Warning,
}

/// A data-quality observation tied to one subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Subject whose value triggered the diagnostic.
    pub subject: Term,
    /// Human-readable message.
    pub message: String,
    /// Severity of the diagnostic.
    pub severity: Severity,
}

impl Diagnostic {
    /// Creates an informational diagnostic.
    pub fn info(subject: &Term, message: impl Into<String>) -> Self {
        Self {
            subject: subject.clone(),
            message: message.into(),
            severity: Severity::Info,
        }
    }

    /// Creates a warning for a skipped value.
    pub fn skipped(subject: &Term, message: impl Into<String>) -> Self {
        Self {
            subject: subject.clone(),
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    /// Returns true if a value was dropped.
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

/// Aggregated outcome of one normalization run.
#[derive(Debug, Default, Clone)]
pub struct NormalizationReport {
    /// Source-property triples that were examined.
    pub source_triples: usize,
    /// Candidate terms produced by splitting.
    pub segments: usize,
    /// Distinct identifiers minted.
    pub minted: usize,
    /// Identifiers minted with a numeric suffix after a slug collision.
    pub collisions: usize,
    /// Diagnostics in processing order.
    pub diagnostics: Vec<Diagnostic>,
}

impl NormalizationReport {
    /// Appends a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Returns the count of skipped values.
    pub fn skipped_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_warning()).count()
    }
}
