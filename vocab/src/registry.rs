//! Used-identifier registry and collision-safe identifier resolution.
//!
//! A registry lives for exactly one normalization run. It maps every minted
//! identifier to the value it was minted for, which is what separates a
//! repeated value (merge onto the existing identifier) from a different value
//! whose slug happens to coincide (mint `candidate_1`, `candidate_2`, ...).

use std::collections::HashMap;

use csv2rdf_graph::Iri;
use tracing::info;

/// How [`IdentifierRegistry::resolve`] arrived at its identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The candidate was unused.
    Fresh,
    /// The identifier was already minted for the same value.
    Reused,
    /// The candidate belonged to another value; suffix `_n` was appended.
    Suffixed(u32),
}

/// Result of resolving a candidate identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The identifier to use.
    pub iri: Iri,
    /// Whether it is new, reused, or a suffixed variant.
    pub outcome: Outcome,
}

impl Resolution {
    /// Returns true if recording this resolution adds a registry entry.
    pub fn is_new(&self) -> bool {
        !matches!(self.outcome, Outcome::Reused)
    }
}

/// Identifiers minted so far in one run, keyed to their provenance value.
#[derive(Debug, Default, Clone)]
pub struct IdentifierRegistry {
    used: HashMap<Iri, String>,
}

impl IdentifierRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of identifiers minted.
    pub fn len(&self) -> usize {
        self.used.len()
    }

    /// Returns true if nothing has been minted.
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    /// Returns the value `iri` was minted for.
    pub fn value_of(&self, iri: &Iri) -> Option<&str> {
        self.used.get(iri).map(String::as_str)
    }

    /// Decides which identifier `value` should use, given `candidate`.
    ///
    /// The registry is not modified; pass the result to [`record`](Self::record).
    ///
    /// | Registry state | Result |
    /// |---|---|
    /// | `candidate` unused | `candidate`, [`Outcome::Fresh`] |
    /// | `candidate` minted for `value` | `candidate`, [`Outcome::Reused`] |
    /// | `candidate` minted for another value | lowest `candidate_n` (n ≥ 1) that is unused or minted for `value` |
    pub fn resolve(&self, candidate: &Iri, value: &str) -> Resolution {
        match self.used.get(candidate) {
            None => {
                return Resolution {
                    iri: candidate.clone(),
                    outcome: Outcome::Fresh,
                }
            }
            Some(existing) if existing == value => {
                return Resolution {
                    iri: candidate.clone(),
                    outcome: Outcome::Reused,
                }
            }
            Some(_) => {}
        }

        let mut n: u32 = 1;
        loop {
            let iri = candidate.with_suffix(&format!("_{n}"));
            match self.used.get(&iri) {
                None => {
                    info!(
                        existing = self.value_of(candidate).unwrap_or_default(),
                        value,
                        %iri,
                        "changing duplicate identifier"
                    );
                    return Resolution {
                        iri,
                        outcome: Outcome::Suffixed(n),
                    };
                }
                Some(existing) if existing == value => {
                    return Resolution {
                        iri,
                        outcome: Outcome::Reused,
                    }
                }
                Some(_) => n += 1,
            }
        }
    }

    /// Records that `iri` now stands for `value`.
    ///
    /// Recording a [`Reused`](Outcome::Reused) resolution is a no-op.
    pub fn record(&mut self, iri: Iri, value: impl Into<String>) {
        self.used.entry(iri).or_insert_with(|| value.into());
    }

    /// Resolves and records in one step, returning the resolution.
    pub fn mint(&mut self, candidate: &Iri, value: &str) -> Resolution {
        let resolution = self.resolve(candidate, value);
        if resolution.is_new() {
            self.record(resolution.iri.clone(), value);
        }
        resolution
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iri(s: &str) -> Iri {
        Iri::new(s)
    }

    #[test]
    fn first_use_is_fresh() {
        let reg = IdentifierRegistry::new();
        let r = reg.resolve(&iri("http://example.com/nakki"), "nakki");
        assert_eq!(r.iri, iri("http://example.com/nakki"));
        assert_eq!(r.outcome, Outcome::Fresh);
    }

    #[test]
    fn same_value_reuses_identifier() {
        let mut reg = IdentifierRegistry::new();
        reg.mint(&iri("http://example.com/nakki"), "nakki");
        let r = reg.resolve(&iri("http://example.com/nakki"), "nakki");
        assert_eq!(r.iri, iri("http://example.com/nakki"));
        assert_eq!(r.outcome, Outcome::Reused);
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn different_value_gets_first_suffix() {
        let mut reg = IdentifierRegistry::new();
        reg.record(iri("http://example.com/kahmija"), "kähmijä");
        let r = reg.resolve(&iri("http://example.com/kahmija"), "kahmija");
        assert_eq!(r.iri, iri("http://example.com/kahmija_1"));
        assert_eq!(r.outcome, Outcome::Suffixed(1));
    }

    #[test]
    fn resolve_does_not_mutate() {
        let reg = IdentifierRegistry::new();
        let _ = reg.resolve(&iri("http://e/a"), "a");
        assert!(reg.is_empty());
    }

    #[test]
    fn suffix_search_takes_lowest_free_index() {
        let mut reg = IdentifierRegistry::new();
        reg.record(iri("http://e/a"), "a");
        reg.record(iri("http://e/a_1"), "á");
        reg.record(iri("http://e/a_3"), "à");
        let r = reg.resolve(&iri("http://e/a"), "â");
        assert_eq!(r.iri, iri("http://e/a_2"));
        assert_eq!(r.outcome, Outcome::Suffixed(2));
    }

    #[test]
    fn repeated_colliding_value_reuses_its_suffix() {
        let mut reg = IdentifierRegistry::new();
        let base = iri("http://e/nakki");
        assert_eq!(reg.mint(&base, "nakki").outcome, Outcome::Fresh);
        assert_eq!(reg.mint(&base, "näkki").iri, iri("http://e/nakki_1"));
        let again = reg.mint(&base, "näkki");
        assert_eq!(again.iri, iri("http://e/nakki_1"));
        assert_eq!(again.outcome, Outcome::Reused);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn record_keeps_first_provenance() {
        let mut reg = IdentifierRegistry::new();
        reg.record(iri("http://e/a"), "a");
        reg.record(iri("http://e/a"), "b");
        assert_eq!(reg.value_of(&iri("http://e/a")), Some("a"));
    }
}
