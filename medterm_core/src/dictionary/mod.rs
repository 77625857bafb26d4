//! Static medical term dictionary.
//!
//! The dictionary is compiled into the binary and never mutated. Every
//! standard term and synonym, in both locales, is registered under its
//! normalized form in a single index built on first use.

mod citations;
mod entities;
mod terms;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::Locale;
use crate::standardize::normalize;

pub use citations::{Citation, CitationKey};
pub use entities::{EntityCategory, EntityKey, MedicalCode, MedicalEntity};
pub use terms::{ConceptId, TERM_MAPPINGS};

/// A string with one variant per locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedText {
    pub en: &'static str,
    pub zh: &'static str,
}

impl LocalizedText {
    #[must_use]
    pub const fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Zh => self.zh,
        }
    }
}

/// A list of strings with one variant per locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedList {
    pub en: &'static [&'static str],
    pub zh: &'static [&'static str],
}

impl LocalizedList {
    #[must_use]
    pub const fn get(&self, locale: Locale) -> &'static [&'static str] {
        match locale {
            Locale::En => self.en,
            Locale::Zh => self.zh,
        }
    }
}

/// One distinct medical concept and every surface form that names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermMapping {
    pub id: ConceptId,
    pub standard_term: LocalizedText,
    pub synonyms: LocalizedList,
    /// Free-form labels; not guaranteed to resolve to another mapping.
    pub related_terms: &'static [&'static str],
    pub entity_key: Option<EntityKey>,
}

impl TermMapping {
    /// Standard term followed by synonyms for one locale.
    pub fn terms(&self, locale: Locale) -> impl Iterator<Item = &'static str> + use<> {
        std::iter::once(self.standard_term.get(locale))
            .chain(self.synonyms.get(locale).iter().copied())
    }
}

/// Normalized surface form -> concept.
#[derive(Debug)]
struct TermIndex {
    by_key: HashMap<String, ConceptId>,
}

static TERM_INDEX: Lazy<TermIndex> = Lazy::new(TermIndex::build);

impl TermIndex {
    /// Standard terms are registered before synonyms and the first
    /// registration of a key wins, so a standard term always resolves to its
    /// own concept.
    fn build() -> Self {
        let mut by_key = HashMap::new();

        for mapping in &TERM_MAPPINGS {
            for locale in Locale::ALL {
                by_key
                    .entry(normalize(mapping.standard_term.get(locale)))
                    .or_insert(mapping.id);
            }
        }

        for mapping in &TERM_MAPPINGS {
            for locale in Locale::ALL {
                for synonym in mapping.synonyms.get(locale) {
                    by_key.entry(normalize(synonym)).or_insert(mapping.id);
                }
            }
        }

        debug!(
            "Built term index: {} keys over {} concepts",
            by_key.len(),
            TERM_MAPPINGS.len()
        );

        Self { by_key }
    }
}

/// All mappings in registration order.
#[must_use]
pub fn mappings() -> &'static [TermMapping] {
    &TERM_MAPPINGS
}

/// Exact lookup of an already-normalized key.
#[must_use]
pub fn lookup_normalized(key: &str) -> Option<&'static TermMapping> {
    TERM_INDEX.by_key.get(key).map(|id| id.mapping())
}

/// Number of distinct normalized keys in the index.
#[must_use]
pub fn index_len() -> usize {
    TERM_INDEX.by_key.len()
}

/// Serializable view of a mapping, for CLI and debugging output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermSummary {
    pub standard_term: String,
    pub synonyms: Vec<String>,
    pub related_terms: Vec<String>,
    pub entity_key: Option<EntityKey>,
}

impl TermSummary {
    #[must_use]
    pub fn new(mapping: &TermMapping, locale: Locale) -> Self {
        Self {
            standard_term: mapping.standard_term.get(locale).to_string(),
            synonyms: mapping
                .synonyms
                .get(locale)
                .iter()
                .map(ToString::to_string)
                .collect(),
            related_terms: mapping
                .related_terms
                .iter()
                .map(ToString::to_string)
                .collect(),
            entity_key: mapping.entity_key,
        }
    }
}
