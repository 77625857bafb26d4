//! Term standardization.
//!
//! Resolution is a two-step process: an exact lookup of the normalized input
//! in the dictionary index, then a substring-containment scan over the
//! requested locale's terms. Unresolvable input is returned unchanged.

use tracing::debug;

use crate::dictionary::{self, EntityKey, TermMapping};
use crate::Locale;

/// Locale used by the locale-free helpers.
pub const DEFAULT_LOCALE: Locale = Locale::En;

/// Normalize a term for index lookups.
///
/// Lowercases, trims, and collapses every run of whitespace and hyphens into
/// a single hyphen: `"  Period -- Pain "` -> `"period-pain"`.
#[must_use]
pub fn normalize(term: &str) -> String {
    term.trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Find the mapping a term resolves to.
#[must_use]
pub fn resolve(term: &str, locale: Locale) -> Option<&'static TermMapping> {
    let key = normalize(term);
    if key.is_empty() {
        return None;
    }

    if let Some(mapping) = dictionary::lookup_normalized(&key) {
        return Some(mapping);
    }

    let mapping = containment_scan(&key, locale)?;
    debug!(
        "Resolved '{}' by containment to {:?} ({})",
        term, mapping.id, locale
    );
    Some(mapping)
}

/// First mapping with a locale term contained in `key`, or containing it.
///
/// There is no minimum length on either side, so short terms can match
/// unrelated input.
fn containment_scan(key: &str, locale: Locale) -> Option<&'static TermMapping> {
    dictionary::mappings().iter().find(|mapping| {
        mapping.terms(locale).map(normalize).any(|candidate| {
            !candidate.is_empty() && (key.contains(&candidate) || candidate.contains(key))
        })
    })
}

/// Canonical term for `term` in `locale`, or `term` itself when unknown.
#[must_use]
pub fn standardize(term: &str, locale: Locale) -> String {
    resolve(term, locale).map_or_else(
        || term.to_string(),
        |mapping| mapping.standard_term.get(locale).to_string(),
    )
}

/// `[standard_term, ...synonyms]` for the resolved mapping, or `[term]`.
#[must_use]
pub fn get_synonyms(term: &str, locale: Locale) -> Vec<String> {
    resolve(term, locale).map_or_else(
        || vec![term.to_string()],
        |mapping| mapping.terms(locale).map(ToString::to_string).collect(),
    )
}

/// Whether two terms standardize to the same English term.
#[must_use]
pub fn terms_equivalent(term_a: &str, term_b: &str) -> bool {
    standardize(term_a, DEFAULT_LOCALE) == standardize(term_b, DEFAULT_LOCALE)
}

/// Entity record key linked to the term's concept, if any.
#[must_use]
pub fn get_term_entity_key(term: &str) -> Option<EntityKey> {
    resolve(term, DEFAULT_LOCALE).and_then(|mapping| mapping.entity_key)
}

/// Related-term labels of the resolved mapping; empty when unresolved.
#[must_use]
pub fn get_related_terms(term: &str, locale: Locale) -> Vec<String> {
    resolve(term, locale)
        .map(|mapping| {
            mapping
                .related_terms
                .iter()
                .map(ToString::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConceptId;

    #[test]
    fn normalize_collapses_whitespace_and_hyphens() {
        assert_eq!(normalize("  Period -- Pain "), "period-pain");
        assert_eq!(normalize("Anti-Inflammatory\tPainkillers"), "anti-inflammatory-painkillers");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn normalize_keeps_han_text() {
        assert_eq!(normalize(" 月经痛 "), "月经痛");
    }

    #[test]
    fn exact_synonym_lookup() {
        assert_eq!(standardize("period pain", Locale::En), "Dysmenorrhea");
        assert_eq!(standardize("月经痛", Locale::Zh), "痛经");
    }

    #[test]
    fn cross_locale_lookup_returns_requested_locale() {
        assert_eq!(standardize("痛经", Locale::En), "Dysmenorrhea");
        assert_eq!(standardize("PMS", Locale::Zh), "经前期综合征");
    }

    #[test]
    fn containment_fallback() {
        // "severe-dysmenorrhea" is not a key, but contains "dysmenorrhea"
        assert_eq!(standardize("severe dysmenorrhea", Locale::En), "Dysmenorrhea");
        // input contained in a term
        assert_eq!(standardize("polycystic ovary", Locale::En), "Polycystic Ovary Syndrome");
    }

    #[test]
    fn unknown_term_is_returned_unchanged() {
        assert_eq!(
            standardize("totally-unknown-term", Locale::En),
            "totally-unknown-term"
        );
        assert_eq!(standardize("", Locale::En), "");
        assert_eq!(standardize("  ", Locale::Zh), "  ");
    }

    #[test]
    fn synonyms_start_with_standard_term() {
        let synonyms = get_synonyms("PMS", Locale::En);
        assert_eq!(synonyms[0], "Premenstrual Syndrome");
        assert!(synonyms.contains(&"PMS".to_string()));
    }

    #[test]
    fn synonyms_of_unknown_term() {
        assert_eq!(get_synonyms("xyzzy", Locale::En), vec!["xyzzy".to_string()]);
    }

    #[test]
    fn equivalence_across_languages() {
        assert!(terms_equivalent("period pain", "痛经"));
        assert!(terms_equivalent("PMDD", "Premenstrual Dysphoric Disorder"));
        assert!(!terms_equivalent("PMS", "PMDD"));
    }

    #[test]
    fn entity_keys() {
        assert_eq!(get_term_entity_key("menstrual cramps"), Some(EntityKey::Dysmenorrhea));
        assert_eq!(get_term_entity_key("menses"), None);
        assert_eq!(get_term_entity_key("xyzzy"), None);
    }

    #[test]
    fn related_terms() {
        let related = get_related_terms("PMS", Locale::En);
        assert!(related.contains(&"Premenstrual Dysphoric Disorder".to_string()));
        assert!(get_related_terms("xyzzy", Locale::En).is_empty());
    }

    #[test]
    fn resolve_reports_concept() {
        assert_eq!(
            resolve("heating pad", Locale::En).map(|m| m.id),
            Some(ConceptId::HeatTherapy)
        );
    }
}
