//! Free functions backed by one process-wide engine.

use medterm_core::{EntityKey, Locale, Result};
use medterm_schema::{MedicalWebPage, SchemaOptions};
use once_cell::sync::Lazy;

use crate::engine::{EngineCacheStats, MedicalTermEngine};

static DEFAULT_ENGINE: Lazy<MedicalTermEngine> = Lazy::new(MedicalTermEngine::with_defaults);

#[must_use]
pub fn standardize_medical_term(term: &str, locale: Locale) -> String {
    DEFAULT_ENGINE.standardize_medical_term(term, locale)
}

#[must_use]
pub fn get_medical_term_synonyms(term: &str, locale: Locale) -> Vec<String> {
    DEFAULT_ENGINE.get_medical_term_synonyms(term, locale)
}

#[must_use]
pub fn terms_equivalent(term_a: &str, term_b: &str) -> bool {
    DEFAULT_ENGINE.terms_equivalent(term_a, term_b)
}

#[must_use]
pub fn get_term_entity_key(term: &str) -> Option<EntityKey> {
    DEFAULT_ENGINE.get_term_entity_key(term)
}

#[must_use]
pub fn mark_medical_terms_in_text(text: &str, locale: Locale) -> String {
    DEFAULT_ENGINE.mark_medical_terms_in_text(text, locale)
}

#[must_use]
pub fn mark_medical_terms_batch<S>(texts: &[S], locale: Locale) -> Vec<String>
where
    S: AsRef<str> + Sync,
{
    DEFAULT_ENGINE.mark_medical_terms_batch(texts, locale)
}

pub fn generate_medical_webpage_schema(options: &SchemaOptions) -> Result<MedicalWebPage> {
    DEFAULT_ENGINE.generate_medical_webpage_schema(options)
}

pub fn clear_terminology_cache() {
    DEFAULT_ENGINE.clear_terminology_cache();
}

#[must_use]
pub fn get_cache_stats() -> EngineCacheStats {
    DEFAULT_ENGINE.get_cache_stats()
}
