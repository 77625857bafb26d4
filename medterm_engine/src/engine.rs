use medterm_annotation::Annotator;
use medterm_cache::{CacheConfig, CacheKey, CacheStats, ResultCache};
use medterm_core::{EntityKey, Locale, Result};
use medterm_schema::{CreativeWork, MedicalWebPage, SchemaOptions, generate};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

const ANNOTATION_NAMESPACE: &str = "annotate";
const SCHEMA_NAMESPACE: &str = "schema";

/// Counters for both result caches plus the number of built pattern tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EngineCacheStats {
    pub annotation: CacheStats,
    pub schema: CacheStats,
    pub compiled_locales: usize,
}

/// Terminology engine with its own pattern tables and result caches.
pub struct MedicalTermEngine {
    annotator: Annotator,
    annotation_cache: ResultCache<String>,
    schema_cache: ResultCache<MedicalWebPage>,
}

impl Default for MedicalTermEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl MedicalTermEngine {
    #[must_use]
    pub fn new(annotation: CacheConfig, schema: CacheConfig) -> Self {
        debug!(
            "Creating engine (annotation cache: {:?}/{}, schema cache: {:?}/{})",
            annotation.ttl, annotation.max_entries, schema.ttl, schema.max_entries
        );
        Self {
            annotator: Annotator::new(),
            annotation_cache: ResultCache::new("annotation", annotation),
            schema_cache: ResultCache::new("schema", schema),
        }
    }

    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(
            CacheConfig::annotation_defaults(),
            CacheConfig::schema_defaults(),
        )
    }
}

/// Stateless dictionary lookups.
#[allow(clippy::unused_self)]
impl MedicalTermEngine {
    #[must_use]
    pub fn standardize_medical_term(&self, term: &str, locale: Locale) -> String {
        medterm_core::standardize(term, locale)
    }

    #[must_use]
    pub fn get_medical_term_synonyms(&self, term: &str, locale: Locale) -> Vec<String> {
        medterm_core::get_synonyms(term, locale)
    }

    #[must_use]
    pub fn terms_equivalent(&self, term_a: &str, term_b: &str) -> bool {
        medterm_core::terms_equivalent(term_a, term_b)
    }

    #[must_use]
    pub fn get_term_entity_key(&self, term: &str) -> Option<EntityKey> {
        medterm_core::get_term_entity_key(term)
    }
}

impl MedicalTermEngine {
    /// Wrap every recognized term in `text`, reusing a cached result when the
    /// same text was annotated for `locale` within the cache TTL.
    #[must_use]
    pub fn mark_medical_terms_in_text(&self, text: &str, locale: Locale) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }

        let compute = || self.annotator.annotate(text, locale);
        match CacheKey::derive(ANNOTATION_NAMESPACE, &(locale, text)) {
            Ok(key) => self.annotation_cache.get_or_compute(&key, compute),
            Err(e) => {
                warn!("Annotation cache bypassed: {}", e);
                compute()
            }
        }
    }

    /// Annotate several texts in parallel; output order follows input order.
    #[must_use]
    pub fn mark_medical_terms_batch<S>(&self, texts: &[S], locale: Locale) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.mark_medical_terms_in_text(text.as_ref(), locale))
            .collect()
    }

    /// Page description for `options`. Citation order does not affect
    /// caching but the output lists citations as `options` does; failures
    /// are never cached.
    pub fn generate_medical_webpage_schema(&self, options: &SchemaOptions) -> Result<MedicalWebPage> {
        let material = options.key_material();
        let page = match CacheKey::derive(SCHEMA_NAMESPACE, &material) {
            Ok(key) => self
                .schema_cache
                .try_get_or_compute(&key, || generate(&material))?,
            Err(e) => {
                warn!("Schema cache bypassed: {}", e);
                return generate(options);
            }
        };
        Ok(in_caller_order(page, options))
    }

    /// Empty both result caches. Pattern tables are kept.
    pub fn clear_terminology_cache(&self) {
        self.annotation_cache.clear();
        self.schema_cache.clear();
        debug!("Cleared terminology result caches");
    }

    #[must_use]
    pub fn get_cache_stats(&self) -> EngineCacheStats {
        EngineCacheStats {
            annotation: self.annotation_cache.stats(),
            schema: self.schema_cache.stats(),
            compiled_locales: self.annotator.patterns().compiled_locales(),
        }
    }
}

/// `page` lists citations in `options.key_material()` order; put them back
/// in the order `options` gives them.
fn in_caller_order(mut page: MedicalWebPage, options: &SchemaOptions) -> MedicalWebPage {
    // (citation, caller index) sorted matches the stable sort of the key
    let mut sorted: Vec<(&str, usize)> = options
        .citations
        .iter()
        .map(String::as_str)
        .zip(0..)
        .collect();
    sorted.sort_unstable();

    let mut ordered: Vec<Option<CreativeWork>> = (0..sorted.len()).map(|_| None).collect();
    for (work, (_, caller_index)) in page.citation.drain(..).zip(sorted) {
        ordered[caller_index] = Some(work);
    }
    page.citation = ordered.into_iter().flatten().collect();
    page
}
