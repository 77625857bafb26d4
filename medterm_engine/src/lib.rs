#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Public entry points for term standardization, inline annotation and
//! page schema generation.
//!
//! [`MedicalTermEngine`] owns its pattern tables and result caches. The free
//! functions in this crate operate on one process-wide engine built with the
//! default cache settings.

mod engine;
mod global;

pub use engine::{EngineCacheStats, MedicalTermEngine};
pub use global::{
    clear_terminology_cache, generate_medical_webpage_schema, get_cache_stats,
    get_medical_term_synonyms, get_term_entity_key, mark_medical_terms_batch,
    mark_medical_terms_in_text, standardize_medical_term, terms_equivalent,
};

pub use medterm_cache::{CacheConfig, CacheStats};
pub use medterm_core::{EngineError, EntityKey, Locale};
pub use medterm_schema::{MedicalWebPage, SchemaOptions};
