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

//! Core medical terminology: the static term dictionary, the medical entity
//! and citation tables, and the standardizer that resolves free-form input to
//! a canonical concept.

pub mod dictionary;
mod error;
mod locale;
pub mod standardize;
mod util;

pub use dictionary::{
    Citation, CitationKey, ConceptId, EntityCategory, EntityKey, LocalizedList, LocalizedText,
    MedicalCode, MedicalEntity, TermMapping,
};
pub use error::{EngineError, Result};
pub use locale::Locale;
pub use standardize::{
    get_related_terms, get_synonyms, get_term_entity_key, normalize, resolve, standardize,
    terms_equivalent,
};
pub use util::content_hash;
