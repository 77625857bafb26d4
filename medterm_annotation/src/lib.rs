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

//! Inline annotation of medical terms in free text.
//!
//! # Key Features
//! - Per-locale pattern tables compiled once and reused for every call
//! - Longest term wins when candidate matches overlap
//! - Matches never split a Latin word; Han text needs no spacing
//! - Annotated output strips back to the exact input

pub mod annotator;
pub mod patterns;

pub use annotator::{
    AnnotationMatch, Annotator, annotate, find_matches, restore, strip_annotations,
};
pub use patterns::{CompiledPatternEntry, PatternCache};
