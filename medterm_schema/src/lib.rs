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

//! schema.org `MedicalWebPage` descriptions built from the entity and
//! citation tables.

pub mod generator;
pub mod page;

pub use generator::{DEFAULT_REVIEWER, SchemaOptions, generate};
pub use page::{
    CreativeWork, MedicalAudience, MedicalCodeBlock, MedicalEntityBlock, MedicalWebPage,
    Organization, SCHEMA_CONTEXT,
};
