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

//! Bounded, time-expiring memo store.
//!
//! A [`ResultCache`] remembers the output of a deterministic computation
//! under a [`CacheKey`] derived from the computation's inputs. Entries expire
//! a fixed time after insertion and the cache never holds more than its
//! configured number of entries; when full, the oldest insertions go first.

mod config;
mod key;
mod store;

pub use config::CacheConfig;
pub use key::{CacheError, CacheKey};
pub use store::{CacheStats, ResultCache};
