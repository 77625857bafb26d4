//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input, dispatched
//! statically from `main`.

use medterm_config::Config;
use medterm_engine::MedicalTermEngine;
use tracing::debug;

mod annotate;
mod init;
mod schema;
mod stats;
mod terms;
mod version;

pub use annotate::{AnnotateInput, AnnotateStrategy};
pub use init::InitStrategy;
pub use schema::{SchemaInput, SchemaStrategy};
pub use stats::StatsStrategy;
pub use terms::{
    EquivalentInput, EquivalentStrategy, StandardizeInput, StandardizeStrategy, SynonymsStrategy,
    TermInput,
};
pub use version::VersionStrategy;

/// Loaded settings and the engine they configure, built once per run and
/// handed to whichever command runs.
pub struct Context {
    pub config: Config,
    pub engine: MedicalTermEngine,
}

impl Context {
    /// Engine sized by the cache settings in `config`.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let annotation = config.cache.annotation.cache_config();
        let schema = config.cache.schema.cache_config();
        debug!(
            "Annotation cache: ttl={:?} max={}; schema cache: ttl={:?} max={}",
            annotation.ttl, annotation.max_entries, schema.ttl, schema.max_entries
        );
        Self {
            config,
            engine: MedicalTermEngine::new(annotation, schema),
        }
    }
}

/// Core trait defining the contract for all command strategies.
///
/// # Design Principles
/// - **Static dispatch**: All calls are monomorphized at compile time
/// - **Type safety**: Each strategy defines its own input type via associated type
///
/// # Example
/// ```ignore
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
