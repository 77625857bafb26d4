use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

/// Lookup failures against the compiled-in tables.
///
/// Unresolvable terms and unmatched text are never errors; these variants
/// only surface when a caller names a key that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("Unknown medical entity key: {0}")]
    UnknownEntity(String),

    #[error("Unknown citation key: {0}")]
    UnknownCitation(String),
}
