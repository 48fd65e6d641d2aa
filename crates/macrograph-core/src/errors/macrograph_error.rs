use super::error_code::{self, MacrographErrorCode};
use super::{AssemblyError, ConfigError, LexiconError};

/// Top-level error. Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum MacrographError {
    #[error("lexicon error: {0}")]
    Lexicon(#[from] LexiconError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("assembly error: {0}")]
    Assembly(#[from] AssemblyError),

    #[error("invalid entity id '{id}': expected <prefix>:<slug>")]
    InvalidEntityId { id: String },
}

impl MacrographErrorCode for MacrographError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Lexicon(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Assembly(e) => e.error_code(),
            Self::InvalidEntityId { .. } => error_code::INVALID_ENTITY_ID,
        }
    }
}

/// Convenience alias.
pub type MacrographResult<T> = Result<T, MacrographError>;
