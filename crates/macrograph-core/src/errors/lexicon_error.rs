//! Lexicon load and validation errors. All of them are fatal at startup.

use super::error_code::{self, MacrographErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("failed to read lexicon {path}: {message}")]
    Io { path: String, message: String },

    #[error("lexicon parse error in {origin}: {message}")]
    Parse { origin: String, message: String },

    #[error("lexicon section '{section}' is empty")]
    EmptySection { section: String },

    #[error("entry '{id}' in section '{section}' has no terms")]
    EmptyEntry { section: String, id: String },

    #[error("id '{id}' in section '{section}' is not a slug (lowercase alphanumerics joined by '_')")]
    InvalidId { section: String, id: String },

    #[error("duplicate id '{id}' in section '{section}'")]
    DuplicateId { section: String, id: String },

    #[error("invalid regex in {section} entry '{id}': {message}")]
    InvalidRegex {
        section: String,
        id: String,
        message: String,
    },

    #[error("{section} entry '{id}' references unknown id '{reference}'")]
    UnknownReference {
        section: String,
        id: String,
        reference: String,
    },

    #[error("invalid override rule '{name}': {reason}")]
    InvalidOverride { name: String, reason: String },
}

impl MacrographErrorCode for LexiconError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } | Self::Parse { .. } => error_code::LEXICON_PARSE_ERROR,
            Self::InvalidRegex { .. } => error_code::LEXICON_REGEX_ERROR,
            _ => error_code::LEXICON_INVALID,
        }
    }
}
