//! Stable machine-readable error codes.

/// Every subsystem error maps to one of the codes below.
pub trait MacrographErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const LEXICON_PARSE_ERROR: &str = "LEXICON_PARSE_ERROR";
pub const LEXICON_INVALID: &str = "LEXICON_INVALID";
pub const LEXICON_REGEX_ERROR: &str = "LEXICON_REGEX_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const ASSEMBLY_ERROR: &str = "ASSEMBLY_ERROR";
pub const INVALID_ENTITY_ID: &str = "INVALID_ENTITY_ID";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{AssemblyError, ConfigError, LexiconError, MacrographError};

    #[test]
    fn lexicon_errors() {
        let parse = LexiconError::Parse {
            origin: "builtin".into(),
            message: "expected `]`".into(),
        };
        assert_eq!(parse.error_code(), LEXICON_PARSE_ERROR);

        let regex = LexiconError::InvalidRegex {
            section: "mechanisms".into(),
            id: "broken".into(),
            message: "unclosed group".into(),
        };
        assert_eq!(regex.error_code(), LEXICON_REGEX_ERROR);

        let id = LexiconError::InvalidId {
            section: "assets".into(),
            id: "Gold Bullion".into(),
        };
        assert_eq!(id.error_code(), LEXICON_INVALID);
    }

    #[test]
    fn config_errors() {
        let err = ConfigError::ValidationFailed {
            field: "pipeline.batch_size".into(),
            message: "must be at least 1".into(),
        };
        assert_eq!(err.error_code(), CONFIG_ERROR);
    }

    #[test]
    fn assembly_errors() {
        let err = AssemblyError::DuplicatePrefix { prefix: "mech".into() };
        assert_eq!(err.error_code(), ASSEMBLY_ERROR);
    }

    #[test]
    fn wrapped_errors_keep_their_code() {
        let lexicon: MacrographError = LexiconError::EmptySection { section: "events".into() }.into();
        assert_eq!(lexicon.error_code(), LEXICON_INVALID);

        let config: MacrographError = ConfigError::FileNotFound { path: "x.toml".into() }.into();
        assert_eq!(config.error_code(), CONFIG_ERROR);

        let assembly: MacrographError = AssemblyError::UnassignedPrefix {
            id: "foo:bar".into(),
            prefix: "foo".into(),
        }
        .into();
        assert_eq!(assembly.error_code(), ASSEMBLY_ERROR);

        let entity = MacrographError::InvalidEntityId { id: "nope".into() };
        assert_eq!(entity.error_code(), INVALID_ENTITY_ID);
    }
}
