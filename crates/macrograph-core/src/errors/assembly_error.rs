//! Knowledge graph assembly errors.

use super::error_code::{self, MacrographErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum AssemblyError {
    #[error("no layer rule covers node '{id}' (prefix '{prefix}')")]
    UnassignedPrefix { id: String, prefix: String },

    #[error("duplicate layer rule for prefix '{prefix}'")]
    DuplicatePrefix { prefix: String },
}

impl MacrographErrorCode for AssemblyError {
    fn error_code(&self) -> &'static str {
        error_code::ASSEMBLY_ERROR
    }
}
