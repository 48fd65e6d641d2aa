//! Error handling for macrograph.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod assembly_error;
pub mod config_error;
pub mod error_code;
pub mod lexicon_error;
pub mod macrograph_error;

pub use assembly_error::AssemblyError;
pub use config_error::ConfigError;
pub use error_code::MacrographErrorCode;
pub use lexicon_error::LexiconError;
pub use macrograph_error::{MacrographError, MacrographResult};
