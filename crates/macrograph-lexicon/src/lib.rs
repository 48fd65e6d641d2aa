//! # macrograph-lexicon
//!
//! The domain vocabulary as data. A lexicon is parsed from TOML, validated,
//! and compiled into regex matchers once; afterwards it is immutable and
//! shared by reference across every extraction worker.

pub mod catalog;
pub mod entries;
pub mod lexicon;
pub mod loader;
pub mod phrase;
pub mod schema;

pub use catalog::{CausalPatternTemplate, PatternCatalog};
pub use entries::{
    AssetEntry, EventEntry, LaborStrengthRules, MechanismEntry, MovementBucket, OverrideAction,
    OverrideRule,
};
pub use lexicon::{Lexicon, BUILTIN_LEXICON};
pub use loader::LexiconLoader;
pub use phrase::PhraseStyle;
