//! The immutable, compiled lexicon.

use std::collections::HashMap;
use std::path::Path;

use macrograph_core::errors::LexiconError;
use regex::Regex;

use crate::catalog::PatternCatalog;
use crate::entries::{
    AssetEntry, EventEntry, LaborStrengthRules, MechanismEntry, MovementBucket, OverrideRule,
};
use crate::loader::LexiconLoader;

/// Built-in financial-news lexicon.
pub const BUILTIN_LEXICON: &str = include_str!("../data/financial.toml");

/// Every vocabulary the extraction stages consult. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct Lexicon {
    pub(crate) version: String,
    pub(crate) events: Vec<EventEntry>,
    pub(crate) mechanisms: Vec<MechanismEntry>,
    pub(crate) assets: Vec<AssetEntry>,
    /// Sorted by descending strength, declaration order within a strength.
    pub(crate) movement: Vec<MovementBucket>,
    pub(crate) labor_strength: LaborStrengthRules,
    pub(crate) overrides: Vec<OverrideRule>,
    /// `None` when the lexicon declares no separators.
    pub(crate) clause_splitter: Option<Regex>,
    pub(crate) catalog: PatternCatalog,
    pub(crate) event_index: HashMap<String, usize>,
    pub(crate) mechanism_index: HashMap<String, usize>,
    pub(crate) asset_index: HashMap<String, usize>,
}

impl Lexicon {
    /// Compile the built-in financial lexicon.
    pub fn builtin() -> Result<Self, LexiconError> {
        LexiconLoader::load_from_str(BUILTIN_LEXICON)
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, LexiconError> {
        LexiconLoader::load_from_str(toml_str)
    }

    pub fn from_file(path: &Path) -> Result<Self, LexiconError> {
        LexiconLoader::load_from_file(path)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn events(&self) -> &[EventEntry] {
        &self.events
    }

    pub fn mechanisms(&self) -> &[MechanismEntry] {
        &self.mechanisms
    }

    pub fn assets(&self) -> &[AssetEntry] {
        &self.assets
    }

    pub fn movement(&self) -> &[MovementBucket] {
        &self.movement
    }

    pub fn labor_strength(&self) -> &LaborStrengthRules {
        &self.labor_strength
    }

    pub fn overrides(&self) -> &[OverrideRule] {
        &self.overrides
    }

    pub fn clause_splitter(&self) -> Option<&Regex> {
        self.clause_splitter.as_ref()
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    pub fn event(&self, id: &str) -> Option<&EventEntry> {
        self.event_index.get(id).map(|&i| &self.events[i])
    }

    pub fn mechanism(&self, id: &str) -> Option<&MechanismEntry> {
        self.mechanism_index.get(id).map(|&i| &self.mechanisms[i])
    }

    pub fn asset(&self, id: &str) -> Option<&AssetEntry> {
        self.asset_index.get(id).map(|&i| &self.assets[i])
    }
}
