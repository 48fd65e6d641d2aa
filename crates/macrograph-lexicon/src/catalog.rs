//! Causal-pattern catalog: ordered, prioritized linguistic templates.

use macrograph_core::config::defaults;
use regex::Regex;

/// A template such as "asset moves on/after event".
#[derive(Debug, Clone)]
pub struct CausalPatternTemplate {
    pub name: String,
    pub priority: u8,
    /// Only eligible when the headline contains a movement term.
    pub requires_movement: bool,
    pub regex: Regex,
}

/// Templates in declaration order. Declaration order breaks priority ties.
#[derive(Debug, Clone, Default)]
pub struct PatternCatalog {
    templates: Vec<CausalPatternTemplate>,
}

impl PatternCatalog {
    pub fn new(templates: Vec<CausalPatternTemplate>) -> Self {
        Self { templates }
    }

    pub fn templates(&self) -> &[CausalPatternTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&CausalPatternTemplate> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// Pattern names in rank order, the fallback last.
    pub fn ranked_names(&self) -> Vec<String> {
        self.templates
            .iter()
            .map(|t| t.name.clone())
            .chain(std::iter::once(defaults::GENERAL_CONTEXT_PATTERN.to_string()))
            .collect()
    }
}
