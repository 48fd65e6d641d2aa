//! Causal pattern resolution.

use macrograph_core::config::defaults;
use macrograph_core::ResolvedPattern;
use macrograph_lexicon::{CausalPatternTemplate, PatternCatalog};

use crate::detector::DetectedSignals;

/// Picks the highest-priority matching template; earlier templates win ties.
#[derive(Debug, Clone, Copy)]
pub struct PatternResolver<'a> {
    catalog: &'a PatternCatalog,
}

impl<'a> PatternResolver<'a> {
    pub fn new(catalog: &'a PatternCatalog) -> Self {
        Self { catalog }
    }

    pub fn resolve(&self, text: &str, signals: &DetectedSignals) -> ResolvedPattern {
        let mut best: Option<&CausalPatternTemplate> = None;
        for template in self.catalog.templates() {
            if best.is_some_and(|b| template.priority <= b.priority) {
                continue;
            }
            if template.requires_movement && !signals.movement_detected() {
                continue;
            }
            if template.regex.is_match(text) {
                best = Some(template);
            }
        }

        match best {
            Some(template) => ResolvedPattern {
                name: template.name.clone(),
                priority: template.priority,
                fallback: false,
            },
            None => Self::general_context(),
        }
    }

    /// The catch-all pattern used when no template applies.
    pub fn general_context() -> ResolvedPattern {
        ResolvedPattern {
            name: defaults::GENERAL_CONTEXT_PATTERN.to_string(),
            priority: defaults::GENERAL_CONTEXT_PRIORITY,
            fallback: true,
        }
    }
}
