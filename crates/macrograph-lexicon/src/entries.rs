//! Compiled lexicon entries.

use std::collections::BTreeSet;

use macrograph_core::{LaborStrength, Polarity};
use regex::Regex;

/// A macro event class, e.g. `rate_cut`.
#[derive(Debug, Clone)]
pub struct EventEntry {
    pub id: String,
    pub name: String,
    /// Event class, e.g. `MonetaryPolicy`.
    pub class: String,
    pub priority: u8,
    pub keywords: Vec<String>,
    pub matcher: Regex,
}

/// A transmission mechanism. Matches when any of its patterns matches.
#[derive(Debug, Clone)]
pub struct MechanismEntry {
    pub id: String,
    pub name: String,
    pub mechanism_type: String,
    pub patterns: Vec<Regex>,
    pub implied_by: Vec<String>,
}

impl MechanismEntry {
    pub fn is_match(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(text))
    }

    pub fn is_implied_by(&self, event_id: &str) -> bool {
        self.implied_by.iter().any(|e| e == event_id)
    }
}

#[derive(Debug, Clone)]
pub struct AssetEntry {
    pub id: String,
    pub name: String,
    /// Asset class, e.g. `Currency`.
    pub class: String,
    pub aliases: Vec<String>,
    pub matcher: Regex,
}

/// One movement vocabulary bucket, e.g. `strong_positive`.
#[derive(Debug, Clone)]
pub struct MovementBucket {
    pub name: String,
    pub polarity: Polarity,
    pub strength: u8,
    pub terms: Vec<String>,
    pub matcher: Regex,
}

/// Indicators for reading labor-market strength. Checked strong, weak, mixed.
#[derive(Debug, Clone, Default)]
pub struct LaborStrengthRules {
    pub strong: Vec<Regex>,
    pub weak: Vec<Regex>,
    pub mixed: Vec<Regex>,
}

impl LaborStrengthRules {
    pub fn classify(&self, text: &str) -> Option<LaborStrength> {
        [
            (LaborStrength::Strong, &self.strong),
            (LaborStrength::Weak, &self.weak),
            (LaborStrength::Mixed, &self.mixed),
        ]
        .into_iter()
        .find(|(_, rules)| rules.iter().any(|r| r.is_match(text)))
        .map(|(strength, _)| strength)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideAction {
    Set(Polarity),
    Invert,
}

/// Asset-specific polarity rule. Applies when the asset is listed and every
/// present condition holds.
#[derive(Debug, Clone)]
pub struct OverrideRule {
    pub name: String,
    pub assets: BTreeSet<String>,
    pub labor_strength: Option<LaborStrength>,
    pub mechanisms_any: BTreeSet<String>,
    /// Only applies to directions the asset inherited from elsewhere in the headline.
    pub unless_explicit: bool,
    pub action: OverrideAction,
}

impl OverrideRule {
    pub fn matches(
        &self,
        asset: &str,
        mechanisms: &BTreeSet<String>,
        labor: Option<LaborStrength>,
        explicit: bool,
    ) -> bool {
        if !self.assets.contains(asset) || (self.unless_explicit && explicit) {
            return false;
        }
        if let Some(required) = self.labor_strength {
            if labor != Some(required) {
                return false;
            }
        }
        self.mechanisms_any.is_empty() || !self.mechanisms_any.is_disjoint(mechanisms)
    }

    pub fn apply(&self, base: Polarity) -> Polarity {
        match self.action {
            OverrideAction::Set(p) => p,
            OverrideAction::Invert => base.inverted(),
        }
    }
}
