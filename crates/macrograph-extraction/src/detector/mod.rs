//! Signal detection for one headline: events, mechanisms, assets, direction.

pub mod direction;
pub mod movement;

use std::collections::{BTreeMap, BTreeSet};

use macrograph_core::{LaborStrength, Polarity, SignalSummary};
use macrograph_lexicon::Lexicon;

use crate::polarity_override::asset_polarity;

pub use direction::{AssetDirection, DirectionSource};

/// Everything the lexicon recognized in one headline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedSignals {
    pub events: BTreeSet<String>,
    /// Highest-priority detected event.
    pub primary_event: Option<String>,
    pub mechanisms: BTreeSet<String>,
    /// Mechanisms were inferred from events rather than matched.
    pub implied_mechanisms: bool,
    pub assets: BTreeSet<String>,
    /// Headline-level polarity.
    pub polarity: Polarity,
    /// Movement bucket that decided `polarity`, if any term matched.
    pub movement_bucket: Option<String>,
    pub labor_strength: Option<LaborStrength>,
    /// Per-asset direction read from the text, before overrides.
    pub asset_directions: BTreeMap<String, AssetDirection>,
    /// Per-asset polarity after context overrides.
    pub asset_polarity: BTreeMap<String, Polarity>,
    pub empty_text: bool,
}

impl DetectedSignals {
    pub fn empty() -> Self {
        Self {
            events: BTreeSet::new(),
            primary_event: None,
            mechanisms: BTreeSet::new(),
            implied_mechanisms: false,
            assets: BTreeSet::new(),
            polarity: Polarity::Neutral,
            movement_bucket: None,
            labor_strength: None,
            asset_directions: BTreeMap::new(),
            asset_polarity: BTreeMap::new(),
            empty_text: true,
        }
    }

    pub fn movement_detected(&self) -> bool {
        self.movement_bucket.is_some()
    }

    /// No event, mechanism, or asset was found.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.mechanisms.is_empty() && self.assets.is_empty()
    }

    /// Polarity for `asset`, falling back to the headline polarity.
    pub fn polarity_for(&self, asset: &str) -> Polarity {
        self.asset_polarity.get(asset).copied().unwrap_or(self.polarity)
    }

    pub fn summary(&self) -> SignalSummary {
        SignalSummary {
            events: self.events.len(),
            mechanisms: self.mechanisms.len(),
            assets: self.assets.len(),
            empty_text: self.empty_text,
        }
    }
}

/// Evaluates the lexicon against headline text. Holds no state of its own.
#[derive(Debug, Clone, Copy)]
pub struct SignalDetector<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> SignalDetector<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn detect(&self, text: &str) -> DetectedSignals {
        let text = text.trim();
        if text.is_empty() {
            return DetectedSignals::empty();
        }

        let mut primary: Option<(&str, u8)> = None;
        let mut events = BTreeSet::new();
        for event in self.lexicon.events().iter().filter(|e| e.matcher.is_match(text)) {
            if primary.map_or(true, |(_, p)| event.priority > p) {
                primary = Some((event.id.as_str(), event.priority));
            }
            events.insert(event.id.clone());
        }

        let mut mechanisms: BTreeSet<String> = self
            .lexicon
            .mechanisms()
            .iter()
            .filter(|m| m.is_match(text))
            .map(|m| m.id.clone())
            .collect();
        let implied_mechanisms = mechanisms.is_empty() && !events.is_empty();
        if implied_mechanisms {
            mechanisms = self
                .lexicon
                .mechanisms()
                .iter()
                .filter(|m| events.iter().any(|e| m.is_implied_by(e)))
                .map(|m| m.id.clone())
                .collect();
        }

        let assets: BTreeSet<String> = self
            .lexicon
            .assets()
            .iter()
            .filter(|a| a.matcher.is_match(text))
            .map(|a| a.id.clone())
            .collect();

        let bucket = movement::strongest_hit(self.lexicon.movement(), text);
        let polarity = bucket.map_or(Polarity::Neutral, |b| b.polarity);
        let labor_strength = self.lexicon.labor_strength().classify(text);

        let asset_directions = direction::resolve(self.lexicon, text, &assets, polarity);
        let asset_polarity = asset_directions
            .iter()
            .map(|(asset, direction)| {
                let p = asset_polarity(
                    self.lexicon.overrides(),
                    *direction,
                    asset,
                    &mechanisms,
                    labor_strength,
                );
                (asset.clone(), p)
            })
            .collect();

        DetectedSignals {
            primary_event: primary.map(|(id, _)| id.to_string()),
            implied_mechanisms: implied_mechanisms && !mechanisms.is_empty(),
            events,
            mechanisms,
            assets,
            polarity,
            movement_bucket: bucket.map(|b| b.name.clone()),
            labor_strength,
            asset_directions,
            asset_polarity,
            empty_text: false,
        }
    }
}
