//! Context-aware polarity for a single asset.
//!
//! Runs after the asset's own direction is read from the text and decides
//! whether macro context turns it around.

use std::collections::BTreeSet;

use macrograph_core::{LaborStrength, Polarity};
use macrograph_lexicon::OverrideRule;

use crate::detector::AssetDirection;

/// Polarity of `asset` given its direction and context. The first matching
/// rule decides; with no match the direction stands.
pub fn asset_polarity(
    rules: &[OverrideRule],
    direction: AssetDirection,
    asset: &str,
    mechanisms: &BTreeSet<String>,
    labor: Option<LaborStrength>,
) -> Polarity {
    let base = direction.polarity;
    rules
        .iter()
        .find(|rule| rule.matches(asset, mechanisms, labor, direction.is_explicit()))
        .map_or(base, |rule| rule.apply(base))
}
