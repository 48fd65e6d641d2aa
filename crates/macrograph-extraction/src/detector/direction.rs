//! Per-asset direction.
//!
//! "Dollar falls but stocks rally" moves two assets in opposite directions.
//! The headline polarity still drives TRIGGERS edges; impact edges take the
//! direction resolved here, before any override rule runs.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::Range;

use macrograph_core::Polarity;
use macrograph_lexicon::Lexicon;

use super::movement::{self, MovementHit};

/// Where an asset's direction came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionSource {
    /// A movement term in a clause that mentions the asset.
    Clause,
    /// The nearest movement term outside the asset's clauses.
    Proximity,
    /// No movement term could be tied to the asset.
    Headline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetDirection {
    pub polarity: Polarity,
    pub source: DirectionSource,
}

impl AssetDirection {
    pub fn new(polarity: Polarity, source: DirectionSource) -> Self {
        Self { polarity, source }
    }

    /// The headline states this asset's own move.
    pub fn is_explicit(&self) -> bool {
        self.source == DirectionSource::Clause
    }
}

/// Byte ranges of the clauses in `text`. Fragments of three characters or
/// fewer are dropped; if nothing is left the whole text is one clause.
pub fn clauses(lexicon: &Lexicon, text: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut start = 0;
    if let Some(splitter) = lexicon.clause_splitter() {
        for separator in splitter.find_iter(text) {
            ranges.push(start..separator.start());
            start = separator.end();
        }
    }
    ranges.push(start..text.len());
    ranges.retain(|r| text[r.clone()].trim().chars().count() > 3);
    if ranges.is_empty() {
        ranges.push(0..text.len());
    }
    ranges
}

/// Direction for every detected asset.
///
/// In each clause mentioning the asset, a lone asset takes the strongest
/// movement term and a shared clause takes the nearest one. The last clause
/// with a non-neutral reading wins. Assets whose clauses carry no movement
/// fall back to the nearest term anywhere, then to `headline`.
pub fn resolve(
    lexicon: &Lexicon,
    text: &str,
    assets: &BTreeSet<String>,
    headline: Polarity,
) -> BTreeMap<String, AssetDirection> {
    if assets.is_empty() {
        return BTreeMap::new();
    }

    let hits = movement::hits(lexicon.movement(), text);
    let mentions: Vec<(&str, Range<usize>)> = lexicon
        .assets()
        .iter()
        .filter(|a| assets.contains(&a.id))
        .flat_map(|a| a.matcher.find_iter(text).map(move |m| (a.id.as_str(), m.range())))
        .collect();
    let clauses = clauses(lexicon, text);

    assets
        .iter()
        .map(|asset| {
            let own: Vec<&Range<usize>> = mentions
                .iter()
                .filter(|(id, _)| *id == asset.as_str())
                .map(|(_, r)| r)
                .collect();
            let direction = from_clauses(asset, &clauses, &mentions, &hits)
                .map(|p| AssetDirection::new(p, DirectionSource::Clause))
                .or_else(|| {
                    nearest(&own, hits.iter())
                        .map(|h| AssetDirection::new(h.polarity, DirectionSource::Proximity))
                })
                .unwrap_or(AssetDirection::new(headline, DirectionSource::Headline));
            (asset.clone(), direction)
        })
        .collect()
}

fn from_clauses(
    asset: &str,
    clauses: &[Range<usize>],
    mentions: &[(&str, Range<usize>)],
    hits: &[MovementHit],
) -> Option<Polarity> {
    let mut found = None;
    for clause in clauses {
        let own: Vec<&Range<usize>> = mentions
            .iter()
            .filter(|(id, r)| *id == asset && within(r, clause))
            .map(|(_, r)| r)
            .collect();
        if own.is_empty() {
            continue;
        }

        let local = hits.iter().filter(|h| within(&h.span, clause));
        let alone = mentions
            .iter()
            .filter(|(_, r)| within(r, clause))
            .all(|(id, _)| *id == asset);
        let hit = if alone {
            local.min_by_key(|h| h.rank)
        } else {
            nearest(&own, local)
        };

        match hit.map(|h| h.polarity) {
            Some(Polarity::Neutral) => found = found.or(Some(Polarity::Neutral)),
            Some(polarity) => found = Some(polarity),
            None => {}
        }
    }
    found
}

/// Movement term closest to any of `mentions`. Distances are measured
/// between span midpoints; a term after the mention counts as slightly
/// closer than one the same distance before it.
fn nearest<'h>(
    mentions: &[&Range<usize>],
    hits: impl Iterator<Item = &'h MovementHit>,
) -> Option<&'h MovementHit> {
    let mut best: Option<(usize, &MovementHit)> = None;
    for hit in hits {
        let hit_mid = hit.span.start + hit.span.end;
        for mention in mentions {
            let mention_mid = mention.start + mention.end;
            let weight = if hit_mid > mention_mid { 9 } else { 10 };
            let score = mention_mid.abs_diff(hit_mid) * weight;
            if best.map_or(true, |(s, _)| score < s) {
                best = Some((score, hit));
            }
        }
    }
    best.map(|(_, hit)| hit)
}

fn within(span: &Range<usize>, clause: &Range<usize>) -> bool {
    span.start >= clause.start && span.end <= clause.end
}
