//! Headline-level direction from the movement vocabulary.

use std::ops::Range;

use macrograph_core::Polarity;
use macrograph_lexicon::MovementBucket;

/// One movement term found in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementHit {
    pub span: Range<usize>,
    pub polarity: Polarity,
    /// Index of the bucket in evaluation order; lower is stronger.
    pub rank: usize,
}

/// First bucket with a hit. `buckets` must already be in evaluation order
/// (strongest first), which the lexicon guarantees.
pub fn strongest_hit<'a>(buckets: &'a [MovementBucket], text: &str) -> Option<&'a MovementBucket> {
    buckets.iter().find(|b| b.matcher.is_match(text))
}

/// Every movement term in `text`, ordered by position, then rank.
pub fn hits(buckets: &[MovementBucket], text: &str) -> Vec<MovementHit> {
    let mut hits: Vec<MovementHit> = buckets
        .iter()
        .enumerate()
        .flat_map(|(rank, bucket)| {
            bucket.matcher.find_iter(text).map(move |m| MovementHit {
                span: m.range(),
                polarity: bucket.polarity,
                rank,
            })
        })
        .collect();
    hits.sort_by_key(|h| (h.span.start, h.rank));
    hits
}
