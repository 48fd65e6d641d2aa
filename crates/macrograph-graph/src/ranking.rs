//! Catalog-order ranking of pattern names, used to break primary-pattern ties.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use macrograph_core::config::defaults;

/// Rank of every known pattern name. Unknown names rank after all known ones,
/// in lexical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternRanking {
    ranks: HashMap<String, usize>,
}

impl PatternRanking {
    /// Build from names in rank order. `general_context` is appended if absent.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ranks = HashMap::new();
        for name in names {
            let next = ranks.len();
            ranks.entry(name.into()).or_insert(next);
        }
        let next = ranks.len();
        ranks
            .entry(defaults::GENERAL_CONTEXT_PATTERN.to_string())
            .or_insert(next);
        Self { ranks }
    }

    pub fn rank(&self, name: &str) -> Option<usize> {
        self.ranks.get(name).copied()
    }

    /// Total order on names: by rank, then unknown names lexically.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match (self.rank(a), self.rank(b)) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.cmp(b),
        }
    }

    /// Most frequent pattern; equal counts go to the better-ranked name.
    pub fn primary<'a>(&self, distribution: &'a BTreeMap<String, u64>) -> Option<&'a str> {
        distribution
            .iter()
            .max_by(|(a, ca), (b, cb)| ca.cmp(cb).then_with(|| self.compare(b, a)))
            .map(|(name, _)| name.as_str())
    }
}

impl Default for PatternRanking {
    fn default() -> Self {
        Self::from_names(std::iter::empty::<String>())
    }
}
