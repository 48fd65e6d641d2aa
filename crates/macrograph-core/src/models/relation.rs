//! The four edge relations and the aggregation key built from them.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::entity::EntityId;
use super::polarity::Polarity;

/// Edge relation types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EdgeRelation {
    /// Event activates a transmission mechanism.
    Triggers,
    PositivelyImpacts,
    NegativelyImpacts,
    NeutrallyImpacts,
}

impl EdgeRelation {
    pub const ALL: [EdgeRelation; 4] = [
        Self::Triggers,
        Self::PositivelyImpacts,
        Self::NegativelyImpacts,
        Self::NeutrallyImpacts,
    ];

    /// The impact relation carrying `polarity`.
    pub fn impact(polarity: Polarity) -> Self {
        match polarity {
            Polarity::Positive => Self::PositivelyImpacts,
            Polarity::Negative => Self::NegativelyImpacts,
            Polarity::Neutral => Self::NeutrallyImpacts,
        }
    }

    pub fn is_impact(&self) -> bool {
        !matches!(self, Self::Triggers)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Triggers => "TRIGGERS",
            Self::PositivelyImpacts => "POSITIVELY_IMPACTS",
            Self::NegativelyImpacts => "NEGATIVELY_IMPACTS",
            Self::NeutrallyImpacts => "NEUTRALLY_IMPACTS",
        }
    }

    pub fn from_str_name(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == s)
    }
}

impl fmt::Display for EdgeRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregation key of an edge. The derived ordering (source, target,
/// relation) is the canonical edge order of every snapshot.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeKey {
    pub source: EntityId,
    pub target: EntityId,
    pub relation: EdgeRelation,
}

impl EdgeKey {
    pub fn new(source: EntityId, target: EntityId, relation: EdgeRelation) -> Self {
        Self {
            source,
            target,
            relation,
        }
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -[{}]-> {}", self.source, self.relation, self.target)
    }
}
