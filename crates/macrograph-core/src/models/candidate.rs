//! Per-headline extraction output handed from the extraction stages to the aggregator.

use serde::{Deserialize, Serialize};

use super::entity::NodeRef;
use super::headline::EvidenceEntry;
use super::polarity::Polarity;
use super::relation::{EdgeKey, EdgeRelation};

/// A proposed edge for one headline, tagged with the headline's causal pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeCandidate {
    pub source: NodeRef,
    pub target: NodeRef,
    pub relation: EdgeRelation,
    pub polarity: Polarity,
    pub pattern: String,
}

impl EdgeCandidate {
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(self.source.id.clone(), self.target.id.clone(), self.relation)
    }
}

/// The causal-pattern template selected for a headline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPattern {
    pub name: String,
    pub priority: u8,
    /// True when no template matched and the generic fallback was used.
    pub fallback: bool,
}

/// Signal counts for one headline, kept for extraction statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalSummary {
    pub events: usize,
    pub mechanisms: usize,
    pub assets: usize,
    pub empty_text: bool,
}

/// Everything one headline contributes to the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateBatch {
    pub evidence: EvidenceEntry,
    pub polarity: Polarity,
    pub pattern: ResolvedPattern,
    pub summary: SignalSummary,
    pub candidates: Vec<EdgeCandidate>,
}

impl CandidateBatch {
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }
}
