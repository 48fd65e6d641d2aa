//! Node and edge aggregates stored as graph weights.

use std::collections::BTreeMap;

use macrograph_core::config::defaults;
use macrograph_core::{
    EdgeKey, EdgeRelation, EntityId, EvidenceEntry, NodeKind, NodeRef, Polarity, PolarityTally,
};
use serde::{Deserialize, Serialize};

use crate::ranking::PatternRanking;

/// One entity, created the first time any headline references it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: EntityId,
    pub kind: NodeKind,
    pub name: String,
    pub classification: String,
    /// Number of headlines that referenced this node.
    pub mention_count: u64,
    pub tally: PolarityTally,
}

impl NodeRecord {
    pub fn new(node: &NodeRef) -> Self {
        Self {
            id: node.id.clone(),
            kind: node.kind,
            name: node.name.clone(),
            classification: node.classification.clone(),
            mention_count: 0,
            tally: PolarityTally::default(),
        }
    }

    pub fn record(&mut self, polarity: Polarity) {
        self.mention_count += 1;
        self.tally.record(polarity);
    }

    pub fn merge(&mut self, other: &NodeRecord) {
        self.mention_count += other.mention_count;
        self.tally.merge(&other.tally);
    }

    pub fn polarity(&self) -> Polarity {
        self.tally.dominant()
    }
}

/// One (source, target, relation) edge and all evidence folded into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: EntityId,
    pub source_kind: NodeKind,
    pub target: EntityId,
    pub target_kind: NodeKind,
    pub relation: EdgeRelation,
    pub evidence_count: u64,
    pub tally: PolarityTally,
    pub pattern_distribution: BTreeMap<String, u64>,
    pub primary_pattern: String,
    /// Sorted ascending. Holds at most the policy cap when sampling.
    pub evidence: Vec<EvidenceEntry>,
}

impl EdgeRecord {
    pub fn new(source: &NodeRef, target: &NodeRef, relation: EdgeRelation) -> Self {
        Self {
            source: source.id.clone(),
            source_kind: source.kind,
            target: target.id.clone(),
            target_kind: target.kind,
            relation,
            evidence_count: 0,
            tally: PolarityTally::default(),
            pattern_distribution: BTreeMap::new(),
            primary_pattern: defaults::GENERAL_CONTEXT_PATTERN.to_string(),
            evidence: Vec::new(),
        }
    }

    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(self.source.clone(), self.target.clone(), self.relation)
    }

    pub fn polarity(&self) -> Polarity {
        self.tally.dominant()
    }

    /// Fold one supporting headline into the edge.
    pub fn record(
        &mut self,
        polarity: Polarity,
        pattern: &str,
        evidence: &EvidenceEntry,
        cap: Option<usize>,
        ranking: &PatternRanking,
    ) {
        self.evidence_count += 1;
        self.tally.record(polarity);
        *self.pattern_distribution.entry(pattern.to_string()).or_insert(0) += 1;
        self.refresh_primary(ranking);
        insert_evidence(&mut self.evidence, evidence.clone(), cap);
    }

    pub fn merge(&mut self, other: &EdgeRecord, cap: Option<usize>, ranking: &PatternRanking) {
        self.evidence_count += other.evidence_count;
        self.tally.merge(&other.tally);
        for (pattern, count) in &other.pattern_distribution {
            *self.pattern_distribution.entry(pattern.clone()).or_insert(0) += count;
        }
        self.refresh_primary(ranking);
        for entry in &other.evidence {
            insert_evidence(&mut self.evidence, entry.clone(), cap);
        }
    }

    /// First `limit` evidence titles, each cut to `chars` characters.
    pub fn evidence_titles(&self, limit: usize, chars: usize) -> Vec<String> {
        self.evidence
            .iter()
            .take(limit)
            .map(|e| e.title.chars().take(chars).collect())
            .collect()
    }

    fn refresh_primary(&mut self, ranking: &PatternRanking) {
        if let Some(primary) = ranking.primary(&self.pattern_distribution) {
            if primary != self.primary_pattern {
                self.primary_pattern = primary.to_string();
            }
        }
    }
}

/// Keep `evidence` sorted and, when capped, limited to its smallest entries.
fn insert_evidence(evidence: &mut Vec<EvidenceEntry>, entry: EvidenceEntry, cap: Option<usize>) {
    let pos = evidence.partition_point(|e| e <= &entry);
    match cap {
        Some(cap) if pos >= cap => {}
        Some(cap) => {
            evidence.insert(pos, entry);
            evidence.truncate(cap);
        }
        None => evidence.insert(pos, entry),
    }
}
