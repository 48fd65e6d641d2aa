//! The graph aggregator: the only state that spans headlines.

use std::collections::{BTreeMap, HashMap};

use macrograph_core::config::EvidencePolicy;
use macrograph_core::{CandidateBatch, EdgeKey, EntityId, NodeRef, Polarity};
use tracing::debug;

use crate::graph::{EdgeRecord, IndexedGraph, NodeRecord};
use crate::ranking::PatternRanking;
use crate::snapshot::KnowledgeGraph;
use crate::stats::{ExtractionStats, ProvenanceRecord};

/// Folds candidate batches into one deduplicated graph.
///
/// Ingestion is commutative: every stored quantity is a count, a sum, or a
/// canonical selection, so any ingestion order (or any split into merged
/// aggregators) yields the same snapshot.
#[derive(Debug, Clone)]
pub struct GraphAggregator {
    graph: IndexedGraph,
    provenance: HashMap<EntityId, ProvenanceRecord>,
    stats: ExtractionStats,
    ranking: PatternRanking,
    evidence: EvidencePolicy,
}

impl GraphAggregator {
    pub fn new(ranking: PatternRanking, evidence: EvidencePolicy) -> Self {
        Self {
            graph: IndexedGraph::new(),
            provenance: HashMap::new(),
            stats: ExtractionStats::default(),
            ranking,
            evidence,
        }
    }

    /// Fold one headline's batch into the graph.
    pub fn ingest(&mut self, batch: &CandidateBatch) {
        self.stats.record(batch);
        if batch.is_empty() {
            return;
        }

        let cap = self.evidence.cap();
        let mut touched: BTreeMap<&EntityId, (&NodeRef, Polarity)> = BTreeMap::new();
        for candidate in &batch.candidates {
            touched
                .entry(&candidate.source.id)
                .or_insert((&candidate.source, batch.polarity));
            touched.insert(&candidate.target.id, (&candidate.target, candidate.polarity));

            let idx = self
                .graph
                .ensure_edge(&candidate.source, &candidate.target, candidate.relation);
            if let Some(edge) = self.graph.graph.edge_weight_mut(idx) {
                edge.record(
                    candidate.polarity,
                    &candidate.pattern,
                    &batch.evidence,
                    cap,
                    &self.ranking,
                );
            }
        }

        // Once per headline per node.
        for (node, polarity) in touched.into_values() {
            let idx = self.graph.ensure_node(node);
            if let Some(record) = self.graph.graph.node_weight_mut(idx) {
                record.record(polarity);
            }
        }

        if let Some(publisher) = batch.evidence.source.as_deref() {
            if let Some(fresh) = ProvenanceRecord::for_publisher(publisher) {
                self.provenance
                    .entry(fresh.id.clone())
                    .or_insert(fresh)
                    .record(batch.evidence.date);
            }
        }

        debug!(
            candidates = batch.len(),
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            "batch ingested"
        );
    }

    pub fn ingest_all<'a>(&mut self, batches: impl IntoIterator<Item = &'a CandidateBatch>) {
        for batch in batches {
            self.ingest(batch);
        }
    }

    /// Absorb another aggregator built over a disjoint set of headlines.
    pub fn merge(&mut self, other: GraphAggregator) {
        let cap = self.evidence.cap();
        for node in other.graph.nodes() {
            match self.graph.node_mut(&node.id) {
                Some(existing) => existing.merge(node),
                None => {
                    let idx = self.graph.ensure_node(&node_ref(node));
                    if let Some(record) = self.graph.graph.node_weight_mut(idx) {
                        record.merge(node);
                    }
                }
            }
        }

        for edge in other.graph.edges() {
            let key = edge.key();
            if self.graph.get_edge(&key).is_none() {
                let (source, target) = match (other.graph.node(&edge.source), other.graph.node(&edge.target)) {
                    (Some(s), Some(t)) => (node_ref(s), node_ref(t)),
                    _ => continue,
                };
                self.graph.ensure_edge(&source, &target, edge.relation);
            }
            if let Some(existing) = self.graph.edge_mut(&key) {
                existing.merge(edge, cap, &self.ranking);
            }
        }

        for (id, record) in other.provenance {
            match self.provenance.get_mut(&id) {
                Some(existing) => existing.merge(&record),
                None => {
                    self.provenance.insert(id, record);
                }
            }
        }

        self.stats.merge(&other.stats);
    }

    pub fn node(&self, id: &EntityId) -> Option<&NodeRecord> {
        self.graph.node(id)
    }

    pub fn edge(&self, key: &EdgeKey) -> Option<&EdgeRecord> {
        self.graph.edge(key)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn stats(&self) -> &ExtractionStats {
        &self.stats
    }

    pub fn ranking(&self) -> &PatternRanking {
        &self.ranking
    }

    pub fn evidence_policy(&self) -> EvidencePolicy {
        self.evidence
    }

    /// Owned, sorted copy of the current state.
    pub fn snapshot(&self) -> KnowledgeGraph {
        KnowledgeGraph::from_parts(
            self.graph.nodes().cloned().collect(),
            self.graph.edges().cloned().collect(),
            self.provenance.values().cloned().collect(),
            self.stats,
        )
    }
}

impl Default for GraphAggregator {
    fn default() -> Self {
        Self::new(PatternRanking::default(), EvidencePolicy::default())
    }
}

fn node_ref(node: &NodeRecord) -> NodeRef {
    NodeRef {
        id: node.id.clone(),
        kind: node.kind,
        name: node.name.clone(),
        classification: node.classification.clone(),
    }
}
