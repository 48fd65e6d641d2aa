//! Immutable knowledge-graph snapshot and its flattened edge view.

use macrograph_core::config::defaults;
use macrograph_core::{EdgeKey, EdgeRelation, EntityId, Polarity};
use serde::{Deserialize, Serialize};

use crate::graph::{EdgeRecord, NodeRecord};
use crate::stats::{ExtractionStats, ProvenanceRecord};

/// An edge with its run-stable id (`edge:e1`, `edge:e2`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEdge {
    pub id: String,
    #[serde(flatten)]
    pub record: EdgeRecord,
}

/// The complete graph after a run. Nodes sorted by id, edges by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeGraph {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<KnowledgeEdge>,
    pub provenance: Vec<ProvenanceRecord>,
    pub stats: ExtractionStats,
}

/// One row of the flattened edge list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRow {
    pub source: String,
    pub source_type: String,
    pub target: String,
    pub target_type: String,
    pub relation: EdgeRelation,
    pub polarity: Polarity,
    pub evidence_count: u64,
    pub primary_pattern: String,
    pub evidence_titles: String,
}

impl KnowledgeGraph {
    pub(crate) fn from_parts(
        mut nodes: Vec<NodeRecord>,
        mut edges: Vec<EdgeRecord>,
        mut provenance: Vec<ProvenanceRecord>,
        stats: ExtractionStats,
    ) -> Self {
        nodes.sort_by(|a, b| a.id.cmp(&b.id));
        edges.sort_by_cached_key(EdgeRecord::key);
        provenance.sort_by(|a, b| a.id.cmp(&b.id));
        let edges = edges
            .into_iter()
            .enumerate()
            .map(|(i, record)| KnowledgeEdge {
                id: format!("edge:e{}", i + 1),
                record,
            })
            .collect();
        Self {
            nodes,
            edges,
            provenance,
            stats,
        }
    }

    pub fn node(&self, id: &EntityId) -> Option<&NodeRecord> {
        self.nodes
            .binary_search_by(|n| n.id.cmp(id))
            .ok()
            .map(|i| &self.nodes[i])
    }

    pub fn edge(&self, key: &EdgeKey) -> Option<&KnowledgeEdge> {
        self.edges
            .binary_search_by(|e| e.record.key().cmp(key))
            .ok()
            .map(|i| &self.edges[i])
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// One row per edge, in edge order.
    pub fn edge_rows(&self) -> Vec<EdgeRow> {
        self.edges
            .iter()
            .map(|edge| {
                let record = &edge.record;
                EdgeRow {
                    source: record.source.to_string(),
                    source_type: record.source_kind.label().to_string(),
                    target: record.target.to_string(),
                    target_type: record.target_kind.label().to_string(),
                    relation: record.relation,
                    polarity: record.polarity(),
                    evidence_count: record.evidence_count,
                    primary_pattern: record.primary_pattern.clone(),
                    evidence_titles: record
                        .evidence_titles(defaults::EDGE_ROW_TITLE_LIMIT, defaults::EDGE_ROW_TITLE_CHARS)
                        .join(defaults::EDGE_ROW_TITLE_SEPARATOR),
                }
            })
            .collect()
    }
}
