//! Serializable export structure handed to the export collaborator.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use macrograph_core::{EdgeRelation, EntityId, EvidenceEntry, Polarity, PolarityTally};
use serde::{Deserialize, Serialize};

use crate::stats::ExtractionStats;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportView {
    pub metadata: ExportMetadata,
    /// Sorted by layer, then id.
    pub nodes: Vec<ExportNode>,
    pub edges: Vec<ExportEdge>,
}

impl ExportView {
    pub fn nodes_in_layer(&self, layer: u8) -> impl Iterator<Item = &ExportNode> {
        self.nodes.iter().filter(move |n| n.layer == layer)
    }

    pub fn node(&self, id: &EntityId) -> Option<&ExportNode> {
        self.nodes.iter().find(|n| &n.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub layers: Vec<LayerSummary>,
    pub stats: ExtractionStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerSummary {
    pub layer: u8,
    pub label: String,
    pub prefix: String,
    pub node_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportNode {
    pub id: EntityId,
    #[serde(rename = "type")]
    pub node_type: String,
    pub name: String,
    pub layer: u8,
    pub classification: String,
    pub mention_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polarity: Option<Polarity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polarity_stats: Option<PolarityTally>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    /// Asset an outcome node belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attached_to: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_seen: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metrics: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportEdge {
    pub id: String,
    #[serde(rename = "type")]
    pub edge_type: String,
    pub source: EntityId,
    pub target: EntityId,
    pub relation: EdgeRelation,
    pub polarity: Polarity,
    pub evidence_count: u64,
    pub primary_pattern: String,
    pub pattern_distribution: BTreeMap<String, u64>,
    pub evidence: Vec<EvidenceEntry>,
    pub polarity_stats: PolarityTally,
}
