//! petgraph::StableGraph wrapper keyed by entity id and edge key.

use std::collections::HashMap;

use macrograph_core::{EdgeKey, EdgeRelation, EntityId, NodeRef};
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableGraph};
use petgraph::Directed;

use super::records::{EdgeRecord, NodeRecord};

/// The underlying directed graph type.
pub type KnowledgeStableGraph = StableGraph<NodeRecord, EdgeRecord, Directed>;

/// Wrapper providing indexed access to the knowledge graph.
#[derive(Debug, Clone)]
pub struct IndexedGraph {
    /// The petgraph stable graph.
    pub graph: KnowledgeStableGraph,
    /// Map from entity id → NodeIndex for O(1) lookup.
    pub node_index: HashMap<EntityId, NodeIndex>,
    /// Map from (source, target, relation) → EdgeIndex. One edge per key.
    pub edge_index: HashMap<EdgeKey, EdgeIndex>,
}

impl IndexedGraph {
    /// Create an empty indexed graph.
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            node_index: HashMap::new(),
            edge_index: HashMap::new(),
        }
    }

    /// Get or create the node for `node`.
    pub fn ensure_node(&mut self, node: &NodeRef) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(&node.id) {
            return idx;
        }
        let idx = self.graph.add_node(NodeRecord::new(node));
        self.node_index.insert(node.id.clone(), idx);
        idx
    }

    /// Get or create the edge for (source, target, relation), creating both
    /// endpoints as needed.
    pub fn ensure_edge(&mut self, source: &NodeRef, target: &NodeRef, relation: EdgeRelation) -> EdgeIndex {
        let key = EdgeKey::new(source.id.clone(), target.id.clone(), relation);
        if let Some(&idx) = self.edge_index.get(&key) {
            return idx;
        }
        let from = self.ensure_node(source);
        let to = self.ensure_node(target);
        let idx = self.graph.add_edge(from, to, EdgeRecord::new(source, target, relation));
        self.edge_index.insert(key, idx);
        idx
    }

    pub fn get_node(&self, id: &EntityId) -> Option<NodeIndex> {
        self.node_index.get(id).copied()
    }

    pub fn get_edge(&self, key: &EdgeKey) -> Option<EdgeIndex> {
        self.edge_index.get(key).copied()
    }

    pub fn node(&self, id: &EntityId) -> Option<&NodeRecord> {
        self.get_node(id).and_then(|idx| self.graph.node_weight(idx))
    }

    pub fn node_mut(&mut self, id: &EntityId) -> Option<&mut NodeRecord> {
        let idx = self.get_node(id)?;
        self.graph.node_weight_mut(idx)
    }

    pub fn edge(&self, key: &EdgeKey) -> Option<&EdgeRecord> {
        self.get_edge(key).and_then(|idx| self.graph.edge_weight(idx))
    }

    pub fn edge_mut(&mut self, key: &EdgeKey) -> Option<&mut EdgeRecord> {
        let idx = self.get_edge(key)?;
        self.graph.edge_weight_mut(idx)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &NodeRecord> {
        self.graph.node_weights()
    }

    pub fn edges(&self) -> impl Iterator<Item = &EdgeRecord> {
        self.graph.edge_weights()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl Default for IndexedGraph {
    fn default() -> Self {
        Self::new()
    }
}
