//! In-memory graph storage: petgraph plus identity indexes.

pub mod records;
pub mod stable_graph;

pub use records::{EdgeRecord, NodeRecord};
pub use stable_graph::{IndexedGraph, KnowledgeStableGraph};
