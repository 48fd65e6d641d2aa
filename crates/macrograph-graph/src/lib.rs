//! # macrograph-graph
//!
//! Cross-headline state. The [`GraphAggregator`] folds candidate batches into
//! one deduplicated, evidence-weighted graph; [`KnowledgeGraph`] is its
//! immutable snapshot; the assembler partitions a snapshot into layers for
//! export.

pub mod aggregator;
pub mod assembler;
pub mod graph;
pub mod ranking;
pub mod snapshot;
pub mod stats;

pub use aggregator::GraphAggregator;
pub use assembler::{assemble, ExportEdge, ExportMetadata, ExportNode, ExportView, KnowledgeGraphAssembler};
pub use graph::{EdgeRecord, IndexedGraph, NodeRecord};
pub use ranking::PatternRanking;
pub use snapshot::{EdgeRow, KnowledgeEdge, KnowledgeGraph};
pub use stats::{ExtractionStats, ProvenanceRecord};
