//! Data model shared by extraction, aggregation, and assembly.

pub mod candidate;
pub mod entity;
pub mod headline;
pub mod polarity;
pub mod relation;

pub use candidate::{CandidateBatch, EdgeCandidate, ResolvedPattern, SignalSummary};
pub use entity::{slugify, EntityId, NodeKind, NodeRef};
pub use headline::{EvidenceEntry, Headline};
pub use polarity::{LaborStrength, Polarity, PolarityTally};
pub use relation::{EdgeKey, EdgeRelation};
