//! # macrograph-core
//!
//! Foundation crate: the headline and graph data model, per-subsystem errors,
//! configuration, and the collaborator traits the other crates plug into.

pub mod config;
pub mod errors;
pub mod models;
pub mod traits;

pub use config::MacrographConfig;
pub use errors::{MacrographError, MacrographResult};
pub use models::{
    CandidateBatch, EdgeCandidate, EdgeKey, EdgeRelation, EntityId, EvidenceEntry, Headline,
    LaborStrength, NodeKind, NodeRef, Polarity, PolarityTally, ResolvedPattern, SignalSummary,
};
