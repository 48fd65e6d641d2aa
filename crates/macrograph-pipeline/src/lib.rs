//! # macrograph-pipeline
//!
//! Wires the lexicon, the extraction stages, and the aggregator into one
//! engine. Extraction may fan out over the rayon pool; the aggregator always
//! has a single owner and ingests batches serially.

pub mod engine;
pub mod tracing_setup;

pub use engine::{MacrographEngine, RunSummary};
