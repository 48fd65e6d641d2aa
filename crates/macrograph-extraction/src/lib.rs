//! # macrograph-extraction
//!
//! The stateless half of the pipeline. Each stage is a pure function of one
//! headline and the lexicon:
//! detect signals and per-asset direction → resolve the causal pattern →
//! build edge candidates.
//! Nothing here touches cross-headline state, so headlines can be extracted
//! in parallel.

pub mod builder;
pub mod detector;
pub mod extractor;
pub mod polarity_override;
pub mod resolver;

pub use builder::RelationshipBuilder;
pub use detector::{AssetDirection, DetectedSignals, DirectionSource, SignalDetector};
pub use extractor::HeadlineExtractor;
pub use polarity_override::asset_polarity;
pub use resolver::PatternResolver;
