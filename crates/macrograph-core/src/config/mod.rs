//! Configuration: one struct per subsystem, aggregated by `MacrographConfig`.

pub mod aggregation_config;
pub mod assembly_config;
pub mod defaults;
pub mod extraction_config;
pub mod lexicon_config;
pub mod macrograph_config;
pub mod observability_config;
pub mod pipeline_config;

pub use aggregation_config::{AggregationConfig, EvidencePolicy};
pub use assembly_config::{AssemblyConfig, LayerRule};
pub use extraction_config::{EventPairing, ExtractionConfig};
pub use lexicon_config::LexiconConfig;
pub use macrograph_config::MacrographConfig;
pub use observability_config::ObservabilityConfig;
pub use pipeline_config::PipelineConfig;
