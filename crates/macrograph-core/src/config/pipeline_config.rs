use serde::{Deserialize, Serialize};

use super::defaults;

/// Batch pipeline configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Run extraction on the rayon pool. Ingestion stays serial either way.
    pub parallel: bool,
    /// Headlines extracted per parallel chunk.
    pub batch_size: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            parallel: defaults::DEFAULT_PARALLEL,
            batch_size: defaults::DEFAULT_BATCH_SIZE,
        }
    }
}
