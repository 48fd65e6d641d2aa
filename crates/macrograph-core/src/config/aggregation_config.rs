use serde::{Deserialize, Serialize};

use super::defaults;

/// How much evidence an edge keeps. Counts are never affected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum EvidencePolicy {
    /// Keep the `size` canonically-smallest entries.
    Sample {
        #[serde(default = "default_sample_size")]
        size: usize,
    },
    /// Keep every entry.
    Unbounded,
}

fn default_sample_size() -> usize {
    defaults::DEFAULT_EVIDENCE_SAMPLE_SIZE
}

impl EvidencePolicy {
    /// Maximum retained entries, `None` when unbounded.
    pub fn cap(&self) -> Option<usize> {
        match self {
            Self::Sample { size } => Some(*size),
            Self::Unbounded => None,
        }
    }
}

impl Default for EvidencePolicy {
    fn default() -> Self {
        Self::Sample {
            size: defaults::DEFAULT_EVIDENCE_SAMPLE_SIZE,
        }
    }
}

/// Graph aggregation configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    pub evidence: EvidencePolicy,
}
