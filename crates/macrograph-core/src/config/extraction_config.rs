use serde::{Deserialize, Serialize};

/// Which detected events become sources of event-level edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventPairing {
    /// Only the highest-priority detected event (the primary event).
    #[default]
    Primary,
    /// Every detected event: the full events × mechanisms cross product.
    All,
}

/// Per-headline extraction configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    pub event_pairing: EventPairing,
}
