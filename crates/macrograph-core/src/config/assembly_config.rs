use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::NodeKind;

/// Maps an id prefix to a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerRule {
    pub prefix: String,
    pub layer: u8,
    pub label: String,
}

impl LayerRule {
    pub fn new(prefix: &str, layer: u8, label: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            layer,
            label: label.to_string(),
        }
    }
}

/// Knowledge graph assembly configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblyConfig {
    /// Emit publisher nodes in the provenance layer.
    pub include_provenance: bool,
    /// Merge outcome nodes from an external metrics provider, when one is given.
    pub include_outcomes: bool,
    pub layers: Vec<LayerRule>,
}

impl AssemblyConfig {
    /// The five-layer layout: provenance, events, mechanisms, assets, outcomes.
    pub fn default_layers() -> Vec<LayerRule> {
        vec![
            LayerRule::new(NodeKind::Provenance.prefix(), 0, "Provenance"),
            LayerRule::new(NodeKind::Event.prefix(), 1, "Events"),
            LayerRule::new(NodeKind::Mechanism.prefix(), 2, "Mechanisms"),
            LayerRule::new(NodeKind::Asset.prefix(), 3, "Assets"),
            LayerRule::new(NodeKind::Outcome.prefix(), 4, "Outcomes"),
        ]
    }

    pub fn rule_for(&self, prefix: &str) -> Option<&LayerRule> {
        self.layers.iter().find(|r| r.prefix == prefix)
    }
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            include_provenance: defaults::DEFAULT_INCLUDE_PROVENANCE,
            include_outcomes: defaults::DEFAULT_INCLUDE_OUTCOMES,
            layers: Self::default_layers(),
        }
    }
}
