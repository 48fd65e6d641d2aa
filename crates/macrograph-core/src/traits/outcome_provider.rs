use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::EntityId;

/// A measured market outcome attached to one asset, e.g. a post-event return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeRecord {
    /// `outcome:<slug>` identifier.
    pub id: EntityId,
    pub name: String,
    /// The asset node this outcome measures.
    pub asset: EntityId,
    /// Named metrics, e.g. `return_1d`, `volatility_5d`.
    #[serde(default)]
    pub metrics: BTreeMap<String, f64>,
}

/// External metrics collaborator supplying the outcome layer.
pub trait OutcomeProvider: Send + Sync {
    /// Outcomes for the given asset nodes. Records for other assets are ignored.
    fn outcomes(&self, assets: &[EntityId]) -> Vec<OutcomeRecord>;
}
