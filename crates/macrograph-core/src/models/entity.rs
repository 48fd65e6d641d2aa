use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{MacrographError, MacrographResult};

/// The kind of node an identifier refers to. Each kind owns an id prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Provenance,
    Event,
    Mechanism,
    Asset,
    Outcome,
}

impl NodeKind {
    pub const ALL: [NodeKind; 5] = [
        Self::Provenance,
        Self::Event,
        Self::Mechanism,
        Self::Asset,
        Self::Outcome,
    ];

    /// Identifier prefix, the part before the `:`.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Provenance => "source",
            Self::Event => "event",
            Self::Mechanism => "mech",
            Self::Asset => "asset",
            Self::Outcome => "outcome",
        }
    }

    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.prefix() == prefix)
    }

    /// Node type label used in exports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Provenance => "Source",
            Self::Event => "Event",
            Self::Mechanism => "Mechanism",
            Self::Asset => "Asset",
            Self::Outcome => "Outcome",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Stable node identifier of the form `<prefix>:<slug>`, e.g. `mech:rate_cut_bets`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Build an id from a kind and an already-slugged key.
    pub fn new(kind: NodeKind, slug: &str) -> Self {
        Self(format!("{}:{}", kind.prefix(), slug))
    }

    /// Parse and validate a raw identifier.
    pub fn parse(raw: &str) -> MacrographResult<Self> {
        match raw.split_once(':') {
            Some((prefix, slug)) if NodeKind::from_prefix(prefix).is_some() && !slug.is_empty() => {
                Ok(Self(raw.to_string()))
            }
            _ => Err(MacrographError::InvalidEntityId { id: raw.to_string() }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The prefix part. Ids built through `new`/`parse` always have one.
    pub fn prefix(&self) -> &str {
        self.0.split_once(':').map_or("", |(p, _)| p)
    }

    pub fn slug(&self) -> &str {
        self.0.split_once(':').map_or(self.0.as_str(), |(_, s)| s)
    }

    pub fn kind(&self) -> Option<NodeKind> {
        NodeKind::from_prefix(self.prefix())
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// What a candidate carries about one endpoint, so aggregation never needs
/// to consult the lexicon.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeRef {
    pub id: EntityId,
    pub kind: NodeKind,
    /// Display name, e.g. "Rate Cut Expectations".
    pub name: String,
    /// Event class, mechanism type, or asset class.
    pub classification: String,
}

impl NodeRef {
    pub fn new(kind: NodeKind, slug: &str, name: &str, classification: &str) -> Self {
        Self {
            id: EntityId::new(kind, slug),
            kind,
            name: name.to_string(),
            classification: classification.to_string(),
        }
    }
}

/// Lowercase slug: alphanumerics kept, every other run collapsed to `_`.
pub fn slugify(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_sep = false;
    for c in raw.trim().chars() {
        if c.is_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.extend(c.to_lowercase());
        } else {
            pending_sep = true;
        }
    }
    out
}
