//! Serde definitions of the lexicon TOML document, before compilation.

use macrograph_core::{LaborStrength, Polarity};
use serde::{Deserialize, Serialize};

/// A whole lexicon document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconFile {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub events: Vec<EventDef>,
    #[serde(default)]
    pub mechanisms: Vec<MechanismDef>,
    #[serde(default)]
    pub assets: Vec<AssetDef>,
    #[serde(default)]
    pub movement: Vec<MovementDef>,
    #[serde(default)]
    pub labor_strength: LaborStrengthDef,
    #[serde(default)]
    pub overrides: Vec<OverrideDef>,
    #[serde(default)]
    pub clauses: ClauseDef,
    #[serde(default)]
    pub patterns: Vec<PatternDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDef {
    pub id: String,
    pub name: String,
    pub class: String,
    /// Primary-event precedence; higher wins.
    #[serde(default)]
    pub priority: u8,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MechanismDef {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub mechanism_type: String,
    #[serde(default)]
    pub patterns: Vec<String>,
    /// Events that imply this mechanism when no mechanism phrase is present.
    #[serde(default)]
    pub implied_by: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetDef {
    pub id: String,
    pub name: String,
    pub class: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementDef {
    pub bucket: String,
    pub polarity: Polarity,
    /// Higher buckets are checked first.
    #[serde(default)]
    pub strength: u8,
    #[serde(default)]
    pub terms: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaborStrengthDef {
    #[serde(default)]
    pub strong: Vec<String>,
    #[serde(default)]
    pub weak: Vec<String>,
    #[serde(default)]
    pub mixed: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverrideDef {
    pub name: String,
    pub assets: Vec<String>,
    #[serde(default)]
    pub labor_strength: Option<LaborStrength>,
    #[serde(default)]
    pub mechanisms_any: Vec<String>,
    #[serde(default)]
    pub polarity: Option<Polarity>,
    #[serde(default)]
    pub invert: bool,
    /// Skip the rule when the asset's own clause states its direction.
    #[serde(default)]
    pub unless_explicit: bool,
}

/// Clause separators for per-asset direction, as raw regexes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClauseDef {
    #[serde(default)]
    pub separators: Vec<String>,
}

impl Default for ClauseDef {
    fn default() -> Self {
        Self {
            separators: DEFAULT_CLAUSE_SEPARATORS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Used when a lexicon has no `[clauses]` table.
pub const DEFAULT_CLAUSE_SEPARATORS: &[&str] = &[
    r"\s+while\s+",
    r"\s+as\s+",
    r"\s+whereas\s+",
    r"\s+but\s+",
    r"\s+yet\s+",
    r";\s*",
    r",\s+and\s+",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternDef {
    pub name: String,
    pub pattern: String,
    pub priority: u8,
    #[serde(default)]
    pub requires_movement: bool,
}
