use serde::{Deserialize, Serialize};

/// Where the lexicon comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Path to a lexicon TOML file. `None` selects the built-in lexicon.
    pub path: Option<String>,
}
