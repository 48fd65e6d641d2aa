//! Lexicon loading: parse TOML, validate, compile every matcher.
//!
//! Any problem is fatal here so that a bad lexicon never reaches headline
//! processing.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::path::Path;

use macrograph_core::config::defaults;
use macrograph_core::errors::LexiconError;
use macrograph_core::models::slugify;
use regex::Regex;
use tracing::info;

use crate::catalog::{CausalPatternTemplate, PatternCatalog};
use crate::entries::{
    AssetEntry, EventEntry, LaborStrengthRules, MechanismEntry, MovementBucket, OverrideAction,
    OverrideRule,
};
use crate::lexicon::Lexicon;
use crate::phrase::{compile_phrases, compile_raw, PhraseStyle};
use crate::schema::{
    AssetDef, EventDef, LexiconFile, MechanismDef, MovementDef, OverrideDef, PatternDef,
};

/// Loader for TOML lexicons.
pub struct LexiconLoader;

impl LexiconLoader {
    /// Load a lexicon from a TOML string.
    pub fn load_from_str(toml_str: &str) -> Result<Lexicon, LexiconError> {
        Self::load_named(toml_str, "<string>")
    }

    /// Load a lexicon from a file path.
    pub fn load_from_file(path: &Path) -> Result<Lexicon, LexiconError> {
        let content = std::fs::read_to_string(path).map_err(|e| LexiconError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::load_named(&content, &path.display().to_string())
    }

    fn load_named(toml_str: &str, origin: &str) -> Result<Lexicon, LexiconError> {
        let file: LexiconFile = toml::from_str(toml_str).map_err(|e| LexiconError::Parse {
            origin: origin.to_string(),
            message: e.to_string(),
        })?;
        let lexicon = Self::compile(file)?;
        info!(
            origin,
            version = %lexicon.version,
            events = lexicon.events.len(),
            mechanisms = lexicon.mechanisms.len(),
            assets = lexicon.assets.len(),
            movement_buckets = lexicon.movement.len(),
            patterns = lexicon.catalog.len(),
            "lexicon loaded"
        );
        Ok(lexicon)
    }

    /// Validate and compile a parsed lexicon document.
    pub fn compile(file: LexiconFile) -> Result<Lexicon, LexiconError> {
        require_non_empty("events", file.events.len())?;
        require_non_empty("assets", file.assets.len())?;
        require_non_empty("movement", file.movement.len())?;

        let events = file
            .events
            .into_iter()
            .map(compile_event)
            .collect::<Result<Vec<_>, _>>()?;
        let event_index = index_ids("events", events.iter().map(|e| e.id.as_str()))?;

        let mechanisms = file
            .mechanisms
            .into_iter()
            .map(compile_mechanism)
            .collect::<Result<Vec<_>, _>>()?;
        let mechanism_index = index_ids("mechanisms", mechanisms.iter().map(|m| m.id.as_str()))?;
        for mechanism in &mechanisms {
            for event in &mechanism.implied_by {
                if !event_index.contains_key(event) {
                    return Err(LexiconError::UnknownReference {
                        section: "mechanisms".to_string(),
                        id: mechanism.id.clone(),
                        reference: event.clone(),
                    });
                }
            }
        }

        let assets = file
            .assets
            .into_iter()
            .map(compile_asset)
            .collect::<Result<Vec<_>, _>>()?;
        let asset_index = index_ids("assets", assets.iter().map(|a| a.id.as_str()))?;

        let mut movement = file
            .movement
            .into_iter()
            .map(compile_movement)
            .collect::<Result<Vec<_>, _>>()?;
        index_ids("movement", movement.iter().map(|b| b.name.as_str()))?;
        // Stable sort keeps declaration order within a strength.
        movement.sort_by(|a, b| b.strength.cmp(&a.strength));

        let labor_strength = LaborStrengthRules {
            strong: compile_raw_list("labor_strength", "strong", &file.labor_strength.strong)?,
            weak: compile_raw_list("labor_strength", "weak", &file.labor_strength.weak)?,
            mixed: compile_raw_list("labor_strength", "mixed", &file.labor_strength.mixed)?,
        };

        let overrides = file
            .overrides
            .into_iter()
            .map(|def| compile_override(def, &asset_index, &mechanism_index))
            .collect::<Result<Vec<_>, _>>()?;
        index_ids("overrides", overrides.iter().map(|o| o.name.as_str()))?;

        let clause_splitter = compile_separators(&file.clauses.separators)?;

        let templates = file
            .patterns
            .into_iter()
            .map(compile_pattern)
            .collect::<Result<Vec<_>, _>>()?;
        index_ids("patterns", templates.iter().map(|t| t.name.as_str()))?;

        Ok(Lexicon {
            version: file.version.unwrap_or_else(|| "unversioned".to_string()),
            events,
            mechanisms,
            assets,
            movement,
            labor_strength,
            overrides,
            clause_splitter,
            catalog: PatternCatalog::new(templates),
            event_index,
            mechanism_index,
            asset_index,
        })
    }
}

fn require_non_empty(section: &str, len: usize) -> Result<(), LexiconError> {
    if len == 0 {
        return Err(LexiconError::EmptySection {
            section: section.to_string(),
        });
    }
    Ok(())
}

fn index_ids<'a>(
    section: &str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<HashMap<String, usize>, LexiconError> {
    let mut index = HashMap::new();
    for (i, id) in ids.enumerate() {
        if index.insert(id.to_string(), i).is_some() {
            return Err(LexiconError::DuplicateId {
                section: section.to_string(),
                id: id.to_string(),
            });
        }
    }
    Ok(index)
}

fn regex_error(section: &str, id: &str, e: regex::Error) -> LexiconError {
    LexiconError::InvalidRegex {
        section: section.to_string(),
        id: id.to_string(),
        message: e.to_string(),
    }
}

fn empty_entry(section: &str, id: &str) -> LexiconError {
    LexiconError::EmptyEntry {
        section: section.to_string(),
        id: id.to_string(),
    }
}

fn compile_phrase_list(
    section: &str,
    id: &str,
    phrases: &[String],
    style: PhraseStyle,
) -> Result<Regex, LexiconError> {
    compile_phrases(phrases, style)
        .map_err(|e| regex_error(section, id, e))?
        .ok_or_else(|| empty_entry(section, id))
}

fn compile_raw_list(section: &str, id: &str, patterns: &[String]) -> Result<Vec<Regex>, LexiconError> {
    patterns
        .iter()
        .filter(|p| !p.trim().is_empty())
        .map(|p| compile_raw(p).map_err(|e| regex_error(section, id, e)))
        .collect()
}

/// Ids become the slug half of `<prefix>:<slug>` node ids.
fn require_slug(section: &str, id: &str) -> Result<(), LexiconError> {
    if id.is_empty() || slugify(id) != id {
        return Err(LexiconError::InvalidId {
            section: section.to_string(),
            id: id.to_string(),
        });
    }
    Ok(())
}

fn compile_separators(separators: &[String]) -> Result<Option<Regex>, LexiconError> {
    let alternatives: Vec<String> = separators
        .iter()
        .filter(|s| !s.is_empty())
        .map(|s| format!("(?:{s})"))
        .collect();
    if alternatives.is_empty() {
        return Ok(None);
    }
    compile_raw(&alternatives.join("|"))
        .map(Some)
        .map_err(|e| regex_error("clauses", "separators", e))
}

fn compile_event(def: EventDef) -> Result<EventEntry, LexiconError> {
    require_slug("events", &def.id)?;
    let matcher = compile_phrase_list("events", &def.id, &def.keywords, PhraseStyle::Inflected)?;
    Ok(EventEntry {
        id: def.id,
        name: def.name,
        class: def.class,
        priority: def.priority,
        keywords: def.keywords,
        matcher,
    })
}

fn compile_mechanism(def: MechanismDef) -> Result<MechanismEntry, LexiconError> {
    require_slug("mechanisms", &def.id)?;
    let patterns = compile_raw_list("mechanisms", &def.id, &def.patterns)?;
    if patterns.is_empty() {
        return Err(empty_entry("mechanisms", &def.id));
    }
    Ok(MechanismEntry {
        id: def.id,
        name: def.name,
        mechanism_type: def.mechanism_type,
        patterns,
        implied_by: def.implied_by,
    })
}

fn compile_asset(def: AssetDef) -> Result<AssetEntry, LexiconError> {
    require_slug("assets", &def.id)?;
    let matcher = compile_phrase_list("assets", &def.id, &def.keywords, PhraseStyle::Nominal)?;
    Ok(AssetEntry {
        id: def.id,
        name: def.name,
        class: def.class,
        aliases: def.keywords,
        matcher,
    })
}

fn compile_movement(def: MovementDef) -> Result<MovementBucket, LexiconError> {
    let matcher = compile_phrase_list("movement", &def.bucket, &def.terms, PhraseStyle::Inflected)?;
    Ok(MovementBucket {
        name: def.bucket,
        polarity: def.polarity,
        strength: def.strength,
        terms: def.terms,
        matcher,
    })
}

fn compile_override(
    def: OverrideDef,
    assets: &HashMap<String, usize>,
    mechanisms: &HashMap<String, usize>,
) -> Result<OverrideRule, LexiconError> {
    let invalid = |reason: &str| LexiconError::InvalidOverride {
        name: def.name.clone(),
        reason: reason.to_string(),
    };
    let action = match (def.polarity, def.invert) {
        (Some(p), false) => OverrideAction::Set(p),
        (None, true) => OverrideAction::Invert,
        (Some(_), true) => return Err(invalid("set both `polarity` and `invert`")),
        (None, false) => return Err(invalid("needs either `polarity` or `invert = true`")),
    };
    if def.assets.is_empty() {
        return Err(invalid("lists no assets"));
    }
    let unknown = |reference: &str| LexiconError::UnknownReference {
        section: "overrides".to_string(),
        id: def.name.clone(),
        reference: reference.to_string(),
    };
    if let Some(asset) = def.assets.iter().find(|a| !assets.contains_key(*a)) {
        return Err(unknown(asset));
    }
    if let Some(mech) = def.mechanisms_any.iter().find(|m| !mechanisms.contains_key(*m)) {
        return Err(unknown(mech));
    }
    Ok(OverrideRule {
        assets: def.assets.iter().cloned().collect::<BTreeSet<_>>(),
        mechanisms_any: def.mechanisms_any.iter().cloned().collect::<BTreeSet<_>>(),
        labor_strength: def.labor_strength,
        unless_explicit: def.unless_explicit,
        action,
        name: def.name,
    })
}

fn compile_pattern(def: PatternDef) -> Result<CausalPatternTemplate, LexiconError> {
    if def.name == defaults::GENERAL_CONTEXT_PATTERN {
        return Err(LexiconError::DuplicateId {
            section: "patterns".to_string(),
            id: def.name,
        });
    }
    if def.pattern.trim().is_empty() {
        return Err(empty_entry("patterns", &def.name));
    }
    let regex = compile_raw(&def.pattern).map_err(|e| regex_error("patterns", &def.name, e))?;
    Ok(CausalPatternTemplate {
        name: def.name,
        priority: def.priority,
        requires_movement: def.requires_movement,
        regex,
    })
}
