//! Top-level configuration with layered resolution.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    defaults, AggregationConfig, AssemblyConfig, EvidencePolicy, ExtractionConfig,
    LexiconConfig, ObservabilityConfig, PipelineConfig,
};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`MACROGRAPH_LEXICON`, `MACROGRAPH_LOG`)
/// 2. Config file passed to `load`
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacrographConfig {
    pub lexicon: LexiconConfig,
    pub extraction: ExtractionConfig,
    pub aggregation: AggregationConfig,
    pub assembly: AssemblyConfig,
    pub pipeline: PipelineConfig,
    pub observability: ObservabilityConfig,
}

impl MacrographConfig {
    /// Load configuration: defaults, then `path` if given, then environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides_from(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file. Missing sections keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply environment overrides through `lookup`, which maps a variable
    /// name to its value.
    pub fn apply_env_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup(defaults::LEXICON_PATH_ENV).filter(|p| !p.is_empty()) {
            self.lexicon.path = Some(path);
        }
        if let Some(level) = lookup(defaults::LOG_ENV).filter(|l| !l.is_empty()) {
            self.observability.log_level = level;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let EvidencePolicy::Sample { size: 0 } = self.aggregation.evidence {
            return Err(ConfigError::ValidationFailed {
                field: "aggregation.evidence.size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.pipeline.batch_size == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "pipeline.batch_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.observability.log_level.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        let mut seen = HashSet::new();
        for rule in &self.assembly.layers {
            if rule.prefix.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "assembly.layers".to_string(),
                    message: "layer prefix must not be empty".to_string(),
                });
            }
            if !seen.insert(rule.prefix.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "assembly.layers".to_string(),
                    message: format!("duplicate prefix '{}'", rule.prefix),
                });
            }
        }
        Ok(())
    }
}
