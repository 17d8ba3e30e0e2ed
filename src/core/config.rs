//! Planner configuration with documented constants
//!
//! The planner never reads configuration from global state; a
//! `PlannerConfig` is built once at startup and passed by reference.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::{PathError, Result};

/// Configuration for the planning pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    // === DURATIONS ===
    /// Shortest duration any step may be assigned (minutes)
    ///
    /// The duration adjuster clamps to this floor. Must be at least 1 so
    /// that every chunk carries real time.
    pub min_step_minutes: u32,

    // === CHUNKING ===
    /// Separator placed between a concept id and its part number
    ///
    /// With the default `_part_`, the second chunk of `fractions` is
    /// labelled `fractions_part_2`.
    pub chunk_label_separator: String,

    // === CATALOG ===
    /// Scan the catalog for prerequisite cycles when it is loaded
    ///
    /// When false, cycles only surface when a resolution walks into one.
    pub reject_cyclic_catalog: bool,

    // === PROFILE DEFAULTS ===
    /// Cognitive ability assumed when a profile file omits it
    pub default_cognitive_ability: f32,

    /// Attention span assumed when a profile file omits it (minutes)
    pub default_attention_span_minutes: u32,

    // === PARALLELIZATION ===
    /// Minimum batch size before batch planning fans out over rayon
    ///
    /// Small batches run sequentially; thread hand-off costs more than
    /// resolving a handful of plans.
    pub parallel_threshold: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            min_step_minutes: 1,
            chunk_label_separator: "_part_".to_string(),
            reject_cyclic_catalog: true,
            default_cognitive_ability: 0.5,
            default_attention_span_minutes: 30,
            parallel_threshold: 8,
        }
    }
}

impl PlannerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML; omitted keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: PlannerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.min_step_minutes == 0 {
            return Err(PathError::InvalidConfig(
                "min_step_minutes must be at least 1".into(),
            ));
        }

        if self.chunk_label_separator.is_empty() {
            return Err(PathError::InvalidConfig(
                "chunk_label_separator must not be empty".into(),
            ));
        }

        if !(0.0..=1.0).contains(&self.default_cognitive_ability) {
            return Err(PathError::InvalidConfig(format!(
                "default_cognitive_ability ({}) must be within [0, 1]",
                self.default_cognitive_ability
            )));
        }

        if self.default_attention_span_minutes == 0 {
            return Err(PathError::InvalidConfig(
                "default_attention_span_minutes must be positive".into(),
            ));
        }

        Ok(())
    }
}
