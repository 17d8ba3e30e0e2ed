//! Learner profile - mastery levels plus cognitive constraints
//!
//! Profiles come from upstream analytics that average interaction history
//! into scalars. The planner only reads them.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::config::PlannerConfig;
use crate::core::error::{PathError, Result};
use crate::core::types::{ConceptId, LearningStyle};

/// A learner's current knowledge and constraints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearnerProfile {
    /// Mastery per concept (0.0 to 1.0); absent concepts count as 0.0
    #[serde(default)]
    pub mastery: AHashMap<ConceptId, f32>,
    /// Processing ability (0.0 to 1.0); 1.0 halves study time, 0.0 doubles it
    pub cognitive_ability: f32,
    /// Sustained attention budget per sitting
    pub attention_span_minutes: u32,
    #[serde(default)]
    pub learning_style: LearningStyle,
}

impl LearnerProfile {
    pub fn new(
        cognitive_ability: f32,
        attention_span_minutes: u32,
        learning_style: LearningStyle,
    ) -> Self {
        Self {
            mastery: AHashMap::new(),
            cognitive_ability,
            attention_span_minutes,
            learning_style,
        }
    }

    /// Profile with the configured defaults and no recorded mastery
    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new(
            config.default_cognitive_ability,
            config.default_attention_span_minutes,
            LearningStyle::default(),
        )
    }

    pub fn with_mastery(mut self, concept: impl Into<ConceptId>, level: f32) -> Self {
        self.mastery.insert(concept.into(), level);
        self
    }

    /// Mastery of a concept, 0.0 if never recorded
    pub fn mastery_of(&self, concept: &str) -> f32 {
        self.mastery.get(concept).copied().unwrap_or(0.0)
    }

    /// Whether mastery meets a dependent concept's threshold
    pub fn meets_threshold(&self, concept: &str, threshold: f32) -> bool {
        self.mastery_of(concept) >= threshold
    }

    /// Reject out-of-range numeric fields
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.cognitive_ability) {
            return Err(PathError::InvalidProfile(format!(
                "cognitive_ability {} outside [0, 1]",
                self.cognitive_ability
            )));
        }

        if self.attention_span_minutes == 0 {
            return Err(PathError::InvalidProfile(
                "attention_span_minutes must be positive".into(),
            ));
        }

        if let Some((concept, level)) = self
            .mastery
            .iter()
            .find(|(_, level)| !(0.0..=1.0).contains(*level))
        {
            return Err(PathError::InvalidProfile(format!(
                "mastery of {} is {}, outside [0, 1]",
                concept, level
            )));
        }

        Ok(())
    }

    /// Parse a profile from JSON, filling omitted fields from the config
    pub fn from_json(json: &str, config: &PlannerConfig) -> Result<Self> {
        let file: ProfileFile = serde_json::from_str(json)?;
        let profile = file.into_profile(config);
        profile.validate()?;
        Ok(profile)
    }
}

/// Serialized profile as produced by upstream analytics; numeric traits optional
#[derive(Debug, Deserialize)]
struct ProfileFile {
    #[serde(default, alias = "current_knowledge")]
    mastery: AHashMap<ConceptId, f32>,
    #[serde(default)]
    cognitive_ability: Option<f32>,
    #[serde(default, alias = "attention_span")]
    attention_span_minutes: Option<u32>,
    #[serde(default)]
    learning_style: LearningStyle,
}

impl ProfileFile {
    fn into_profile(self, config: &PlannerConfig) -> LearnerProfile {
        LearnerProfile {
            mastery: self.mastery,
            cognitive_ability: self
                .cognitive_ability
                .unwrap_or(config.default_cognitive_ability),
            attention_span_minutes: self
                .attention_span_minutes
                .unwrap_or(config.default_attention_span_minutes),
            learning_style: self.learning_style,
        }
    }
}
