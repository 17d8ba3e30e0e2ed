//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Unique identifier for a concept in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConceptId(String);

impl ConceptId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConceptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ConceptId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ConceptId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ConceptId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ConceptId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Bloom's taxonomy level a concept is taught at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BloomLevel {
    Remember,
    Understand,
    Apply,
    Analyze,
    Evaluate,
    Create,
}

impl BloomLevel {
    pub fn all() -> &'static [BloomLevel] {
        &[
            BloomLevel::Remember,
            BloomLevel::Understand,
            BloomLevel::Apply,
            BloomLevel::Analyze,
            BloomLevel::Evaluate,
            BloomLevel::Create,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            BloomLevel::Remember => "remember",
            BloomLevel::Understand => "understand",
            BloomLevel::Apply => "apply",
            BloomLevel::Analyze => "analyze",
            BloomLevel::Evaluate => "evaluate",
            BloomLevel::Create => "create",
        }
    }
}

/// Knowledge category of a concept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConceptCategory {
    /// Skills and step-by-step methods
    Procedural,
    /// Models, principles and relationships
    Conceptual,
    /// Terminology and discrete facts
    Factual,
    /// Reflection on one's own reasoning
    Metacognitive,
}

impl ConceptCategory {
    pub fn all() -> &'static [ConceptCategory] {
        &[
            ConceptCategory::Procedural,
            ConceptCategory::Conceptual,
            ConceptCategory::Factual,
            ConceptCategory::Metacognitive,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConceptCategory::Procedural => "procedural",
            ConceptCategory::Conceptual => "conceptual",
            ConceptCategory::Factual => "factual",
            ConceptCategory::Metacognitive => "metacognitive",
        }
    }
}

/// Learner's preferred way of taking in material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningStyle {
    Visual,
    Auditory,
    Kinesthetic,
    #[default]
    Balanced,
}

impl LearningStyle {
    pub fn name(&self) -> &'static str {
        match self {
            LearningStyle::Visual => "visual",
            LearningStyle::Auditory => "auditory",
            LearningStyle::Kinesthetic => "kinesthetic",
            LearningStyle::Balanced => "balanced",
        }
    }
}

/// Recommended delivery medium for a plan step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    InteractivePractice,
    StepByStepVisual,
    GuidedAudio,
    DiagramsAndModels,
    ExplanatoryAudio,
    HandsOnExploration,
    FlashcardsVisual,
    RepetitionAudio,
    ReflectiveExercises,
    #[default]
    MixedMedia,
}

impl Modality {
    pub fn name(&self) -> &'static str {
        match self {
            Modality::InteractivePractice => "interactive_practice",
            Modality::StepByStepVisual => "step_by_step_visual",
            Modality::GuidedAudio => "guided_audio",
            Modality::DiagramsAndModels => "diagrams_and_models",
            Modality::ExplanatoryAudio => "explanatory_audio",
            Modality::HandsOnExploration => "hands_on_exploration",
            Modality::FlashcardsVisual => "flashcards_visual",
            Modality::RepetitionAudio => "repetition_audio",
            Modality::ReflectiveExercises => "reflective_exercises",
            Modality::MixedMedia => "mixed_media",
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
