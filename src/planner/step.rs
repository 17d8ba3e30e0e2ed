//! Plan steps - the unit of work handed to presentation

use serde::{Deserialize, Serialize};

use crate::catalog::ConceptDefinition;
use crate::core::types::{BloomLevel, ConceptCategory, ConceptId, Modality};

/// Position of a chunk within its parent step (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkIndex {
    pub position: u32,
    pub total: u32,
}

/// One scheduled block of study
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanStep {
    /// Display label; chunks carry a part suffix
    pub concept: ConceptId,
    /// Catalog concept this step teaches
    pub base_concept: ConceptId,
    pub duration_minutes: u32,
    /// Catalog duration before ability scaling or chunking
    pub nominal_duration_minutes: u32,
    pub cognitive_load: u8,
    pub bloom_level: BloomLevel,
    pub category: ConceptCategory,
    /// All declared prerequisites, mastered or not
    pub prerequisites: Vec<ConceptId>,
    pub objectives: Vec<String>,
    pub modality: Modality,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_index: Option<ChunkIndex>,
}

impl PlanStep {
    /// Raw step for a concept at its nominal duration
    pub fn from_definition(def: &ConceptDefinition) -> Self {
        Self {
            concept: def.id.clone(),
            base_concept: def.id.clone(),
            duration_minutes: def.nominal_duration_minutes,
            nominal_duration_minutes: def.nominal_duration_minutes,
            cognitive_load: def.cognitive_load,
            bloom_level: def.bloom_level,
            category: def.category,
            prerequisites: def.prerequisites.clone(),
            objectives: def.objectives.clone(),
            modality: Modality::default(),
            chunk_index: None,
        }
    }

    pub fn is_chunk(&self) -> bool {
        self.chunk_index.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_definition_copies_metadata() {
        let def = ConceptDefinition::new("fractions", ConceptCategory::Procedural)
            .with_prerequisites(["arithmetic"])
            .with_duration(180)
            .with_cognitive_load(4);
        let step = PlanStep::from_definition(&def);

        assert_eq!(step.concept, step.base_concept);
        assert_eq!(step.duration_minutes, 180);
        assert_eq!(step.nominal_duration_minutes, 180);
        assert_eq!(step.cognitive_load, 4);
        assert_eq!(step.prerequisites, vec![ConceptId::from("arithmetic")]);
        assert_eq!(step.modality, Modality::MixedMedia);
        assert!(!step.is_chunk());
    }

    #[test]
    fn test_unchunked_step_omits_chunk_index() {
        let def = ConceptDefinition::new("phonics", ConceptCategory::Factual);
        let json = serde_json::to_value(PlanStep::from_definition(&def)).unwrap();
        assert!(json.get("chunk_index").is_none());
        assert_eq!(json["category"], "factual");
        assert_eq!(json["bloom_level"], "understand");
    }

    #[test]
    fn test_chunked_step_serializes_chunk_index() {
        let def = ConceptDefinition::new("phonics", ConceptCategory::Factual);
        let mut step = PlanStep::from_definition(&def);
        step.chunk_index = Some(ChunkIndex { position: 2, total: 3 });

        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["chunk_index"]["position"], 2);
        assert_eq!(json["chunk_index"]["total"], 3);
        assert!(json.get("chunk").is_none());
    }
}
