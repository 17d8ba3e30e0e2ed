//! Split steps that outlast the learner's attention span
//!
//! A step of `d` minutes with span `s` becomes `ceil(d / s)` parts: every
//! part runs `s` minutes except the last, which takes the remainder.

use crate::core::types::ConceptId;
use crate::planner::step::{ChunkIndex, PlanStep};

/// Separator between concept id and part number in chunk labels
pub const DEFAULT_CHUNK_SEPARATOR: &str = "_part_";

/// Split a step using the default `_part_` labels
pub fn chunk(step: PlanStep, attention_span: u32) -> Vec<PlanStep> {
    chunk_with_separator(step, attention_span, DEFAULT_CHUNK_SEPARATOR)
}

/// Split a step, labelling parts `<concept><separator><n>`
pub fn chunk_with_separator(step: PlanStep, attention_span: u32, separator: &str) -> Vec<PlanStep> {
    if attention_span == 0 || step.duration_minutes <= attention_span {
        return vec![step];
    }

    let duration = step.duration_minutes;
    let total = duration.div_ceil(attention_span);

    (1..=total)
        .map(|position| {
            let minutes = if position < total {
                attention_span
            } else {
                duration - (total - 1) * attention_span
            };
            PlanStep {
                concept: ConceptId::new(format!("{}{}{}", step.base_concept, separator, position)),
                duration_minutes: minutes,
                chunk_index: Some(ChunkIndex { position, total }),
                ..step.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ConceptDefinition;
    use crate::core::types::ConceptCategory;

    fn step(id: &str, minutes: u32) -> PlanStep {
        let def = ConceptDefinition::new(id, ConceptCategory::Procedural)
            .with_prerequisites(["arithmetic"]);
        let mut step = PlanStep::from_definition(&def);
        step.duration_minutes = minutes;
        step
    }

    fn durations(steps: &[PlanStep]) -> Vec<u32> {
        steps.iter().map(|s| s.duration_minutes).collect()
    }

    #[test]
    fn test_short_step_unchanged() {
        let original = step("fractions", 60);
        let chunks = chunk(original.clone(), 60);
        assert_eq!(chunks, vec![original]);
    }

    #[test]
    fn test_even_split() {
        let chunks = chunk(step("arithmetic", 180), 60);
        assert_eq!(durations(&chunks), vec![60, 60, 60]);
    }

    #[test]
    fn test_remainder_in_last_part() {
        let chunks = chunk(step("fractions", 270), 60);
        assert_eq!(durations(&chunks), vec![60, 60, 60, 60, 30]);
        assert_eq!(chunks[4].chunk_index, Some(ChunkIndex { position: 5, total: 5 }));
    }

    #[test]
    fn test_one_minute_over() {
        let chunks = chunk(step("fractions", 61), 60);
        assert_eq!(durations(&chunks), vec![60, 1]);
    }

    #[test]
    fn test_labels_and_inheritance() {
        let parent = step("fractions", 100);
        let chunks = chunk(parent.clone(), 40);
        let labels: Vec<&str> = chunks.iter().map(|s| s.concept.as_str()).collect();
        assert_eq!(labels, vec!["fractions_part_1", "fractions_part_2", "fractions_part_3"]);

        for (i, part) in chunks.iter().enumerate() {
            assert_eq!(part.base_concept, parent.base_concept);
            assert_eq!(part.prerequisites, parent.prerequisites);
            assert_eq!(part.objectives, parent.objectives);
            assert_eq!(part.cognitive_load, parent.cognitive_load);
            assert_eq!(part.bloom_level, parent.bloom_level);
            assert_eq!(part.chunk_index, Some(ChunkIndex { position: i as u32 + 1, total: 3 }));
        }
    }

    #[test]
    fn test_custom_separator() {
        let chunks = chunk_with_separator(step("phonics", 50), 25, "#");
        assert_eq!(chunks[1].concept.as_str(), "phonics#2");
    }
}
