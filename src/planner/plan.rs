//! Finished plans and their summary statistics

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::ConceptId;
use crate::planner::step::PlanStep;

/// Aggregate figures for a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Sum of step durations
    pub total_minutes: u64,
    /// Number of sittings, one per step
    pub sessions: usize,
    /// Catalog concepts taught, counting each chunked concept once
    pub concepts: usize,
    /// Concepts that had to be split into chunks
    pub chunked_concepts: usize,
    /// Declared prerequisites left out because the learner has mastered them
    pub mastered_prerequisites: usize,
}

impl PlanSummary {
    pub fn from_steps(steps: &[PlanStep]) -> Self {
        let taught: AHashSet<&ConceptId> = steps.iter().map(|s| &s.base_concept).collect();
        let chunked: AHashSet<&ConceptId> = steps
            .iter()
            .filter(|s| s.is_chunk())
            .map(|s| &s.base_concept)
            .collect();
        let mastered: AHashSet<&ConceptId> = steps
            .iter()
            .flat_map(|s| s.prerequisites.iter())
            .filter(|p| !taught.contains(*p))
            .collect();

        Self {
            total_minutes: steps.iter().map(|s| u64::from(s.duration_minutes)).sum(),
            sessions: steps.len(),
            concepts: taught.len(),
            chunked_concepts: chunked.len(),
            mastered_prerequisites: mastered.len(),
        }
    }
}

/// Ordered, annotated study plan for one learner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPlan {
    pub steps: Vec<PlanStep>,
    pub summary: PlanSummary,
}

impl LearningPlan {
    pub fn new(steps: Vec<PlanStep>) -> Self {
        let summary = PlanSummary::from_steps(&steps);
        Self { steps, summary }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlanStep> {
        self.steps.iter()
    }

    /// Catalog concepts in teaching order, chunks collapsed
    pub fn concept_order(&self) -> Vec<&ConceptId> {
        let mut order: Vec<&ConceptId> = Vec::new();
        for step in &self.steps {
            if order.last() != Some(&&step.base_concept) {
                order.push(&step.base_concept);
            }
        }
        order
    }

    /// Steps for one catalog concept, in order
    pub fn steps_for<'a>(&'a self, concept: &'a str) -> impl Iterator<Item = &'a PlanStep> + 'a {
        self.steps
            .iter()
            .filter(move |s| s.base_concept.as_str() == concept)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ConceptDefinition;
    use crate::core::types::ConceptCategory;
    use crate::planner::chunker::chunk;

    fn steps() -> Vec<PlanStep> {
        let arithmetic = ConceptDefinition::new("arithmetic", ConceptCategory::Procedural)
            .with_duration(30);
        let fractions = ConceptDefinition::new("fractions", ConceptCategory::Procedural)
            .with_prerequisites(["arithmetic", "counting"])
            .with_duration(90);

        let mut steps = vec![PlanStep::from_definition(&arithmetic)];
        steps.extend(chunk(PlanStep::from_definition(&fractions), 60));
        steps
    }

    #[test]
    fn test_summary() {
        let plan = LearningPlan::new(steps());
        assert_eq!(
            plan.summary,
            PlanSummary {
                total_minutes: 120,
                sessions: 3,
                concepts: 2,
                chunked_concepts: 1,
                mastered_prerequisites: 1,
            }
        );
    }

    #[test]
    fn test_total_minutes_exceeds_u32() {
        let long = |id: &str| {
            let def = ConceptDefinition::new(id, ConceptCategory::Conceptual)
                .with_duration(3_000_000_000);
            PlanStep::from_definition(&def)
        };
        let plan = LearningPlan::new(vec![long("a"), long("b")]);
        assert_eq!(plan.summary.total_minutes, 6_000_000_000);
    }

    #[test]
    fn test_concept_order_collapses_chunks() {
        let plan = LearningPlan::new(steps());
        let order: Vec<&str> = plan.concept_order().into_iter().map(ConceptId::as_str).collect();
        assert_eq!(order, vec!["arithmetic", "fractions"]);
        assert_eq!(plan.steps_for("fractions").count(), 2);
    }

    #[test]
    fn test_json_roundtrip_preserves_plan() {
        let plan = LearningPlan::new(steps());
        let json = plan.to_json().unwrap();
        let parsed: LearningPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, plan);
    }
}
