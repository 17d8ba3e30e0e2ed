//! Delivery modality from concept category and learning style

use crate::core::types::{ConceptCategory, LearningStyle, Modality};
use crate::planner::step::PlanStep;

/// Recommended modality for a category/style pair
///
/// Metacognitive material gets reflective exercises whatever the style.
/// Pairs without a dedicated entry, including every balanced learner, fall
/// back to mixed media.
pub fn modality_for(category: ConceptCategory, style: LearningStyle) -> Modality {
    use ConceptCategory::*;
    use LearningStyle::*;

    match (category, style) {
        (Metacognitive, _) => Modality::ReflectiveExercises,
        (Procedural, Kinesthetic) => Modality::InteractivePractice,
        (Procedural, Visual) => Modality::StepByStepVisual,
        (Procedural, Auditory) => Modality::GuidedAudio,
        (Conceptual, Visual) => Modality::DiagramsAndModels,
        (Conceptual, Auditory) => Modality::ExplanatoryAudio,
        (Conceptual, Kinesthetic) => Modality::HandsOnExploration,
        (Factual, Visual) => Modality::FlashcardsVisual,
        (Factual, Auditory) => Modality::RepetitionAudio,
        _ => Modality::MixedMedia,
    }
}

/// Attach the recommended modality to a step
pub fn annotate(mut step: PlanStep, style: LearningStyle) -> PlanStep {
    step.modality = modality_for(step.category, style);
    step
}
