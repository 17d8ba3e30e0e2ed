//! Text rendering of a plan for terminals and logs

use std::fmt::Write;

use crate::planner::plan::LearningPlan;

/// Numbered listing of every step followed by the plan totals
pub fn render_text(plan: &LearningPlan) -> String {
    let mut out = String::new();

    for (i, step) in plan.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, step.concept);
        let _ = writeln!(out, "   Duration: {} minutes", step.duration_minutes);
        let _ = writeln!(out, "   Cognitive Load: {}/10", step.cognitive_load);
        let _ = writeln!(out, "   Bloom Level: {}", step.bloom_level.name());
        let _ = writeln!(out, "   Modality: {}", step.modality);
        if let Some(chunk) = step.chunk_index {
            let _ = writeln!(out, "   Part: {} of {}", chunk.position, chunk.total);
        }
        let prereqs: Vec<&str> = step.prerequisites.iter().map(|p| p.as_str()).collect();
        if prereqs.is_empty() {
            let _ = writeln!(out, "   Prerequisites: none");
        } else {
            let _ = writeln!(out, "   Prerequisites: {}", prereqs.join(", "));
        }
        out.push('\n');
    }

    let summary = &plan.summary;
    let _ = writeln!(
        out,
        "{} sessions, {} concepts, {} minutes total ({} mastered prerequisites skipped)",
        summary.sessions, summary.concepts, summary.total_minutes, summary.mastered_prerequisites
    );
    out
}
