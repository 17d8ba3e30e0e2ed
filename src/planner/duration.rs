//! Duration adjustment by cognitive ability
//!
//! duration = round(nominal * (2 - ability))
//!
//! Ability 1.0 halves the nominal time, 0.0 doubles it, 0.5 scales by 1.5.

use crate::planner::step::PlanStep;

/// Floor applied by `adjust`
pub const MIN_STEP_MINUTES: u32 = 1;

/// Scale a nominal duration, rounding half away from zero, never below `floor`
///
/// Callers are expected to pass a validated ability. Out-of-range values are
/// clamped to [0, 1]; NaN yields `floor`. Catalog durations are bounded so the
/// doubled value fits a `u32`; larger hand-built nominals saturate at `u32::MAX`.
pub fn adjusted_minutes(nominal: u32, ability: f32, floor: u32) -> u32 {
    if ability.is_nan() {
        return floor;
    }
    let ability = f64::from(ability.clamp(0.0, 1.0));
    let scaled = (f64::from(nominal) * (2.0 - ability)).round() as u64;
    u32::try_from(scaled).unwrap_or(u32::MAX).max(floor)
}

/// Rescale a step's duration for the learner's ability
pub fn adjust(step: PlanStep, ability: f32) -> PlanStep {
    adjust_with_floor(step, ability, MIN_STEP_MINUTES)
}

/// Rescale a step's duration with an explicit minimum
pub fn adjust_with_floor(mut step: PlanStep, ability: f32, floor: u32) -> PlanStep {
    step.duration_minutes = adjusted_minutes(step.nominal_duration_minutes, ability, floor.max(1));
    step
}
