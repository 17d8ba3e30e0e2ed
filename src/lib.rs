//! Learning Path - prerequisite-aware study planning
//!
//! Given target concepts, a prerequisite catalog and a learner profile,
//! produce an ordered, time-boxed plan: prerequisites first, durations
//! scaled to the learner, long steps split to fit their attention span.

pub mod catalog;
pub mod core;
pub mod learner;
pub mod planner;

pub use crate::catalog::{ConceptCatalog, ConceptDefinition};
pub use crate::core::config::PlannerConfig;
pub use crate::core::error::{PathError, Result};
pub use crate::core::types::{BloomLevel, ConceptCategory, ConceptId, LearningStyle, Modality};
pub use crate::learner::LearnerProfile;
pub use crate::planner::{LearningPlan, LearningPlanner, PlanRequest, PlanStep, PlanSummary};
