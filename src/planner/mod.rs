//! Learning path planning pipeline
//!
//! resolve -> adjust -> chunk -> annotate
//!
//! The resolver orders concepts so that no concept precedes a prerequisite
//! the learner has not yet mastered. Later stages rescale each step to the
//! learner's ability, split steps that outlast their attention span, and
//! pick a delivery modality.

pub mod chunker;
pub mod display;
pub mod duration;
pub mod modality;
pub mod pipeline;
pub mod plan;
pub mod resolver;
pub mod step;

pub use chunker::{chunk, chunk_with_separator, DEFAULT_CHUNK_SEPARATOR};
pub use display::render_text;
pub use duration::{adjust, adjust_with_floor, adjusted_minutes, MIN_STEP_MINUTES};
pub use modality::{annotate, modality_for};
pub use pipeline::{LearningPlanner, PlanRequest};
pub use plan::{LearningPlan, PlanSummary};
pub use resolver::resolve;
pub use step::{ChunkIndex, PlanStep};
