//! Planning pipeline - orchestrates the four stages
//!
//! validate profile -> resolve -> adjust -> chunk -> annotate
//!
//! Uses rayon to plan large batches of independent learners in parallel.
//! All workers share the catalog by reference; each resolution keeps its
//! own visit state.

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::catalog::ConceptCatalog;
use crate::core::config::PlannerConfig;
use crate::core::error::Result;
use crate::core::types::ConceptId;
use crate::learner::LearnerProfile;
use crate::planner::chunker::chunk_with_separator;
use crate::planner::duration::adjust_with_floor;
use crate::planner::modality::annotate;
use crate::planner::plan::LearningPlan;
use crate::planner::resolver::resolve;

/// One learner's planning request for batch planning
#[derive(Debug, Clone)]
pub struct PlanRequest {
    pub targets: Vec<ConceptId>,
    pub profile: LearnerProfile,
}

impl PlanRequest {
    pub fn new<I, S>(targets: I, profile: LearnerProfile) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ConceptId>,
    {
        Self {
            targets: targets.into_iter().map(Into::into).collect(),
            profile,
        }
    }
}

/// Plans learning paths against a shared catalog
#[derive(Debug, Clone)]
pub struct LearningPlanner<'a> {
    catalog: &'a ConceptCatalog,
    config: PlannerConfig,
}

impl<'a> LearningPlanner<'a> {
    pub fn new(catalog: &'a ConceptCatalog, config: PlannerConfig) -> Self {
        Self { catalog, config }
    }

    pub fn with_default_config(catalog: &'a ConceptCatalog) -> Self {
        Self::new(catalog, PlannerConfig::default())
    }

    pub fn catalog(&self) -> &'a ConceptCatalog {
        self.catalog
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Build a complete plan, or fail without producing one
    pub fn plan<S: AsRef<str>>(
        &self,
        targets: &[S],
        profile: &LearnerProfile,
    ) -> Result<LearningPlan> {
        profile.validate()?;
        self.warn_unknown_mastery(profile);

        let raw = resolve(self.catalog, targets, profile)?;
        let raw_len = raw.len();

        let steps: Vec<_> = raw
            .into_iter()
            .map(|step| {
                adjust_with_floor(step, profile.cognitive_ability, self.config.min_step_minutes)
            })
            .flat_map(|step| {
                chunk_with_separator(
                    step,
                    profile.attention_span_minutes,
                    &self.config.chunk_label_separator,
                )
            })
            .map(|step| annotate(step, profile.learning_style))
            .collect();

        let plan = LearningPlan::new(steps);
        debug!(
            concepts = raw_len,
            sessions = plan.summary.sessions,
            total_minutes = plan.summary.total_minutes,
            "learning plan built"
        );
        Ok(plan)
    }

    /// Plan a batch of independent requests; results keep input order
    pub fn plan_many(&self, requests: &[PlanRequest]) -> Vec<Result<LearningPlan>> {
        if requests.len() < self.config.parallel_threshold {
            return requests
                .iter()
                .map(|r| self.plan(r.targets.as_slice(), &r.profile))
                .collect();
        }

        debug!(requests = requests.len(), "planning batch in parallel");
        requests
            .par_iter()
            .map(|r| self.plan(r.targets.as_slice(), &r.profile))
            .collect()
    }

    fn warn_unknown_mastery(&self, profile: &LearnerProfile) {
        for concept in profile.mastery.keys() {
            if !self.catalog.contains(concept.as_str()) {
                warn!(%concept, "mastery recorded for a concept missing from the catalog");
            }
        }
    }
}
