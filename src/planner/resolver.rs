//! Graph resolver - depth-first prerequisite expansion with a mastery gate
//!
//! Targets are expanded left to right. Each concept expands the
//! prerequisites its learner has not mastered to the concept's threshold,
//! in declared order, before it is emitted itself. Mastered prerequisites
//! stay listed on the step but are not scheduled.
//!
//! Expansion runs on an explicit stack of frames, one per concept on the
//! active path.

use ahash::AHashMap;
use tracing::{debug, trace};

use crate::catalog::{ConceptCatalog, ConceptDefinition};
use crate::core::error::{PathError, Result};
use crate::core::types::ConceptId;
use crate::learner::LearnerProfile;
use crate::planner::step::PlanStep;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    /// On the active expansion path
    InProgress,
    /// Emitted into the plan
    Done,
}

/// Concept being expanded and the next prerequisite to examine
struct Frame<'a> {
    def: &'a ConceptDefinition,
    next: usize,
}

/// Per-call resolution state
struct Resolver<'a> {
    catalog: &'a ConceptCatalog,
    profile: &'a LearnerProfile,
    states: AHashMap<&'a str, VisitState>,
    path: Vec<&'a ConceptId>,
    steps: Vec<PlanStep>,
}

impl<'a> Resolver<'a> {
    fn new(catalog: &'a ConceptCatalog, profile: &'a LearnerProfile) -> Self {
        Self {
            catalog,
            profile,
            states: AHashMap::new(),
            path: Vec::new(),
            steps: Vec::new(),
        }
    }

    /// Expand one target with an explicit work stack, so chain depth is
    /// bounded by memory rather than the thread stack
    fn expand(&mut self, target: &'a ConceptDefinition) -> Result<()> {
        if !self.enter(target)? {
            return Ok(());
        }
        let catalog = self.catalog;
        let mut stack = vec![Frame { def: target, next: 0 }];

        while let Some(frame) = stack.last_mut() {
            let def = frame.def;
            let Some(prereq) = def.prerequisites.get(frame.next) else {
                stack.pop();
                self.finish(def);
                continue;
            };
            frame.next += 1;

            let prereq_def = catalog.lookup(prereq.as_str())?;
            if self
                .profile
                .meets_threshold(prereq.as_str(), def.mastery_threshold)
            {
                trace!(concept = %def.id, prerequisite = %prereq, "prerequisite already mastered");
                continue;
            }
            if self.enter(prereq_def)? {
                stack.push(Frame { def: prereq_def, next: 0 });
            }
        }
        Ok(())
    }

    /// Mark a concept in progress; false if it is already scheduled
    fn enter(&mut self, def: &'a ConceptDefinition) -> Result<bool> {
        match self.states.get(def.id.as_str()) {
            Some(VisitState::Done) => return Ok(false),
            Some(VisitState::InProgress) => return Err(self.cycle_error(&def.id)),
            None => {}
        }
        self.states.insert(def.id.as_str(), VisitState::InProgress);
        self.path.push(&def.id);
        Ok(true)
    }

    fn finish(&mut self, def: &'a ConceptDefinition) {
        self.path.pop();
        self.states.insert(def.id.as_str(), VisitState::Done);
        trace!(concept = %def.id, position = self.steps.len(), "concept scheduled");
        self.steps.push(PlanStep::from_definition(def));
    }

    /// Closed cycle from the first occurrence of `repeated` on the path
    fn cycle_error(&self, repeated: &ConceptId) -> PathError {
        let start = self
            .path
            .iter()
            .position(|id| *id == repeated)
            .unwrap_or(0);
        let mut cycle: Vec<ConceptId> = self.path[start..].iter().map(|id| (*id).clone()).collect();
        cycle.push(repeated.clone());
        PathError::CyclicPrerequisite(cycle)
    }
}

/// Expand targets into an ordered list of raw (nominal-duration) steps
///
/// Fails without a partial plan on unknown concepts or a prerequisite cycle
/// along gating edges.
pub fn resolve<S: AsRef<str>>(
    catalog: &ConceptCatalog,
    targets: &[S],
    profile: &LearnerProfile,
) -> Result<Vec<PlanStep>> {
    let mut resolver = Resolver::new(catalog, profile);

    for target in targets {
        let def = catalog.lookup(target.as_ref())?;
        resolver.expand(def)?;
    }

    debug!(
        targets = targets.len(),
        steps = resolver.steps.len(),
        "resolved prerequisite order"
    );
    Ok(resolver.steps)
}
