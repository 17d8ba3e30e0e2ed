//! Concept catalog with integrity checks and indexed lookup

use ahash::{AHashMap, AHashSet};
use tracing::debug;

use crate::catalog::definitions::{ConceptDefinition, CONCEPT_LIBRARY};
use crate::core::error::{PathError, Result};
use crate::core::types::{ConceptCategory, ConceptId};

/// Traversal mark for the eager cycle scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Read-only catalog of concept definitions
///
/// Definitions keep their declaration order; lookups go through a hash index.
#[derive(Debug, Clone, Default)]
pub struct ConceptCatalog {
    concepts: Vec<ConceptDefinition>,
    index: AHashMap<ConceptId, usize>,
}

impl ConceptCatalog {
    /// Build a catalog, rejecting duplicate ids, malformed fields and
    /// prerequisites that name undefined concepts
    pub fn from_definitions(concepts: Vec<ConceptDefinition>) -> Result<Self> {
        let mut seen = AHashSet::with_capacity(concepts.len());
        for def in &concepts {
            if !seen.insert(def.id.clone()) {
                return Err(integrity(&def.id, "duplicate concept id"));
            }
            if let Some(reason) = def.field_violation() {
                return Err(integrity(&def.id, reason));
            }
        }

        for def in &concepts {
            if let Some(missing) = def.prerequisites.iter().find(|p| !seen.contains(*p)) {
                return Err(integrity(
                    &def.id,
                    format!("prerequisite {} is not defined", missing),
                ));
            }
        }

        let catalog = Self::indexed(concepts);
        debug!(concepts = catalog.len(), "concept catalog built");
        Ok(catalog)
    }

    /// The embedded default library
    ///
    /// The library table is checked by this module's tests, so it is indexed
    /// without re-running validation.
    pub fn with_defaults() -> Self {
        Self::indexed(CONCEPT_LIBRARY.iter().map(|seed| seed.to_definition()).collect())
    }

    fn indexed(concepts: Vec<ConceptDefinition>) -> Self {
        let index = concepts
            .iter()
            .enumerate()
            .map(|(i, def)| (def.id.clone(), i))
            .collect();
        Self { concepts, index }
    }

    /// Look up a concept definition
    pub fn lookup(&self, id: &str) -> Result<&ConceptDefinition> {
        self.get(id)
            .ok_or_else(|| PathError::UnknownConcept(ConceptId::from(id)))
    }

    /// Look up a concept definition, if present
    pub fn get(&self, id: &str) -> Option<&ConceptDefinition> {
        self.index.get(id).map(|&i| &self.concepts[i])
    }

    /// Declared prerequisites of a concept (empty for root concepts)
    pub fn prerequisites_of(&self, id: &str) -> Result<&[ConceptId]> {
        self.lookup(id).map(|def| def.prerequisites.as_slice())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// All definitions in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &ConceptDefinition> {
        self.concepts.iter()
    }

    /// Definitions in one category, in declaration order
    pub fn by_category(
        &self,
        category: ConceptCategory,
    ) -> impl Iterator<Item = &ConceptDefinition> {
        self.concepts.iter().filter(move |def| def.category == category)
    }

    /// Scan the whole prerequisite graph for a cycle
    ///
    /// Returns the first cycle found as a closed path (`[a, b, a]`), walking
    /// from dependent concept to prerequisite.
    pub fn find_cycle(&self) -> Option<Vec<ConceptId>> {
        let mut marks = vec![Mark::Unvisited; self.concepts.len()];

        for root in 0..self.concepts.len() {
            if marks[root] != Mark::Unvisited {
                continue;
            }

            // (concept index, next prerequisite to visit)
            let mut stack: Vec<(usize, usize)> = vec![(root, 0)];
            marks[root] = Mark::InProgress;

            while let Some((node, next)) = stack.last_mut() {
                let node = *node;
                let prereqs = &self.concepts[node].prerequisites;

                if *next >= prereqs.len() {
                    marks[node] = Mark::Done;
                    stack.pop();
                    continue;
                }

                let prereq = &prereqs[*next];
                *next += 1;
                let Some(&child) = self.index.get(prereq) else {
                    continue;
                };

                match marks[child] {
                    Mark::Unvisited => {
                        marks[child] = Mark::InProgress;
                        stack.push((child, 0));
                    }
                    Mark::InProgress => {
                        let start = stack
                            .iter()
                            .position(|&(i, _)| i == child)
                            .unwrap_or(0);
                        let mut cycle: Vec<ConceptId> = stack[start..]
                            .iter()
                            .map(|&(i, _)| self.concepts[i].id.clone())
                            .collect();
                        cycle.push(self.concepts[child].id.clone());
                        return Some(cycle);
                    }
                    Mark::Done => {}
                }
            }
        }

        None
    }

    /// Fail with `CyclicPrerequisite` if the graph contains a cycle
    pub fn ensure_acyclic(&self) -> Result<()> {
        match self.find_cycle() {
            Some(cycle) => Err(PathError::CyclicPrerequisite(cycle)),
            None => Ok(()),
        }
    }
}

fn integrity(id: &ConceptId, reason: impl Into<String>) -> PathError {
    PathError::CatalogIntegrity {
        concept: id.clone(),
        reason: reason.into(),
    }
}
