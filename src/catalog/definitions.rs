//! Concept definitions and the embedded default library

use serde::{Deserialize, Serialize};

use crate::core::types::{BloomLevel, ConceptCategory, ConceptId};

/// Nominal study time for concepts without measured cost data (minutes)
pub const DEFAULT_DURATION_MINUTES: u32 = 120;

/// Cognitive load for concepts without measured cost data
pub const DEFAULT_COGNITIVE_LOAD: u8 = 5;

/// Mastery a prerequisite needs before a dependent concept can be taught
pub const DEFAULT_MASTERY_THRESHOLD: f32 = 0.8;

/// Largest nominal duration whose doubled (ability 0.0) value still fits a `u32`
pub const MAX_NOMINAL_DURATION_MINUTES: u32 = u32::MAX / 2;

/// Definition of a concept in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptDefinition {
    pub id: ConceptId,
    /// Declared prerequisites, in the order they are expanded
    pub prerequisites: Vec<ConceptId>,
    /// Static difficulty rating, 1 (trivial) to 10 (very demanding)
    pub cognitive_load: u8,
    pub bloom_level: BloomLevel,
    /// Study time for a learner of average ability
    pub nominal_duration_minutes: u32,
    /// Mastery each prerequisite must reach before this concept is taught
    pub mastery_threshold: f32,
    pub category: ConceptCategory,
    pub objectives: Vec<String>,
}

impl ConceptDefinition {
    /// Build a definition with default cost metadata and no prerequisites
    pub fn new(id: impl Into<ConceptId>, category: ConceptCategory) -> Self {
        let id = id.into();
        let objectives = default_objectives(&id);
        Self {
            id,
            prerequisites: Vec::new(),
            cognitive_load: DEFAULT_COGNITIVE_LOAD,
            bloom_level: BloomLevel::Understand,
            nominal_duration_minutes: DEFAULT_DURATION_MINUTES,
            mastery_threshold: DEFAULT_MASTERY_THRESHOLD,
            category,
            objectives,
        }
    }

    pub fn with_prerequisites<I, P>(mut self, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<ConceptId>,
    {
        self.prerequisites = prerequisites.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.nominal_duration_minutes = minutes;
        self
    }

    pub fn with_cognitive_load(mut self, load: u8) -> Self {
        self.cognitive_load = load;
        self
    }

    pub fn with_bloom_level(mut self, level: BloomLevel) -> Self {
        self.bloom_level = level;
        self
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.mastery_threshold = threshold;
        self
    }

    pub fn with_objectives<I, S>(mut self, objectives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.objectives = objectives.into_iter().map(Into::into).collect();
        self
    }

    /// Check the definition's own fields, ignoring references to other concepts
    pub(crate) fn field_violation(&self) -> Option<String> {
        if !(1..=10).contains(&self.cognitive_load) {
            return Some(format!(
                "cognitive_load {} outside 1..=10",
                self.cognitive_load
            ));
        }
        if self.nominal_duration_minutes == 0 {
            return Some("nominal_duration_minutes must be positive".into());
        }
        if self.nominal_duration_minutes > MAX_NOMINAL_DURATION_MINUTES {
            return Some(format!(
                "nominal_duration_minutes {} exceeds {}",
                self.nominal_duration_minutes, MAX_NOMINAL_DURATION_MINUTES
            ));
        }
        if !(self.mastery_threshold > 0.0 && self.mastery_threshold <= 1.0) {
            return Some(format!(
                "mastery_threshold {} outside (0, 1]",
                self.mastery_threshold
            ));
        }
        if self.prerequisites.contains(&self.id) {
            return Some("concept lists itself as a prerequisite".into());
        }
        None
    }
}

/// Objectives used when a concept declares none
pub fn default_objectives(id: &ConceptId) -> Vec<String> {
    vec![format!("Master {} concepts", id)]
}

/// Compile-time form of a concept definition for the embedded library
#[derive(Debug, Clone, Copy)]
pub struct ConceptSeed {
    pub id: &'static str,
    pub prerequisites: &'static [&'static str],
    pub cognitive_load: u8,
    pub bloom_level: BloomLevel,
    pub nominal_duration_minutes: u32,
    pub mastery_threshold: f32,
    pub category: ConceptCategory,
    /// Empty means "use the generated default objective"
    pub objectives: &'static [&'static str],
}

impl ConceptSeed {
    pub fn to_definition(&self) -> ConceptDefinition {
        let id = ConceptId::from(self.id);
        let objectives = if self.objectives.is_empty() {
            default_objectives(&id)
        } else {
            self.objectives.iter().map(|s| s.to_string()).collect()
        };
        ConceptDefinition {
            id,
            prerequisites: self.prerequisites.iter().map(|p| ConceptId::from(*p)).collect(),
            cognitive_load: self.cognitive_load,
            bloom_level: self.bloom_level,
            nominal_duration_minutes: self.nominal_duration_minutes,
            mastery_threshold: self.mastery_threshold,
            category: self.category,
            objectives,
        }
    }
}

/// Shorthand for library entries that have no measured cost data
const fn basic(
    id: &'static str,
    prerequisites: &'static [&'static str],
    category: ConceptCategory,
) -> ConceptSeed {
    ConceptSeed {
        id,
        prerequisites,
        cognitive_load: DEFAULT_COGNITIVE_LOAD,
        bloom_level: BloomLevel::Understand,
        nominal_duration_minutes: DEFAULT_DURATION_MINUTES,
        mastery_threshold: DEFAULT_MASTERY_THRESHOLD,
        category,
        objectives: &[],
    }
}

/// Default concept library - mathematics, science and language arts
pub static CONCEPT_LIBRARY: &[ConceptSeed] = &[
    // === MATHEMATICS ===
    ConceptSeed {
        id: "basic_arithmetic",
        prerequisites: &[],
        cognitive_load: 2,
        bloom_level: BloomLevel::Remember,
        nominal_duration_minutes: 120,
        mastery_threshold: 0.8,
        category: ConceptCategory::Procedural,
        objectives: &[
            "Perform addition and subtraction with whole numbers",
            "Perform multiplication and division with whole numbers",
            "Understand place value system",
        ],
    },
    ConceptSeed {
        id: "fractions",
        prerequisites: &["basic_arithmetic"],
        cognitive_load: 4,
        bloom_level: BloomLevel::Understand,
        nominal_duration_minutes: 180,
        mastery_threshold: 0.85,
        category: ConceptCategory::Procedural,
        objectives: &[
            "Understand fraction as part of a whole",
            "Add and subtract fractions with like denominators",
            "Compare and order fractions",
        ],
    },
    basic("decimals", &["fractions", "basic_arithmetic"], ConceptCategory::Procedural),
    basic("percentages", &["fractions", "decimals"], ConceptCategory::Procedural),
    basic("basic_algebra", &["basic_arithmetic", "fractions"], ConceptCategory::Procedural),
    ConceptSeed {
        id: "linear_equations",
        prerequisites: &["basic_algebra"],
        cognitive_load: 5,
        bloom_level: BloomLevel::Apply,
        nominal_duration_minutes: 240,
        mastery_threshold: 0.9,
        category: ConceptCategory::Procedural,
        objectives: &[
            "Solve one-variable linear equations",
            "Graph linear equations",
            "Understand slope and y-intercept",
        ],
    },
    ConceptSeed {
        id: "quadratic_equations",
        prerequisites: &["linear_equations", "basic_algebra"],
        cognitive_load: 7,
        bloom_level: BloomLevel::Analyze,
        nominal_duration_minutes: 300,
        mastery_threshold: 0.9,
        category: ConceptCategory::Procedural,
        objectives: &[],
    },
    basic("functions", &["linear_equations", "basic_algebra"], ConceptCategory::Conceptual),
    ConceptSeed {
        id: "calculus_basics",
        prerequisites: &["functions", "quadratic_equations"],
        cognitive_load: 9,
        bloom_level: BloomLevel::Evaluate,
        nominal_duration_minutes: 480,
        mastery_threshold: 0.95,
        category: ConceptCategory::Metacognitive,
        objectives: &[],
    },
    // === SCIENCE ===
    basic("scientific_method", &[], ConceptCategory::Conceptual),
    basic("basic_physics", &["basic_arithmetic", "scientific_method"], ConceptCategory::Conceptual),
    basic("mechanics", &["basic_physics", "basic_algebra"], ConceptCategory::Conceptual),
    basic("thermodynamics", &["mechanics", "basic_physics"], ConceptCategory::Conceptual),
    basic(
        "chemistry_basics",
        &["scientific_method", "basic_arithmetic"],
        ConceptCategory::Conceptual,
    ),
    basic("atomic_structure", &["chemistry_basics"], ConceptCategory::Conceptual),
    basic("chemical_bonding", &["atomic_structure"], ConceptCategory::Conceptual),
    // === LANGUAGE ARTS ===
    basic("phonics", &[], ConceptCategory::Factual),
    basic("basic_reading", &["phonics"], ConceptCategory::Procedural),
    basic("reading_comprehension", &["basic_reading"], ConceptCategory::Conceptual),
    basic("grammar_basics", &["basic_reading"], ConceptCategory::Factual),
    basic(
        "essay_writing",
        &["grammar_basics", "reading_comprehension"],
        ConceptCategory::Metacognitive,
    ),
    basic(
        "literary_analysis",
        &["essay_writing", "reading_comprehension"],
        ConceptCategory::Metacognitive,
    ),
];
