//! Load a concept catalog from TOML
//!
//! ```toml
//! [[concepts]]
//! id = "fractions"
//! prerequisites = ["basic_arithmetic"]
//! cognitive_load = 4
//! bloom_level = "understand"
//! duration_minutes = 180
//! mastery_threshold = 0.85
//! category = "procedural"
//! objectives = ["Compare and order fractions"]
//! ```
//!
//! Omitted cost fields fall back to the library defaults.

use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

use crate::catalog::definitions::{
    default_objectives, ConceptDefinition, DEFAULT_COGNITIVE_LOAD, DEFAULT_DURATION_MINUTES,
    DEFAULT_MASTERY_THRESHOLD,
};
use crate::catalog::ConceptCatalog;
use crate::core::config::PlannerConfig;
use crate::core::error::{PathError, Result};
use crate::core::types::{BloomLevel, ConceptCategory, ConceptId};

/// TOML representation of a catalog file
#[derive(Debug, Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    concepts: Vec<TomlConcept>,
}

/// TOML representation of a single concept
#[derive(Debug, Deserialize)]
struct TomlConcept {
    id: String,
    #[serde(default)]
    prerequisites: Vec<String>,
    #[serde(default = "default_load")]
    cognitive_load: u8,
    #[serde(default = "default_bloom")]
    bloom_level: String,
    #[serde(default = "default_duration")]
    duration_minutes: u32,
    #[serde(default = "default_threshold")]
    mastery_threshold: f32,
    category: String,
    #[serde(default)]
    objectives: Vec<String>,
}

fn default_load() -> u8 {
    DEFAULT_COGNITIVE_LOAD
}

fn default_bloom() -> String {
    "understand".to_string()
}

fn default_duration() -> u32 {
    DEFAULT_DURATION_MINUTES
}

fn default_threshold() -> f32 {
    DEFAULT_MASTERY_THRESHOLD
}

impl TomlConcept {
    fn into_definition(self) -> Result<ConceptDefinition> {
        let id = ConceptId::from(self.id);

        let bloom_level = match self.bloom_level.to_lowercase().as_str() {
            "remember" => BloomLevel::Remember,
            "understand" => BloomLevel::Understand,
            "apply" => BloomLevel::Apply,
            "analyze" | "analyse" => BloomLevel::Analyze,
            "evaluate" => BloomLevel::Evaluate,
            "create" => BloomLevel::Create,
            other => {
                return Err(PathError::CatalogIntegrity {
                    concept: id,
                    reason: format!("unknown bloom level '{}'", other),
                })
            }
        };

        let category = match self.category.to_lowercase().as_str() {
            "procedural" => ConceptCategory::Procedural,
            "conceptual" => ConceptCategory::Conceptual,
            "factual" => ConceptCategory::Factual,
            "metacognitive" => ConceptCategory::Metacognitive,
            other => {
                return Err(PathError::CatalogIntegrity {
                    concept: id,
                    reason: format!("unknown category '{}'", other),
                })
            }
        };

        let objectives = if self.objectives.is_empty() {
            default_objectives(&id)
        } else {
            self.objectives
        };

        Ok(ConceptDefinition {
            id,
            prerequisites: self.prerequisites.into_iter().map(ConceptId::from).collect(),
            cognitive_load: self.cognitive_load,
            bloom_level,
            nominal_duration_minutes: self.duration_minutes,
            mastery_threshold: self.mastery_threshold,
            category,
            objectives,
        })
    }
}

/// Parse a catalog from a TOML string
pub fn parse_toml(content: &str) -> Result<ConceptCatalog> {
    let toml_data: TomlCatalog = toml::from_str(content)?;
    let definitions = toml_data
        .concepts
        .into_iter()
        .map(TomlConcept::into_definition)
        .collect::<Result<Vec<_>>>()?;
    ConceptCatalog::from_definitions(definitions)
}

/// Load a catalog from a TOML file
pub fn load_from_toml(path: &Path) -> Result<ConceptCatalog> {
    let content = std::fs::read_to_string(path)?;
    parse_toml(&content)
}

/// Load a catalog file and apply the configured load-time checks
pub fn load_catalog(path: &Path, config: &PlannerConfig) -> Result<ConceptCatalog> {
    let catalog = load_from_toml(path)?;
    check_catalog(&catalog, config)?;
    info!(path = %path.display(), concepts = catalog.len(), "loaded concept catalog");
    Ok(catalog)
}

/// Run the configured load-time checks on an already built catalog
pub fn check_catalog(catalog: &ConceptCatalog, config: &PlannerConfig) -> Result<()> {
    if config.reject_cyclic_catalog {
        catalog.ensure_acyclic()?;
    } else if let Some(cycle) = catalog.find_cycle() {
        warn!(?cycle, "catalog contains a prerequisite cycle");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_toml_parsing() {
        let toml_content = r#"
            [[concepts]]
            id = "arithmetic"
            category = "procedural"
            duration_minutes = 120

            [[concepts]]
            id = "fractions"
            prerequisites = ["arithmetic"]
            cognitive_load = 4
            bloom_level = "understand"
            duration_minutes = 180
            mastery_threshold = 0.85
            category = "procedural"
            objectives = ["Compare and order fractions"]
        "#;

        let catalog = parse_toml(toml_content).expect("Failed to parse TOML");
        assert_eq!(catalog.len(), 2);

        let fractions = catalog.lookup("fractions").unwrap();
        assert_eq!(fractions.prerequisites, vec![ConceptId::from("arithmetic")]);
        assert_eq!(fractions.mastery_threshold, 0.85);
        assert_eq!(fractions.objectives, vec!["Compare and order fractions".to_string()]);

        let arithmetic = catalog.lookup("arithmetic").unwrap();
        assert_eq!(arithmetic.cognitive_load, DEFAULT_COGNITIVE_LOAD);
        assert_eq!(arithmetic.bloom_level, BloomLevel::Understand);
        assert_eq!(arithmetic.objectives, vec!["Master arithmetic concepts".to_string()]);
    }

    #[test]
    fn test_catalog_toml_case_insensitive() {
        let toml_content = r#"
            [[concepts]]
            id = "phonics"
            bloom_level = "Remember"
            category = "FACTUAL"
        "#;

        let catalog = parse_toml(toml_content).expect("Should parse");
        let phonics = catalog.lookup("phonics").unwrap();
        assert_eq!(phonics.bloom_level, BloomLevel::Remember);
        assert_eq!(phonics.category, ConceptCategory::Factual);
    }

    #[test]
    fn test_catalog_toml_invalid_category() {
        let toml_content = r#"
            [[concepts]]
            id = "phonics"
            category = "musical"
        "#;

        let result = parse_toml(toml_content);
        assert!(matches!(result, Err(PathError::CatalogIntegrity { .. })));
    }

    #[test]
    fn test_catalog_toml_missing_prerequisite() {
        let toml_content = r#"
            [[concepts]]
            id = "fractions"
            prerequisites = ["arithmetic"]
            category = "procedural"
        "#;

        let result = parse_toml(toml_content);
        assert!(matches!(result, Err(PathError::CatalogIntegrity { .. })));
    }

    #[test]
    fn test_catalog_toml_syntax_error() {
        let result = parse_toml("[[concepts]\nid = ");
        assert!(matches!(result, Err(PathError::TomlError(_))));
    }

    #[test]
    fn test_cyclic_catalog_policy() {
        let toml_content = r#"
            [[concepts]]
            id = "a"
            prerequisites = ["b"]
            category = "conceptual"

            [[concepts]]
            id = "b"
            prerequisites = ["a"]
            category = "conceptual"
        "#;

        let catalog = parse_toml(toml_content).expect("References are valid");

        let strict = PlannerConfig::default();
        assert!(matches!(
            check_catalog(&catalog, &strict),
            Err(PathError::CyclicPrerequisite(_))
        ));

        let lenient = PlannerConfig {
            reject_cyclic_catalog: false,
            ..PlannerConfig::default()
        };
        assert!(check_catalog(&catalog, &lenient).is_ok());
    }

    #[test]
    fn test_load_shipped_catalog() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/concepts.toml");
        let catalog = load_catalog(&path, &PlannerConfig::default())
            .expect("Should load data/concepts.toml");

        let defaults = ConceptCatalog::with_defaults();
        assert_eq!(catalog.len(), defaults.len());
        for def in defaults.iter() {
            assert_eq!(catalog.lookup(def.id.as_str()).unwrap(), def);
        }
    }
}
