use crate::core::types::ConceptId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PathError {
    #[error("Catalog integrity error for {concept}: {reason}")]
    CatalogIntegrity { concept: ConceptId, reason: String },

    #[error("Unknown concept: {0}")]
    UnknownConcept(ConceptId),

    #[error("Cyclic prerequisite: {}", format_cycle(.0))]
    CyclicPrerequisite(Vec<ConceptId>),

    #[error("Invalid learner profile: {0}")]
    InvalidProfile(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

fn format_cycle(cycle: &[ConceptId]) -> String {
    cycle
        .iter()
        .map(ConceptId::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}

pub type Result<T> = std::result::Result<T, PathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_message_lists_path() {
        let err = PathError::CyclicPrerequisite(vec!["a".into(), "b".into(), "a".into()]);
        assert_eq!(err.to_string(), "Cyclic prerequisite: a -> b -> a");
    }
}
