//! Concept catalog - the read-only knowledge base every plan is built from
//!
//! Concepts declare their prerequisites, cost metadata and objectives. The
//! catalog is validated once when it is built and shared by reference
//! afterwards.

pub mod definitions;
pub mod loader;
pub mod registry;

pub use definitions::{ConceptDefinition, ConceptSeed, CONCEPT_LIBRARY};
pub use registry::ConceptCatalog;
