// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Model Input
// ─────────────────────────────────────────────────────────────────────
//! Opaque per-cycle input handed to `CognitiveModel::update`.
//!
//! The engine never looks inside an input; perception modules downcast
//! it to the encodings they understand.

use std::any::Any;
use std::fmt;

use cogxel_memory::SemanticIdentifierMap;
use cogxel_types::{CognitionError, CognitionResult, SemanticIdentifier, SemanticLabel};

pub trait ModelInput: Any + Send + Sync + fmt::Debug {
    fn as_any(&self) -> &dyn Any;
}

/// Parallel identifier / activation arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayInput {
    identifiers: Vec<SemanticIdentifier>,
    values: Vec<f64>,
}

impl ArrayInput {
    pub fn new(identifiers: Vec<SemanticIdentifier>, values: Vec<f64>) -> CognitionResult<Self> {
        if identifiers.len() != values.len() {
            return Err(CognitionError::InvalidArgument(format!(
                "array input has {} identifiers but {} values",
                identifiers.len(),
                values.len()
            )));
        }
        Ok(Self {
            identifiers,
            values,
        })
    }

    /// Resolve `labels` through `registry` (registering unseen ones).
    pub fn from_labels(
        registry: &SemanticIdentifierMap,
        labels: &[SemanticLabel],
        values: Vec<f64>,
    ) -> CognitionResult<Self> {
        if labels.len() != values.len() {
            return Err(CognitionError::InvalidArgument(format!(
                "array input has {} labels but {} values",
                labels.len(),
                values.len()
            )));
        }
        Self::new(registry.add_labels(labels), values)
    }

    pub fn identifiers(&self) -> &[SemanticIdentifier] {
        &self.identifiers
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SemanticIdentifier, f64)> {
        self.identifiers.iter().zip(self.values.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ModelInput for ArrayInput {
    fn as_any(&self) -> &dyn Any {
        self
    }
}
