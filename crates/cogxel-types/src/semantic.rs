// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Semantic Labels and Identifiers
// ─────────────────────────────────────────────────────────────────────
//! Value types naming the signals a cognitive model works with.
//!
//! A [`SemanticLabel`] is the name of a signal. A [`SemanticIdentifier`]
//! is the stable integer handle a registry bound to that label. Identity
//! of an identifier is its index alone: two identifiers minted by the same
//! registry with the same index always carry the same label.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{CognitionError, CognitionResult};

/// Immutable signal name. Equality, ordering and hashing are by name.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SemanticLabel {
    name: Arc<str>,
}

impl SemanticLabel {
    /// Create a label. Empty or all-whitespace names are rejected.
    pub fn new(name: impl Into<String>) -> CognitionResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CognitionError::invalid("semantic label name must not be empty"));
        }
        Ok(Self { name: name.into() })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl TryFrom<String> for SemanticLabel {
    type Error = CognitionError;

    fn try_from(name: String) -> CognitionResult<Self> {
        Self::new(name)
    }
}

impl TryFrom<&str> for SemanticLabel {
    type Error = CognitionError;

    fn try_from(name: &str) -> CognitionResult<Self> {
        Self::new(name)
    }
}

impl From<SemanticLabel> for String {
    fn from(label: SemanticLabel) -> Self {
        label.name.to_string()
    }
}

impl fmt::Debug for SemanticLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SemanticLabel({:?})", &*self.name)
    }
}

impl fmt::Display for SemanticLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A label bound to a registry-assigned index.
///
/// Minted by a registry; the index is never reused or renumbered.
/// `Eq`, `Hash` and `Ord` look only at the index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticIdentifier {
    label: SemanticLabel,
    index: usize,
}

impl SemanticIdentifier {
    pub fn new(label: SemanticLabel, index: usize) -> Self {
        Self { label, index }
    }

    pub fn label(&self) -> &SemanticLabel {
        &self.label
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl PartialEq for SemanticIdentifier {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for SemanticIdentifier {}

impl Hash for SemanticIdentifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl PartialOrd for SemanticIdentifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SemanticIdentifier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}

impl fmt::Display for SemanticIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.label, self.index)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_label_rejects_empty() {
        assert!(matches!(
            SemanticLabel::new(""),
            Err(CognitionError::InvalidArgument(_))
        ));
        assert!(SemanticLabel::new(" \t").is_err());
    }

    #[test]
    fn test_label_equality_by_name() {
        let a = SemanticLabel::new("vision").unwrap();
        let b = SemanticLabel::try_from("vision").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "vision");
    }

    #[test]
    fn test_label_ordering_by_name() {
        let a = SemanticLabel::new("alpha").unwrap();
        let b = SemanticLabel::new("beta").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_identifier_identity_is_index() {
        let x = SemanticLabel::new("x").unwrap();
        let y = SemanticLabel::new("y").unwrap();
        let a = SemanticIdentifier::new(x.clone(), 3);
        let b = SemanticIdentifier::new(y, 3);
        let c = SemanticIdentifier::new(x, 4);
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_identifier_display() {
        let id = SemanticIdentifier::new(SemanticLabel::new("touch").unwrap(), 7);
        assert_eq!(id.to_string(), "touch#7");
    }

    #[test]
    fn test_label_json_rejects_empty() {
        assert!(serde_json::from_str::<SemanticLabel>(r#""""#).is_err());
        let label: SemanticLabel = serde_json::from_str(r#""smell""#).unwrap();
        assert_eq!(label.name(), "smell");
    }
}
