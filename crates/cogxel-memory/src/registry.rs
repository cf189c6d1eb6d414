// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Semantic Identifier Registry
// ─────────────────────────────────────────────────────────────────────
//! Shared label ↔ identifier bijection.
//!
//! One registry is usually shared (via `Arc`) by several models so that
//! identically named signals resolve to the same identifier everywhere.
//! Indices are assigned 0, 1, 2, … in first-seen order and are never
//! reclaimed.
//!
//! Thread-safe: `add_label`/`add_labels` hold the write lock across the
//! whole look-up-or-allocate step; lookups only take the read lock.

use std::collections::HashMap;

use parking_lot::RwLock;

use cogxel_types::{
    Cogxel, CogxelFactory, ModelConfig, SemanticIdentifier, SemanticLabel, MAX_REGISTRY_CAPACITY,
};

#[derive(Debug, Default)]
struct RegistryInner {
    by_label: HashMap<SemanticLabel, SemanticIdentifier>,
    by_index: Vec<SemanticIdentifier>,
}

impl RegistryInner {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            by_label: HashMap::with_capacity(capacity),
            by_index: Vec::with_capacity(capacity),
        }
    }

    fn add_label(&mut self, label: &SemanticLabel) -> SemanticIdentifier {
        if let Some(existing) = self.by_label.get(label) {
            return existing.clone();
        }
        let identifier = SemanticIdentifier::new(label.clone(), self.by_index.len());
        log::debug!("registry: allocated {identifier}");
        self.by_label.insert(label.clone(), identifier.clone());
        self.by_index.push(identifier.clone());
        identifier
    }
}

/// Grow-only registry of semantic identifiers.
#[derive(Debug, Default)]
pub struct SemanticIdentifierMap {
    inner: RwLock<RegistryInner>,
}

impl SemanticIdentifierMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: RwLock::new(RegistryInner::with_capacity(capacity)),
        }
    }

    /// Capacity hint capped at `MAX_REGISTRY_CAPACITY`, so an unvalidated
    /// config cannot force an oversized reservation.
    pub fn from_config(config: &ModelConfig) -> Self {
        Self::with_capacity(config.registry_capacity.min(MAX_REGISTRY_CAPACITY))
    }

    /// Identifier for `label`, allocating the next index on first sight.
    pub fn add_label(&self, label: &SemanticLabel) -> SemanticIdentifier {
        if let Some(existing) = self.find_identifier(label) {
            return existing;
        }
        // Re-checked under the write lock: another thread may have won.
        self.inner.write().add_label(label)
    }

    /// `add_label` for each input, in order, under one write lock.
    pub fn add_labels<'a, I>(&self, labels: I) -> Vec<SemanticIdentifier>
    where
        I: IntoIterator<Item = &'a SemanticLabel>,
    {
        let mut inner = self.inner.write();
        labels
            .into_iter()
            .map(|label| inner.add_label(label))
            .collect()
    }

    pub fn find_identifier(&self, label: &SemanticLabel) -> Option<SemanticIdentifier> {
        self.inner.read().by_label.get(label).cloned()
    }

    pub fn find_by_index(&self, index: usize) -> Option<SemanticIdentifier> {
        self.inner.read().by_index.get(index).cloned()
    }

    pub fn contains(&self, identifier: &SemanticIdentifier) -> bool {
        self.inner
            .read()
            .by_index
            .get(identifier.index())
            .is_some_and(|known| known.label() == identifier.label())
    }

    /// Snapshot of every registered identifier, in index order.
    pub fn identifiers(&self) -> Vec<SemanticIdentifier> {
        self.inner.read().by_index.clone()
    }

    /// Snapshot of every registered label, in index order.
    pub fn labels(&self) -> Vec<SemanticLabel> {
        self.inner
            .read()
            .by_index
            .iter()
            .map(|identifier| identifier.label().clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().by_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Cogxel factory that only creates cogxels for identifiers minted by
/// its registry.
pub struct RegisteredCogxelFactory<'a> {
    registry: &'a SemanticIdentifierMap,
}

impl<'a> RegisteredCogxelFactory<'a> {
    pub fn new(registry: &'a SemanticIdentifierMap) -> Self {
        Self { registry }
    }
}

impl CogxelFactory for RegisteredCogxelFactory<'_> {
    fn create_cogxel(&self, identifier: &SemanticIdentifier) -> Option<Cogxel> {
        self.registry
            .contains(identifier)
            .then(|| Cogxel::new(identifier.clone()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use cogxel_types::CogxelState;

    use super::*;

    fn label(name: &str) -> SemanticLabel {
        SemanticLabel::new(name).unwrap()
    }

    #[test]
    fn test_from_config_caps_capacity_hint() {
        let config = ModelConfig {
            registry_capacity: usize::MAX,
            ..ModelConfig::default()
        };
        let registry = SemanticIdentifierMap::from_config(&config);
        assert!(registry.is_empty());
        assert_eq!(registry.add_label(&label("a")).index(), 0);
    }

    #[test]
    fn test_add_label_idempotent() {
        let registry = SemanticIdentifierMap::new();
        let first = registry.add_label(&label("red"));
        let second = registry.add_label(&label("red"));
        assert_eq!(first, second);
        assert_eq!(first.label(), second.label());
        assert_eq!(registry.find_identifier(&label("red")), Some(first));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_distinct_labels_distinct_indices() {
        let registry = SemanticIdentifierMap::new();
        let a = registry.add_label(&label("a"));
        let b = registry.add_label(&label("b"));
        assert_ne!(a.index(), b.index());
    }

    #[test]
    fn test_monotonic_assignment_with_lookups() {
        let registry = SemanticIdentifierMap::new();
        assert_eq!(registry.add_label(&label("first")).index(), 0);
        assert!(registry.find_identifier(&label("missing")).is_none());
        assert_eq!(registry.add_label(&label("second")).index(), 1);
        registry.add_label(&label("first"));
        assert!(registry.find_identifier(&label("second")).is_some());
        assert_eq!(registry.add_label(&label("third")).index(), 2);
    }

    #[test]
    fn test_add_labels_preserves_order_and_dedups() {
        let registry = SemanticIdentifierMap::new();
        let labels = [label("x"), label("y"), label("x"), label("z")];
        let ids = registry.add_labels(&labels);
        let indices: Vec<usize> = ids.iter().map(|id| id.index()).collect();
        assert_eq!(indices, vec![0, 1, 0, 2]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_reregistration_in_different_order() {
        let registry = SemanticIdentifierMap::new();
        let names = ["alpha", "beta", "gamma", "delta"];
        let originals: Vec<SemanticLabel> = names.iter().map(|n| label(n)).collect();
        let first = registry.add_labels(&originals);

        let reversed: Vec<SemanticLabel> = originals.iter().rev().cloned().collect();
        let again = registry.add_labels(&reversed);
        for (id, reversed_id) in first.iter().zip(again.iter().rev()) {
            assert_eq!(id.index(), reversed_id.index());
        }
        assert_eq!(registry.len(), names.len());
    }

    #[test]
    fn test_find_by_index_and_snapshots() {
        let registry = SemanticIdentifierMap::new();
        registry.add_labels(&[label("p"), label("q")]);
        assert_eq!(registry.find_by_index(1).unwrap().label(), &label("q"));
        assert!(registry.find_by_index(2).is_none());
        assert_eq!(registry.labels(), vec![label("p"), label("q")]);
        let indices: Vec<usize> = registry.identifiers().iter().map(|i| i.index()).collect();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn test_concurrent_add_label() {
        let registry = Arc::new(SemanticIdentifierMap::new());
        let names: Vec<String> = (0..64).map(|i| format!("signal-{i}")).collect();

        let results: Vec<Vec<SemanticIdentifier>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let registry = Arc::clone(&registry);
                    let names = &names;
                    scope.spawn(move || {
                        names
                            .iter()
                            .map(|n| registry.add_label(&label(n)))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(registry.len(), 64);
        for ids in &results[1..] {
            assert_eq!(ids, &results[0]);
        }
        let unique: HashSet<usize> = results[0].iter().map(|id| id.index()).collect();
        assert_eq!(unique.len(), 64);
        assert!(unique.iter().all(|&i| i < 64));
    }

    #[test]
    fn test_registered_cogxel_factory() {
        let registry = SemanticIdentifierMap::new();
        let known = registry.add_label(&label("known"));
        let stranger = SemanticIdentifier::new(label("stranger"), 99);

        let factory = RegisteredCogxelFactory::new(&registry);
        let mut state = CogxelState::new();
        assert!(state.get_or_create_cogxel(&known, &factory).is_some());
        assert!(state.get_or_create_cogxel(&stranger, &factory).is_none());
        assert_eq!(state.get_num_cogxels(), 1);
    }
}
