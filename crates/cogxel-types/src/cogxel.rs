// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Cogxel State
// ─────────────────────────────────────────────────────────────────────
//! Sparse working-memory vector exchanged between modules.
//!
//! A [`Cogxel`] is one (identifier, activation) pair. A [`CogxelState`]
//! holds at most one cogxel per identifier; any identifier without a
//! cogxel reads as activation 0.0.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::semantic::SemanticIdentifier;

/// A single unit of working memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cogxel {
    identifier: SemanticIdentifier,
    pub activation: f64,
}

impl Cogxel {
    /// New cogxel at activation 0.0.
    pub fn new(identifier: SemanticIdentifier) -> Self {
        Self::with_activation(identifier, 0.0)
    }

    pub fn with_activation(identifier: SemanticIdentifier, activation: f64) -> Self {
        Self {
            identifier,
            activation,
        }
    }

    pub fn identifier(&self) -> &SemanticIdentifier {
        &self.identifier
    }
}

/// Creates cogxels on demand for [`CogxelState::get_or_create_cogxel`].
///
/// Returning `None` means the identifier is unknown to this factory;
/// the state is then left unchanged.
pub trait CogxelFactory: Send + Sync {
    fn create_cogxel(&self, identifier: &SemanticIdentifier) -> Option<Cogxel>;
}

/// Always creates a cogxel at activation 0.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCogxelFactory;

impl CogxelFactory for DefaultCogxelFactory {
    fn create_cogxel(&self, identifier: &SemanticIdentifier) -> Option<Cogxel> {
        Some(Cogxel::new(identifier.clone()))
    }
}

/// Sparse identifier → cogxel map.
///
/// Serialises as a flat list of cogxels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Cogxel>", into = "Vec<Cogxel>")]
pub struct CogxelState {
    cogxels: HashMap<SemanticIdentifier, Cogxel>,
}

impl CogxelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cogxels: HashMap::with_capacity(capacity),
        }
    }

    /// Insert or replace the cogxel for its identifier.
    pub fn add_cogxel(&mut self, cogxel: Cogxel) {
        self.cogxels.insert(cogxel.identifier.clone(), cogxel);
    }

    /// Set the activation for `identifier`, creating the cogxel if needed.
    pub fn set_activation(&mut self, identifier: &SemanticIdentifier, activation: f64) {
        match self.cogxels.get_mut(identifier) {
            Some(cogxel) => cogxel.activation = activation,
            None => self.add_cogxel(Cogxel::with_activation(identifier.clone(), activation)),
        }
    }

    pub fn get_cogxel(&self, identifier: &SemanticIdentifier) -> Option<&Cogxel> {
        self.cogxels.get(identifier)
    }

    /// Existing cogxel for `identifier`, or one made by `factory`.
    ///
    /// Returns `None` (state unchanged) when the factory declines.
    pub fn get_or_create_cogxel(
        &mut self,
        identifier: &SemanticIdentifier,
        factory: &dyn CogxelFactory,
    ) -> Option<&mut Cogxel> {
        if !self.cogxels.contains_key(identifier) {
            let cogxel = factory.create_cogxel(identifier)?;
            self.cogxels.insert(identifier.clone(), cogxel);
        }
        self.cogxels.get_mut(identifier)
    }

    /// Activation for `identifier`; 0.0 when no cogxel exists.
    pub fn get_cogxel_activation(&self, identifier: &SemanticIdentifier) -> f64 {
        self.cogxels
            .get(identifier)
            .map_or(0.0, |cogxel| cogxel.activation)
    }

    pub fn remove_cogxel(&mut self, identifier: &SemanticIdentifier) -> Option<Cogxel> {
        self.cogxels.remove(identifier)
    }

    /// Zero every activation, keeping the cogxels themselves.
    pub fn clear_activations(&mut self) {
        for cogxel in self.cogxels.values_mut() {
            cogxel.activation = 0.0;
        }
    }

    pub fn contains(&self, identifier: &SemanticIdentifier) -> bool {
        self.cogxels.contains_key(identifier)
    }

    pub fn get_num_cogxels(&self) -> usize {
        self.cogxels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cogxels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cogxel> {
        self.cogxels.values()
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &SemanticIdentifier> {
        self.cogxels.keys()
    }
}

impl From<Vec<Cogxel>> for CogxelState {
    fn from(cogxels: Vec<Cogxel>) -> Self {
        let mut state = Self::with_capacity(cogxels.len());
        for cogxel in cogxels {
            state.add_cogxel(cogxel);
        }
        state
    }
}

impl From<CogxelState> for Vec<Cogxel> {
    fn from(state: CogxelState) -> Self {
        let mut cogxels: Vec<Cogxel> = state.cogxels.into_values().collect();
        cogxels.sort_by(|a, b| a.identifier.cmp(&b.identifier));
        cogxels
    }
}

impl FromIterator<Cogxel> for CogxelState {
    fn from_iter<I: IntoIterator<Item = Cogxel>>(iter: I) -> Self {
        let mut state = Self::new();
        for cogxel in iter {
            state.add_cogxel(cogxel);
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantic::SemanticLabel;

    fn id(name: &str, index: usize) -> SemanticIdentifier {
        SemanticIdentifier::new(SemanticLabel::new(name).unwrap(), index)
    }

    struct RejectAll;

    impl CogxelFactory for RejectAll {
        fn create_cogxel(&self, _identifier: &SemanticIdentifier) -> Option<Cogxel> {
            None
        }
    }

    #[test]
    fn test_missing_activation_is_zero() {
        let state = CogxelState::new();
        assert_eq!(state.get_cogxel_activation(&id("never", 42)), 0.0);
        assert_eq!(state.get_num_cogxels(), 0);
    }

    #[test]
    fn test_add_cogxel_replaces() {
        let mut state = CogxelState::new();
        state.add_cogxel(Cogxel::with_activation(id("a", 0), 1.0));
        state.add_cogxel(Cogxel::with_activation(id("a", 0), 2.5));
        assert_eq!(state.get_num_cogxels(), 1);
        assert!((state.get_cogxel_activation(&id("a", 0)) - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_get_or_create_default_factory() {
        let mut state = CogxelState::new();
        let cogxel = state
            .get_or_create_cogxel(&id("b", 1), &DefaultCogxelFactory)
            .unwrap();
        assert_eq!(cogxel.activation, 0.0);
        cogxel.activation = 0.75;
        assert_eq!(state.get_num_cogxels(), 1);
        assert!((state.get_cogxel_activation(&id("b", 1)) - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_get_or_create_returns_existing() {
        let mut state = CogxelState::new();
        state.set_activation(&id("c", 2), 0.4);
        let cogxel = state.get_or_create_cogxel(&id("c", 2), &RejectAll).unwrap();
        assert!((cogxel.activation - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_get_or_create_declined_leaves_state() {
        let mut state = CogxelState::new();
        assert!(state.get_or_create_cogxel(&id("d", 3), &RejectAll).is_none());
        assert!(state.is_empty());
    }

    #[test]
    fn test_clear_activations_keeps_entries() {
        let mut state = CogxelState::new();
        state.set_activation(&id("a", 0), 1.0);
        state.set_activation(&id("b", 1), -3.0);
        state.clear_activations();
        assert_eq!(state.get_num_cogxels(), 2);
        assert!(state.iter().all(|c| c.activation == 0.0));
    }

    #[test]
    fn test_remove_cogxel() {
        let mut state = CogxelState::new();
        state.set_activation(&id("a", 0), 1.0);
        assert!(state.remove_cogxel(&id("a", 0)).is_some());
        assert!(!state.contains(&id("a", 0)));
        assert!(state.remove_cogxel(&id("a", 0)).is_none());
    }

    #[test]
    fn test_json_is_sorted_list() {
        let mut state = CogxelState::new();
        state.set_activation(&id("z", 5), 0.5);
        state.set_activation(&id("y", 1), 0.25);
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.starts_with('['));
        assert!(json.find("\"y\"").unwrap() < json.find("\"z\"").unwrap());
        let back: CogxelState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
