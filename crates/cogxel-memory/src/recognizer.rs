// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Pattern Recognizer Interface
// ─────────────────────────────────────────────────────────────────────
//! Pattern recognizer trait used by semantic memory.
//!
//! The association network is the in-process implementation. Anything
//! else (a trained model behind an FFI or RPC boundary) plugs in through
//! [`ExternalRecognizer`].

use cogxel_types::CogxelState;

use crate::network::AssociationNetwork;

/// Maps input activations to derived output activations.
pub trait PatternRecognizer: Send + Sync {
    fn recognize(&self, input: &CogxelState) -> CogxelState;
}

impl PatternRecognizer for AssociationNetwork {
    fn recognize(&self, input: &CogxelState) -> CogxelState {
        self.evaluate(input)
    }
}

type RecognizeFn = Box<dyn Fn(&CogxelState) -> CogxelState + Send + Sync>;

/// Recognizer that delegates to a closure.
pub struct ExternalRecognizer {
    recognize_fn: RecognizeFn,
}

impl ExternalRecognizer {
    pub fn new(
        recognize_fn: impl Fn(&CogxelState) -> CogxelState + Send + Sync + 'static,
    ) -> Self {
        Self {
            recognize_fn: Box::new(recognize_fn),
        }
    }
}

impl PatternRecognizer for ExternalRecognizer {
    fn recognize(&self, input: &CogxelState) -> CogxelState {
        (self.recognize_fn)(input)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use cogxel_types::SemanticLabel;

    use super::*;
    use crate::registry::SemanticIdentifierMap;

    #[test]
    fn test_network_as_recognizer() {
        let registry = Arc::new(SemanticIdentifierMap::new());
        let mut network = AssociationNetwork::new(Arc::clone(&registry));
        let a = SemanticLabel::new("a").unwrap();
        let b = SemanticLabel::new("b").unwrap();
        network.set_association(&a, &b, 0.5).unwrap();

        let mut input = CogxelState::new();
        input.set_activation(&registry.add_label(&a), 4.0);

        let recognizer: Arc<dyn PatternRecognizer> = Arc::new(network);
        let output = recognizer.recognize(&input);
        let b_id = registry.find_identifier(&b).unwrap();
        assert!((output.get_cogxel_activation(&b_id) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_external_recognizer() {
        let recognizer = ExternalRecognizer::new(|input| {
            let mut doubled = input.clone();
            for cogxel in input.iter() {
                doubled.set_activation(cogxel.identifier(), cogxel.activation * 2.0);
            }
            doubled
        });
        let registry = SemanticIdentifierMap::new();
        let id = registry.add_label(&SemanticLabel::new("x").unwrap());
        let mut input = CogxelState::new();
        input.set_activation(&id, 1.5);
        let output = recognizer.recognize(&input);
        assert!((output.get_cogxel_activation(&id) - 3.0).abs() < 1e-9);
    }
}
