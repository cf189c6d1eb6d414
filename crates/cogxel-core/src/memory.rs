// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Semantic Memory Module
// ─────────────────────────────────────────────────────────────────────
//! Shared semantic memory: runs a pattern recognizer over the cogxels
//! produced earlier in the cycle and publishes inputs plus recognized
//! outputs as its own cogxel state.
//!
//! The recognizer is shared read-only by every model built from the
//! same factory.

use std::any::Any;
use std::sync::Arc;

use cogxel_memory::PatternRecognizer;
use cogxel_types::{CognitionError, CognitionResult, CogxelState};

use crate::module::{Module, ModuleContext, ModuleFactory, ModuleState, ModuleStateRef};
use crate::state::ModelState;

#[derive(Debug, Clone, Default)]
pub struct SemanticMemoryState {
    /// Inputs merged with recognized outputs; outputs win on collision.
    pub cogxels: CogxelState,
    /// Recognizer output alone.
    pub recognized: CogxelState,
}

impl ModuleState for SemanticMemoryState {
    fn cogxels(&self) -> Option<&CogxelState> {
        Some(&self.cogxels)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub struct SemanticMemoryModule {
    recognizer: Arc<dyn PatternRecognizer>,
}

impl SemanticMemoryModule {
    pub fn new(recognizer: Arc<dyn PatternRecognizer>) -> Self {
        Self { recognizer }
    }
}

impl Module for SemanticMemoryModule {
    fn name(&self) -> &str {
        "semantic-memory"
    }

    fn initialize_state(&self, _model_state: &ModelState) -> CognitionResult<Option<ModuleStateRef>> {
        let state: ModuleStateRef = Arc::new(SemanticMemoryState::default());
        Ok(Some(state))
    }

    fn update(
        &self,
        model_state: &ModelState,
        _previous: Option<&ModuleStateRef>,
    ) -> CognitionResult<Option<ModuleStateRef>> {
        let mut cogxels = model_state.cogxels().cloned().unwrap_or_default();
        let recognized = self.recognizer.recognize(&cogxels);
        if let Some(bad) = recognized.iter().find(|c| !c.activation.is_finite()) {
            return Err(CognitionError::Module {
                name: self.name().to_string(),
                message: format!(
                    "recognizer produced non-finite activation {} for {}",
                    bad.activation,
                    bad.identifier()
                ),
            });
        }
        for cogxel in recognized.iter() {
            cogxels.add_cogxel(cogxel.clone());
        }
        log::debug!(
            "semantic memory: {} recognized from {} cogxels",
            recognized.get_num_cogxels(),
            cogxels.get_num_cogxels()
        );
        let state: ModuleStateRef = Arc::new(SemanticMemoryState {
            cogxels,
            recognized,
        });
        Ok(Some(state))
    }
}

pub struct SemanticMemoryFactory {
    recognizer: Arc<dyn PatternRecognizer>,
}

impl SemanticMemoryFactory {
    pub fn new(recognizer: Arc<dyn PatternRecognizer>) -> Self {
        Self { recognizer }
    }
}

impl ModuleFactory for SemanticMemoryFactory {
    fn create_module(&self, _context: &ModuleContext<'_>) -> CognitionResult<Box<dyn Module>> {
        Ok(Box::new(SemanticMemoryModule::new(Arc::clone(&self.recognizer))))
    }
}
