// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Array Perception Module
// ─────────────────────────────────────────────────────────────────────
//! Turns an `ArrayInput` into a fresh cogxel state each cycle.
//! Inputs of any other encoding, or no input, perceive nothing.

use std::any::Any;
use std::sync::Arc;

use cogxel_types::{CognitionResult, CogxelState};

use crate::input::ArrayInput;
use crate::module::{Module, ModuleContext, ModuleFactory, ModuleState, ModuleStateRef};
use crate::state::ModelState;

/// Cogxels perceived on one cycle.
#[derive(Debug, Clone, Default)]
pub struct PerceptionState {
    pub cogxels: CogxelState,
}

impl ModuleState for PerceptionState {
    fn cogxels(&self) -> Option<&CogxelState> {
        Some(&self.cogxels)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub struct ArrayPerceptionModule;

impl Module for ArrayPerceptionModule {
    fn name(&self) -> &str {
        "array-perception"
    }

    fn initialize_state(&self, _model_state: &ModelState) -> CognitionResult<Option<ModuleStateRef>> {
        let state: ModuleStateRef = Arc::new(PerceptionState::default());
        Ok(Some(state))
    }

    fn update(
        &self,
        model_state: &ModelState,
        _previous: Option<&ModuleStateRef>,
    ) -> CognitionResult<Option<ModuleStateRef>> {
        let cogxels = match model_state.input_as::<ArrayInput>() {
            Some(input) => {
                let mut cogxels = CogxelState::with_capacity(input.len());
                for (identifier, value) in input.iter() {
                    cogxels.set_activation(identifier, value);
                }
                cogxels
            }
            None => CogxelState::new(),
        };
        let state: ModuleStateRef = Arc::new(PerceptionState { cogxels });
        Ok(Some(state))
    }
}

pub struct ArrayPerceptionFactory;

impl ModuleFactory for ArrayPerceptionFactory {
    fn create_module(&self, _context: &ModuleContext<'_>) -> CognitionResult<Box<dyn Module>> {
        Ok(Box::new(ArrayPerceptionModule))
    }
}
