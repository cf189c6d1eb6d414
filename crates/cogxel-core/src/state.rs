// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Model State
// ─────────────────────────────────────────────────────────────────────
//! Ordered collection of module states for one cycle.
//!
//! While a cycle is in progress, the first `completed` slots hold states
//! produced this cycle and the remaining slots still hold last cycle's.
//! Only completed slots count as this cycle's data flow, which gives the
//! strict left-to-right ordering between modules. A published state has
//! every slot completed.

use std::sync::Arc;

use cogxel_types::CogxelState;

use crate::input::ModelInput;
use crate::module::{ModuleState, ModuleStateRef};

#[derive(Debug, Clone, Default)]
pub struct ModelState {
    cycle: u64,
    input: Option<Arc<dyn ModelInput>>,
    module_states: Vec<Option<ModuleStateRef>>,
    completed: usize,
}

impl ModelState {
    /// Cycles completed before this state; 0 for the initial state.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    pub fn input(&self) -> Option<&Arc<dyn ModelInput>> {
        self.input.as_ref()
    }

    /// The input, if it is a `T`.
    pub fn input_as<T: ModelInput>(&self) -> Option<&T> {
        self.input.as_deref()?.as_any().downcast_ref::<T>()
    }

    pub fn num_modules(&self) -> usize {
        self.module_states.len()
    }

    /// Whether slot `index` already holds this cycle's state.
    pub fn is_completed(&self, index: usize) -> bool {
        index < self.completed
    }

    /// State in slot `index`, whether or not it was produced this cycle.
    /// Modules reading their upstream neighbours want
    /// [`completed_module_state`](Self::completed_module_state).
    pub fn module_state(&self, index: usize) -> Option<&ModuleStateRef> {
        self.module_states.get(index)?.as_ref()
    }

    /// Module state at `index`, if it is a `T`.
    pub fn module_state_as<T: ModuleState>(&self, index: usize) -> Option<&T> {
        self.module_state(index)?.as_any().downcast_ref::<T>()
    }

    /// State in slot `index` only if it was produced this cycle.
    ///
    /// ```ignore
    /// // Inside `Module::update` of the module at index 2:
    /// let upstream = model_state.completed_module_state_as::<PerceptionState>(0);
    /// ```
    pub fn completed_module_state(&self, index: usize) -> Option<&ModuleStateRef> {
        if !self.is_completed(index) {
            return None;
        }
        self.module_state(index)
    }

    /// `completed_module_state`, downcast to `T`.
    pub fn completed_module_state_as<T: ModuleState>(&self, index: usize) -> Option<&T> {
        self.completed_module_state(index)?
            .as_any()
            .downcast_ref::<T>()
    }

    pub fn module_states(&self) -> impl Iterator<Item = Option<&ModuleStateRef>> {
        self.module_states.iter().map(Option::as_ref)
    }

    /// Cogxel state of the right-most completed module that owns one.
    pub fn cogxels(&self) -> Option<&CogxelState> {
        self.module_states[..self.completed]
            .iter()
            .rev()
            .flatten()
            .find_map(|state| state.cogxels())
    }

    /// Start the next cycle from this published state.
    pub(crate) fn begin_cycle(&self, input: Option<Arc<dyn ModelInput>>) -> Self {
        Self {
            cycle: self.cycle + 1,
            input,
            module_states: self.module_states.clone(),
            completed: 0,
        }
    }

    /// Record the state of the next module during initialisation.
    pub(crate) fn push_module_state(&mut self, state: Option<ModuleStateRef>) {
        self.module_states.push(state);
        self.completed = self.module_states.len();
    }

    /// Record this cycle's state for the next module in line.
    pub(crate) fn complete_module_state(&mut self, state: Option<ModuleStateRef>) {
        self.module_states[self.completed] = state;
        self.completed += 1;
    }
}
