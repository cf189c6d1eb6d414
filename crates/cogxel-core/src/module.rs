// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Module and Module-Factory Protocol
// ─────────────────────────────────────────────────────────────────────
//! Contract between the engine and the pluggable units it runs.
//!
//! A [`ModuleFactory`] is stateless and may be shared by many models; it
//! builds one [`Module`] per model. The module keeps no per-cycle data
//! itself: everything it needs between cycles lives in the
//! [`ModuleState`] it returns, which the engine stores in the model state
//! and hands back on the next cycle.
//!
//! Module states are immutable once returned (`Arc<dyn ModuleState>`). A
//! module that needs to evolve its state builds a new value from the
//! previous one instead of mutating it in place.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use cogxel_memory::SemanticIdentifierMap;
use cogxel_types::{CognitionResult, CogxelState, ModelConfig};

use crate::state::ModelState;

/// Private per-module state stored in the model state.
pub trait ModuleState: Any + Send + Sync + fmt::Debug {
    /// The cogxel state this module owns, if it owns one.
    fn cogxels(&self) -> Option<&CogxelState> {
        None
    }

    fn as_any(&self) -> &dyn Any;
}

pub type ModuleStateRef = Arc<dyn ModuleState>;

/// One unit of per-cycle state transformation.
pub trait Module: Send + Sync {
    fn name(&self) -> &str;

    /// First state, produced once at model construction. `model_state`
    /// holds the states of the modules initialised before this one.
    fn initialize_state(&self, model_state: &ModelState) -> CognitionResult<Option<ModuleStateRef>>;

    /// New state for this cycle. `model_state` carries this cycle's input
    /// and the states already produced this cycle by earlier modules.
    fn update(
        &self,
        model_state: &ModelState,
        previous: Option<&ModuleStateRef>,
    ) -> CognitionResult<Option<ModuleStateRef>>;
}

/// What a factory gets to see of the model it is building a module for.
pub struct ModuleContext<'a> {
    pub registry: &'a Arc<SemanticIdentifierMap>,
    pub config: &'a ModelConfig,
    /// Position of the module being built in the pipeline.
    pub index: usize,
}

/// Builds one module per model.
pub trait ModuleFactory: Send + Sync {
    fn create_module(&self, context: &ModuleContext<'_>) -> CognitionResult<Box<dyn Module>>;
}
