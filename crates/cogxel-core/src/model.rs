// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Cognitive Model Engine
// ─────────────────────────────────────────────────────────────────────
//! Runs the module pipeline once per input and publishes the result.
//!
//! Each cycle builds a fresh `ModelState` from the published one, lets
//! every module produce its new state in registration order, then swaps
//! the finished state in as "current" and notifies listeners. If a module
//! fails, the cycle is abandoned and "current" is left untouched. Modules
//! that already ran are not rolled back.

use std::sync::Arc;

use cogxel_memory::SemanticIdentifierMap;
use cogxel_types::{CognitionError, CognitionResult, CogxelState, ModelConfig};

use crate::input::ModelInput;
use crate::listener::ModelListener;
use crate::module::{Module, ModuleContext, ModuleFactory};
use crate::state::ModelState;

pub struct CognitiveModel {
    config: ModelConfig,
    registry: Arc<SemanticIdentifierMap>,
    modules: Vec<Box<dyn Module>>,
    current: Arc<ModelState>,
    listeners: Vec<Arc<dyn ModelListener>>,
}

impl CognitiveModel {
    pub fn new(
        registry: Arc<SemanticIdentifierMap>,
        factories: &[Arc<dyn ModuleFactory>],
    ) -> CognitionResult<Self> {
        Self::with_config(ModelConfig::default(), registry, factories)
    }

    /// Build one module per factory, in order, then initialise their
    /// states in the same order.
    pub fn with_config(
        config: ModelConfig,
        registry: Arc<SemanticIdentifierMap>,
        factories: &[Arc<dyn ModuleFactory>],
    ) -> CognitionResult<Self> {
        config.validate()?;
        if factories.len() > config.max_modules {
            return Err(CognitionError::Config(format!(
                "{} module factories exceed max_modules = {}",
                factories.len(),
                config.max_modules
            )));
        }

        let mut modules = Vec::with_capacity(factories.len());
        for (index, factory) in factories.iter().enumerate() {
            let context = ModuleContext {
                registry: &registry,
                config: &config,
                index,
            };
            modules.push(factory.create_module(&context)?);
        }

        let mut state = ModelState::default();
        for (index, module) in modules.iter().enumerate() {
            let module_state = module
                .initialize_state(&state)
                .map_err(|e| log_abort(&config, index, module.as_ref(), 0, e))?;
            state.push_module_state(module_state);
        }

        log::info!(
            "model '{}': constructed with {} modules",
            config.name,
            modules.len()
        );

        Ok(Self {
            config,
            registry,
            modules,
            current: Arc::new(state),
            listeners: Vec::new(),
        })
    }

    /// Run one cycle over `input`.
    ///
    /// On a module error nothing is published and the error is returned
    /// unchanged. A listener error (`CognitionError::Listener`) is
    /// returned after the new state has already been published.
    pub fn update(&mut self, input: Option<Arc<dyn ModelInput>>) -> CognitionResult<()> {
        let mut next = self.current.begin_cycle(input);
        let cycle = next.cycle();

        for (index, module) in self.modules.iter().enumerate() {
            log::debug!(
                "model '{}': cycle {cycle} updating module {index} ({})",
                self.config.name,
                module.name()
            );
            let previous = self.current.module_state(index);
            let module_state = module
                .update(&next, previous)
                .map_err(|e| log_abort(&self.config, index, module.as_ref(), cycle, e))?;
            next.complete_module_state(module_state);
        }

        self.current = Arc::new(next);
        self.fire_model_state_changed()
    }

    /// The most recently published state.
    pub fn current_state(&self) -> &Arc<ModelState> {
        &self.current
    }

    /// Cogxel state of the most recently published state, if any module
    /// owns one.
    pub fn cogxels(&self) -> Option<&CogxelState> {
        self.current.cogxels()
    }

    /// Number of completed cycles.
    pub fn cycle(&self) -> u64 {
        self.current.cycle()
    }

    pub fn registry(&self) -> &Arc<SemanticIdentifierMap> {
        &self.registry
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn num_modules(&self) -> usize {
        self.modules.len()
    }

    pub fn module_names(&self) -> Vec<&str> {
        self.modules.iter().map(|module| module.name()).collect()
    }

    /// Register a listener. `None` is accepted and ignored.
    pub fn add_listener(&mut self, listener: Option<Arc<dyn ModelListener>>) {
        if let Some(listener) = listener {
            self.listeners.push(listener);
        }
    }

    /// Unregister the first registration of `listener`. `None` is
    /// accepted and ignored. Returns whether anything was removed.
    pub fn remove_listener(&mut self, listener: Option<&Arc<dyn ModelListener>>) -> bool {
        let Some(listener) = listener else {
            return false;
        };
        let target = Arc::as_ptr(listener) as *const ();
        match self
            .listeners
            .iter()
            .position(|l| Arc::as_ptr(l) as *const () == target)
        {
            Some(position) => {
                self.listeners.remove(position);
                true
            }
            None => false,
        }
    }

    pub fn num_listeners(&self) -> usize {
        self.listeners.len()
    }

    /// Deliver the current state to every listener, in registration order.
    ///
    /// By default the first failure stops delivery and is returned. With
    /// `isolate_listener_failures` failures are logged and skipped.
    pub fn fire_model_state_changed(&self) -> CognitionResult<()> {
        for (index, listener) in self.listeners.iter().enumerate() {
            if let Err(e) = listener.model_state_changed(self, &self.current) {
                if self.config.isolate_listener_failures {
                    log::warn!(
                        "model '{}': listener {index} failed on cycle {}: {e}",
                        self.config.name,
                        self.current.cycle()
                    );
                    continue;
                }
                return Err(CognitionError::Listener {
                    index,
                    message: e.to_string(),
                });
            }
        }
        Ok(())
    }
}

fn log_abort(
    config: &ModelConfig,
    index: usize,
    module: &dyn Module,
    cycle: u64,
    error: CognitionError,
) -> CognitionError {
    log::error!(
        "model '{}': module {index} ({}) aborted cycle {cycle}: {error}",
        config.name,
        module.name()
    );
    error
}
