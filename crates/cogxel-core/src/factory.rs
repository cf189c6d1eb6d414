// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Cognitive Model Factory
// ─────────────────────────────────────────────────────────────────────
//! Holds the shared registry and the ordered module-factory list, and
//! stamps out models from them. Every model a factory creates resolves
//! labels through the same registry.

use std::sync::Arc;

use cogxel_memory::SemanticIdentifierMap;
use cogxel_types::{CognitionError, CognitionResult, ModelConfig};

use crate::model::CognitiveModel;
use crate::module::ModuleFactory;

pub struct CognitiveModelFactory {
    config: ModelConfig,
    registry: Arc<SemanticIdentifierMap>,
    factories: Vec<Arc<dyn ModuleFactory>>,
}

impl CognitiveModelFactory {
    /// Factory with a fresh, empty registry.
    pub fn new(config: ModelConfig) -> CognitionResult<Self> {
        config.validate()?;
        let registry = Arc::new(SemanticIdentifierMap::from_config(&config));
        Self::with_registry(config, registry)
    }

    /// Factory sharing an existing registry.
    pub fn with_registry(
        config: ModelConfig,
        registry: Arc<SemanticIdentifierMap>,
    ) -> CognitionResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            registry,
            factories: Vec::new(),
        })
    }

    /// Append a module factory. `None` is rejected.
    pub fn add_module_factory(
        &mut self,
        factory: Option<Arc<dyn ModuleFactory>>,
    ) -> CognitionResult<()> {
        let factory =
            factory.ok_or_else(|| CognitionError::invalid("module factory must not be absent"))?;
        if self.factories.len() >= self.config.max_modules {
            return Err(CognitionError::Config(format!(
                "cannot register more than max_modules = {} module factories",
                self.config.max_modules
            )));
        }
        self.factories.push(factory);
        Ok(())
    }

    pub fn module_factories(&self) -> &[Arc<dyn ModuleFactory>] {
        &self.factories
    }

    pub fn registry(&self) -> &Arc<SemanticIdentifierMap> {
        &self.registry
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn create_model(&self) -> CognitionResult<CognitiveModel> {
        CognitiveModel::with_config(
            self.config.clone(),
            Arc::clone(&self.registry),
            &self.factories,
        )
    }
}
