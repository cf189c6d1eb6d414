// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Cogxel Kernel Configuration
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::error::{CognitionError, CognitionResult};

/// Largest accepted `registry_capacity`. The registry still grows past
/// this; the bound only limits the up-front reservation.
pub const MAX_REGISTRY_CAPACITY: usize = 1 << 20;

/// Runtime configuration for a cognitive model and its model factory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Human-readable model name, used in log lines.
    /// Default: "cognitive-model".
    pub name: String,

    /// When `false`, the first listener that fails stops delivery to the
    /// listeners registered after it and the error is returned from `update`.
    /// When `true`, listener failures are logged and delivery continues.
    /// Default: false.
    pub isolate_listener_failures: bool,

    /// Initial capacity hint for registries built from this config.
    /// At most `MAX_REGISTRY_CAPACITY`. Default: 64.
    pub registry_capacity: usize,

    /// Upper bound on the number of modules in one model.
    /// Default: 256.
    pub max_modules: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: "cognitive-model".to_string(),
            isolate_listener_failures: false,
            registry_capacity: 64,
            max_modules: 256,
        }
    }
}

impl ModelConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> CognitionResult<()> {
        if self.name.trim().is_empty() {
            return Err(CognitionError::Config(
                "name must not be empty".to_string(),
            ));
        }
        if self.registry_capacity > MAX_REGISTRY_CAPACITY {
            return Err(CognitionError::Config(format!(
                "registry_capacity must be <= {MAX_REGISTRY_CAPACITY}, got {}",
                self.registry_capacity
            )));
        }
        if self.max_modules < 1 {
            return Err(CognitionError::Config(format!(
                "max_modules must be >= 1, got {}",
                self.max_modules
            )));
        }
        Ok(())
    }

    /// Load from JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> CognitionResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| CognitionError::Config(format!("JSON parse error: {e}")))
    }
}
