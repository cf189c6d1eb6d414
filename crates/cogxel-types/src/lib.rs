// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Cogxel Kernel Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Value types, configuration, and error hierarchy for the Cogxel
//! Kernel: the module pipeline at the heart of a cognitive model.

pub mod cogxel;
pub mod config;
pub mod error;
pub mod semantic;

pub use cogxel::{Cogxel, CogxelFactory, CogxelState, DefaultCogxelFactory};
pub use config::{ModelConfig, MAX_REGISTRY_CAPACITY};
pub use error::{CognitionError, CognitionResult};
pub use semantic::{SemanticIdentifier, SemanticLabel};
