// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Cogxel Kernel Core Engine
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Module pipeline and cognitive model engine.
//!
//! A model is an ordered list of modules built from module factories.
//! Each `update` feeds one input through every module in registration
//! order, publishes the resulting model state, and notifies listeners.
//!
//! # Invariants
//!
//! 1. **Left-to-right data flow**: module *k* sees this cycle's states of
//!    modules `0..k` and nothing newer. `ModelState::cogxels` only looks
//!    at completed slots.
//!
//! 2. **Publish or nothing**: a failing module aborts the cycle before
//!    anything is published; "current" stays the last good state.
//!
//! 3. **Published states are immutable**: model and module states are
//!    shared behind `Arc` and never mutated after publication.
//!
//! 4. **One registry, many models**: identifiers come from an injected
//!    `SemanticIdentifierMap`, never from process-wide state.

pub mod factory;
pub mod input;
pub mod listener;
pub mod memory;
pub mod model;
pub mod module;
pub mod perception;
pub mod state;

pub use factory::CognitiveModelFactory;
pub use input::{ArrayInput, ModelInput};
pub use listener::{ExternalListener, ModelListener, RecordingListener};
pub use memory::{SemanticMemoryFactory, SemanticMemoryModule, SemanticMemoryState};
pub use model::CognitiveModel;
pub use module::{Module, ModuleContext, ModuleFactory, ModuleState, ModuleStateRef};
pub use perception::{ArrayPerceptionFactory, ArrayPerceptionModule, PerceptionState};
pub use state::ModelState;
