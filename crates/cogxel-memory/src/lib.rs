// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Cogxel Kernel Semantic Memory
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Semantic identifier registry and association-network pattern
//! recognizer.
//!
//! - `SemanticIdentifierMap`: shared, grow-only label ↔ index bijection
//! - `AssociationNetwork`: sparse weighted graph, one-step propagation
//! - `PatternRecognizer`: the seam semantic memory evaluates through

pub mod network;
pub mod recognizer;
pub mod registry;

pub use network::{Association, AssociationNetwork};
pub use recognizer::{ExternalRecognizer, PatternRecognizer};
pub use registry::{RegisteredCogxelFactory, SemanticIdentifierMap};
