// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Cogxel Kernel Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for all Cogxel Kernel failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CognitionError {
    /// A required value was missing or malformed (empty label name,
    /// missing module factory, mismatched input arrays).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Numerical error (NaN/Inf where a finite value is required).
    #[error("numerical error: {0}")]
    Numerical(String),

    /// A module could not produce its state.
    #[error("module {name} failed: {message}")]
    Module { name: String, message: String },

    /// A listener failed while the new model state was being delivered.
    /// The state was already published when this is returned.
    #[error("listener {index} failed: {message}")]
    Listener { index: usize, message: String },
}

impl CognitionError {
    /// Shorthand for `InvalidArgument`.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

pub type CognitionResult<T> = Result<T, CognitionError>;
