//! Cross-cutting error types for formwork.
//!
//! Domain-specific errors (`StoreError`, `PreviewError`, `ConfigError`) live in
//! their respective crates. The CLI converges them through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any formwork crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A record ID cannot be used as a file stem.
    #[error("Invalid record id '{id}': {reason}")]
    InvalidId { id: String, reason: String },

    /// The OS random source failed while generating an ID.
    #[error("Entropy source unavailable: {0}")]
    Entropy(String),
}

impl CoreError {
    pub fn invalid_id(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidId {
            id: id.into(),
            reason: reason.into(),
        }
    }
}
