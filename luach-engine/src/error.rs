//! Error types for rotation operations.
//!
//! Reads never produce these: `Rotation::resolve_today` degrades to a default
//! state on a failed read instead of failing the query. Writes propagate, so
//! a failed admin action is visibly reported rather than silently dropped.

use luach_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Rejected before any write reached the store.
    #[error("validation: {message}")]
    Validation { message: String },

    /// The underlying store failed a write.
    #[error("state store: {0}")]
    Store(#[from] StoreError),
}

impl EngineError {
    /// True when the input was rejected without touching stored state.
    pub fn is_validation(&self) -> bool {
        matches!(self, EngineError::Validation { .. })
    }
}
