//! The persistence port the rotation engine is written against.

use luach_types::state::{CycleState, StatePatch};
use thiserror::Error;

/// Errors surfaced by state store adapters.
///
/// "Record not found" is not an error: reads return `Ok(None)` so callers can
/// fall back to a default state.
#[derive(Debug, Error, Clone)]
pub enum StoreError {
    #[error("io error: {message}")]
    Io { message: String },

    #[error("json parse error: {message}")]
    Json { message: String },
}

/// Key-value persistence for [`CycleState`] records.
///
/// Writes are merge/upserts: fields absent from the patch are preserved, and
/// a missing record is created from defaults before the patch is applied.
/// Concurrent writers are last-write-wins; the domain (one override per day,
/// low write frequency) does not need CAS.
pub trait StateStore {
    fn read(&self, key: &str) -> Result<Option<CycleState>, StoreError>;

    fn write(&self, key: &str, patch: &StatePatch) -> Result<(), StoreError>;
}
