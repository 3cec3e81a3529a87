//! Shared DTOs (schemas-as-code) for the luach workspace.
//!
//! # Design constraints
//! - [`state::CycleState`] is serialized to a document store and read back by
//!   older and newer app versions alike. Be conservative with breaking changes.
//! - Prefer adding optional fields over changing semantics.
//! - Records are read tolerantly: unknown fields are ignored, absent fields
//!   fall back to defaults.

pub mod content;
pub mod display;
pub mod state;

/// Storage keys for the built-in rotation instances.
pub mod keys {
    /// Cycle state record for the thirty-gate reading cycle.
    pub const GATES_CYCLE: &str = "cycle.gates.v1";

    /// Cycle state record for the monthly Psalms reading plan.
    pub const PSALMS_CYCLE: &str = "cycle.psalms.v1";
}
