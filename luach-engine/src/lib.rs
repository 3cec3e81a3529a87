//! Rotation engine: turn a Hebrew calendar day + persisted cycle state into
//! the content to display right now.
//!
//! This crate owns *which* content shows today and the admin operations that
//! shift the cycle. It does not own persistence (that's `luach-store`) or the
//! calendar computation (handed in through [`DaySource`]).

mod cycle;
mod error;
mod ports;
mod rotation;

pub use cycle::{OverrideDraft, Rotation};
pub use error::EngineError;
pub use ports::{DaySource, FixedDay};
pub use rotation::{cycle_index, override_matches_date, resolve_today};
