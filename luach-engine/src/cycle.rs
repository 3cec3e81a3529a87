//! The [`Rotation`] handle: one rotation instance bound to a state store.

use crate::error::EngineError;
use crate::ports::DaySource;
use crate::rotation;
use chrono::Utc;
use luach_store::StateStore;
use luach_types::content::ContentTable;
use luach_types::display::DisplayedContent;
use luach_types::state::{CycleState, OverrideFields, StatePatch};
use tracing::debug;

/// Admin-entered content to pin for the current date.
///
/// The title is expected to embed today's rendered date label — that is what
/// keeps the override alive for today and retires it tomorrow. Rendering the
/// label into the title is the caller's responsibility.
#[derive(Debug, Clone, Default)]
pub struct OverrideDraft {
    pub title: String,
    pub body: String,
    pub image_url: Option<String>,
    pub updated_by: Option<String>,
}

/// One rotation instance (store key + content table) bound to a state store.
///
/// Holds no state of its own between calls; every read goes back to the
/// store, so the handle can be rebuilt freely at any call site.
pub struct Rotation<'a> {
    store: &'a dyn StateStore,
    key: &'a str,
    table: &'a ContentTable,
}

impl<'a> Rotation<'a> {
    pub fn new(store: &'a dyn StateStore, key: &'a str, table: &'a ContentTable) -> Self {
        Self { store, key, table }
    }

    /// Today's content for this rotation.
    ///
    /// A failed or missing state read degrades to the default state (offset
    /// 0, no override) rather than failing the query: automatic rotation is
    /// not best-effort, only the override lookup is.
    pub fn resolve_today(&self, day: &dyn DaySource) -> DisplayedContent {
        let state = match self.store.read(self.key) {
            Ok(Some(state)) => state,
            Ok(None) => CycleState::default(),
            Err(e) => {
                debug!(key = self.key, error = %e, "state read failed; using default cycle state");
                CycleState::default()
            }
        };
        rotation::resolve_today(day.day_of_month(), &day.label(), &state, self.table)
    }

    /// Reset the cycle so day-of-month N maps to content unit N.
    ///
    /// Clears any active override in the same write; a stale override for the
    /// old cycle position must not keep winning after the reset.
    pub fn resync_to_natural_cycle(&self) -> Result<(), EngineError> {
        self.store.write(self.key, &StatePatch::resync(0))?;
        Ok(())
    }

    /// Make today cycle position 1; subsequent days advance 2, 3, ... 30, 1
    /// regardless of the actual day-of-month. The offset absorbs the
    /// difference. Also clears any active override, same as
    /// [`resync_to_natural_cycle`](Self::resync_to_natural_cycle).
    pub fn restart_cycle_from_today(&self, hebrew_day: u8) -> Result<(), EngineError> {
        let offset = i64::from(hebrew_day) - 1;
        self.store.write(self.key, &StatePatch::resync(offset))?;
        Ok(())
    }

    /// Persist hand-entered content for the current date.
    ///
    /// Only the title is validated (non-empty); body and image URL are
    /// accepted as-is.
    pub fn save_override(&self, draft: OverrideDraft) -> Result<(), EngineError> {
        if draft.title.is_empty() {
            return Err(EngineError::Validation {
                message: "override title must not be empty".to_string(),
            });
        }

        let fields = OverrideFields {
            title: draft.title,
            body: draft.body,
            image: draft.image_url,
            updated_at: Some(Utc::now()),
            updated_by: draft.updated_by,
        };
        self.store.write(
            self.key,
            &StatePatch {
                offset: None,
                override_fields: Some(fields),
            },
        )?;
        Ok(())
    }

    /// Blank the override fields; the offset is untouched.
    pub fn clear_override(&self) -> Result<(), EngineError> {
        self.store.write(self.key, &StatePatch::clear_override())?;
        Ok(())
    }
}
