//! Persisted cycle state and the merge-write shape for updating it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted cycle state, one record per rotation instance.
///
/// Created lazily: a missing record reads as the default (offset 0, no
/// override). It is never deleted, only blanked out — an empty
/// `override_title` signals "no override active".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CycleState {
    /// Shift applied when mapping calendar day to content index. Any integer
    /// is legal; only its value mod the table length is ever observed.
    #[serde(default)]
    pub offset: i64,

    /// Title of the manual override, or empty when none is active.
    ///
    /// The rendered date label embedded in this title doubles as the
    /// override's freshness check; see the engine's `override_matches_date`.
    #[serde(default)]
    pub override_title: String,

    #[serde(default)]
    pub override_body: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Identifier of the admin who last wrote the override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
}

impl CycleState {
    pub fn has_override(&self) -> bool {
        !self.override_title.is_empty()
    }
}

/// The override block of a [`CycleState`], written as a unit.
///
/// The default value is the blank record that signals "no override active".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverrideFields {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub body: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
}

impl OverrideFields {
    /// The blank record that deactivates an override.
    pub fn cleared() -> Self {
        Self::default()
    }
}

/// Partial update applied to a [`CycleState`] record.
///
/// Mirrors document-store "update" semantics rather than "replace": fields
/// left `None` are preserved by the write.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_fields: Option<OverrideFields>,
}

impl StatePatch {
    pub fn set_offset(offset: i64) -> Self {
        Self {
            offset: Some(offset),
            override_fields: None,
        }
    }

    pub fn clear_override() -> Self {
        Self {
            offset: None,
            override_fields: Some(OverrideFields::cleared()),
        }
    }

    /// Offset write plus override clear, as one logical unit.
    ///
    /// Both resync operations require this pairing: a stale override for the
    /// old cycle position must not outlive the offset change.
    pub fn resync(offset: i64) -> Self {
        Self {
            offset: Some(offset),
            override_fields: Some(OverrideFields::cleared()),
        }
    }

    pub fn apply_to(&self, state: &mut CycleState) {
        if let Some(offset) = self.offset {
            state.offset = offset;
        }
        if let Some(fields) = &self.override_fields {
            state.override_title = fields.title.clone();
            state.override_body = fields.body.clone();
            state.override_image = fields.image.clone();
            state.updated_at = fields.updated_at;
            state.updated_by = fields.updated_by.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn overridden_state() -> CycleState {
        CycleState {
            offset: 4,
            override_title: "Special reading - 15 Av".to_string(),
            override_body: "hand-entered".to_string(),
            override_image: Some("https://example.org/a.png".to_string()),
            updated_at: Some("2026-08-01T10:00:00Z".parse().expect("timestamp")),
            updated_by: Some("admin@example.org".to_string()),
        }
    }

    #[test]
    fn default_state_has_no_override() {
        let state = CycleState::default();
        assert_eq!(state.offset, 0);
        assert!(!state.has_override());
    }

    #[test]
    fn offset_patch_preserves_override() {
        let mut state = overridden_state();
        StatePatch::set_offset(9).apply_to(&mut state);
        assert_eq!(state.offset, 9);
        assert!(state.has_override());
        assert_eq!(state.override_body, "hand-entered");
    }

    #[test]
    fn clear_patch_blanks_override_and_keeps_offset() {
        let mut state = overridden_state();
        StatePatch::clear_override().apply_to(&mut state);
        assert_eq!(state.offset, 4);
        assert!(!state.has_override());
        assert_eq!(state.override_body, "");
        assert_eq!(state.override_image, None);
        assert_eq!(state.updated_at, None);
        assert_eq!(state.updated_by, None);
    }

    #[test]
    fn resync_patch_writes_offset_and_blanks_override() {
        let mut state = overridden_state();
        StatePatch::resync(0).apply_to(&mut state);
        assert_eq!(state.offset, 0);
        assert!(!state.has_override());
    }

    #[test]
    fn state_reads_tolerate_unknown_and_missing_fields() {
        let raw = r#"{"offset": 3, "legacy_field": true}"#;
        let state: CycleState = serde_json::from_str(raw).expect("parse");
        assert_eq!(state.offset, 3);
        assert!(!state.has_override());
    }

    #[test]
    fn blank_fields_stay_out_of_documents() {
        let json = serde_json::to_string(&CycleState::default()).expect("serialize");
        assert!(!json.contains("override_image"));
        assert!(!json.contains("updated_at"));
        assert!(!json.contains("updated_by"));
    }
}
