//! The derived value handed to a presentation layer. Never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a day's displayed content was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentSource {
    /// Computed from the content table and the cycle offset.
    Automatic,
    /// Admin-entered content whose title matched today's date label.
    Override,
}

/// Today's content for one rotation instance.
///
/// Fully determined by (Hebrew day, offset, override record, content table);
/// exactly one of override or automatic content, never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayedContent {
    pub title: String,

    pub body: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Tagged for observability: tests assert on it, and an admin UI can show
    /// an "editing on top of automatic content" affordance.
    pub source: ContentSource,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn source_serializes_snake_case() {
        let json = serde_json::to_string(&ContentSource::Automatic).expect("serialize");
        assert_eq!(json, r#""automatic""#);
        let json = serde_json::to_string(&ContentSource::Override).expect("serialize");
        assert_eq!(json, r#""override""#);
    }

    #[test]
    fn automatic_content_omits_blank_optionals() {
        let content = DisplayedContent {
            title: "Gate 1 - 1 Elul".to_string(),
            body: "first".to_string(),
            image_url: None,
            updated_at: None,
            source: ContentSource::Automatic,
        };
        let json = serde_json::to_string(&content).expect("serialize");
        assert!(!json.contains("image_url"));
        assert!(!json.contains("updated_at"));
        assert!(json.contains(r#""source":"automatic""#));
    }
}
