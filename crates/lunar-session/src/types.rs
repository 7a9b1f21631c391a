//! Session-level result types.

use lunar_answer::Excerpt;
use lunar_events::DetectedEvent;
use serde::Serialize;

/// A displayable chat reply: rendered text plus the structured excerpts
/// it was built from (the UI may show them as cited snippets).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatReply {
    pub text: String,
    pub excerpts: Vec<Excerpt>,
}

impl ChatReply {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            excerpts: Vec::new(),
        }
    }
}

/// A detected event paired with the material it came from, presented to
/// the user for accept/reject before anything touches the calendar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventSuggestion {
    pub event: DetectedEvent,
    /// Material name, e.g. "Math 101 Syllabus.pdf".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}
