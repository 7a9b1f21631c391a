//! Detected event types.

use serde::{Deserialize, Serialize};

/// Category of a detected calendar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    Exam,
    Assignment,
    Quiz,
    Reminder,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exam => write!(f, "Exam"),
            Self::Assignment => write!(f, "Assignment"),
            Self::Quiz => write!(f, "Quiz"),
            Self::Reminder => write!(f, "Reminder"),
        }
    }
}

/// A calendar-worthy statement detected in one line of document text.
///
/// Created fresh per invocation and never persisted here; the calendar
/// layer presents it for accept/reject and owns storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedEvent {
    pub title: String,
    /// ISO `YYYY-MM-DD`.
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(rename = "type")]
    pub kind: EventKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Heuristic 0..1 likelihood this is a genuine event.
    pub confidence: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_as_display_name() {
        assert_eq!(serde_json::to_string(&EventKind::Exam).unwrap(), "\"Exam\"");
        assert_eq!(EventKind::Quiz.to_string(), "Quiz");
    }

    #[test]
    fn test_event_serializes_kind_as_type() {
        let event = DetectedEvent {
            title: "Midterm".into(),
            date: "2026-02-15".into(),
            time: None,
            kind: EventKind::Exam,
            notes: None,
            location: None,
            confidence: 0.8,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"Exam\""));
        assert!(!json.contains("\"time\""));
    }
}
