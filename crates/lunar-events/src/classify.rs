//! Event type classification by keyword sets.
//!
//! Categories are tested in fixed priority order and the first match wins,
//! so a line mentioning both an exam and a due date classifies as Exam.

use crate::types::EventKind;

const EXAM_KEYWORDS: &[&str] = &["exam", "midterm", "final", "test"];
const ASSIGNMENT_KEYWORDS: &[&str] = &["assignment", "essay", "paper", "project", "homework", "due"];
const QUIZ_KEYWORDS: &[&str] = &["quiz", "pop quiz", "short test"];
const REMINDER_KEYWORDS: &[&str] = &["meeting", "review", "session", "office hours", "study group"];

/// Classify a lowercased line. `None` means no keyword matched; the
/// caller falls back to `EventKind::Reminder` at reduced confidence.
pub fn classify_line(line_lower: &str) -> Option<EventKind> {
    let table: &[(&[&str], EventKind)] = &[
        (EXAM_KEYWORDS, EventKind::Exam),
        (ASSIGNMENT_KEYWORDS, EventKind::Assignment),
        (QUIZ_KEYWORDS, EventKind::Quiz),
        (REMINDER_KEYWORDS, EventKind::Reminder),
    ];

    for (keywords, kind) in table {
        if keywords.iter().any(|kw| line_lower.contains(kw)) {
            return Some(*kind);
        }
    }
    None
}
