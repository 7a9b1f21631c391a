//! Engine tuning configuration.
//!
//! Scoring weights and thresholds are tuning values, not invariants; they
//! live here as configurable defaults.

use serde::{Deserialize, Serialize};

/// Tuning knobs for the relevance extractor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerConfig {
    /// Documents shorter than this are refused as empty.
    pub min_document_len: usize,
    /// Sentence segments shorter than this are discarded as noise.
    pub min_segment_len: usize,
    /// Question tokens shorter than this are discarded.
    pub min_token_len: usize,
    /// Score added per case-insensitive token occurrence in a segment.
    pub occurrence_weight: i64,
    /// Bonus when a segment contains the whole question verbatim.
    pub phrase_bonus: i64,
    /// Maximum excerpts returned.
    pub max_excerpts: usize,
    /// Segments returned when the question has no meaningful tokens.
    pub fallback_segments: usize,
}

impl Default for AnswerConfig {
    fn default() -> Self {
        Self {
            min_document_len: 15,
            min_segment_len: 20,
            min_token_len: 4,
            occurrence_weight: 2,
            phrase_bonus: 10,
            max_excerpts: 3,
            fallback_segments: 3,
        }
    }
}

/// Tuning knobs for the event detector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventConfig {
    /// Lines longer than this are skipped (unlikely to be one event).
    pub max_line_len: usize,
    /// Maximum events returned per document.
    pub max_events: usize,
    /// Confidence when an event-type keyword matched the line.
    pub keyword_confidence: f64,
    /// Confidence for unclassified lines (default Reminder).
    pub default_confidence: f64,
    /// Multiplier applied when the event date is already past.
    pub past_penalty: f64,
    /// Titles longer than this are truncated with an ellipsis.
    pub max_title_len: usize,
    /// Lines longer than this are not carried over as notes.
    pub max_notes_len: usize,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            max_line_len: 200,
            max_events: 5,
            keyword_confidence: 0.8,
            default_confidence: 0.5,
            past_penalty: 0.5,
            max_title_len: 100,
            max_notes_len: 150,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_defaults() {
        let cfg = AnswerConfig::default();
        assert_eq!(cfg.occurrence_weight, 2);
        assert_eq!(cfg.phrase_bonus, 10);
        assert_eq!(cfg.max_excerpts, 3);
    }

    #[test]
    fn test_event_defaults() {
        let cfg = EventConfig::default();
        assert_eq!(cfg.max_events, 5);
        assert!((cfg.keyword_confidence - 0.8).abs() < f64::EPSILON);
        assert!((cfg.default_confidence - 0.5).abs() < f64::EPSILON);
    }
}
