//! Answer result types.

use serde::{Deserialize, Serialize};

/// A scored span of document text returned as evidence for an answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Excerpt {
    pub text: String,
    pub score: f64,
}

/// Why no answer could be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoAnswerReason {
    /// Document empty, whitespace-only, or below the minimum length.
    EmptyDocument,
    /// No document segment matched any question token.
    NoMatch,
}

/// Outcome of answering a question from a document.
///
/// Invariant: `found` is true exactly when `excerpts` is non-empty. Use the
/// constructors to keep it that way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerResult {
    pub found: bool,
    pub excerpts: Vec<Excerpt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<NoAnswerReason>,
}

impl AnswerResult {
    /// An answer backed by at least one excerpt.
    pub fn found(excerpts: Vec<Excerpt>) -> Self {
        debug_assert!(!excerpts.is_empty());
        Self {
            found: true,
            excerpts,
            reason: None,
        }
    }

    /// A refusal with an explicit reason.
    pub fn not_found(reason: NoAnswerReason) -> Self {
        Self {
            found: false,
            excerpts: Vec::new(),
            reason: Some(reason),
        }
    }

    /// A no-op result (e.g. empty question): nothing found, no reason.
    pub fn empty() -> Self {
        Self {
            found: false,
            excerpts: Vec::new(),
            reason: None,
        }
    }
}
