//! Relevance extraction: score document segments against a question.

use tracing::debug;

use crate::query::question_tokens;
use crate::segment::split_segments;
use crate::types::{AnswerResult, Excerpt, NoAnswerReason};
use lunar_core::AnswerConfig;

/// Scores and ranks document sentences by relevance to a question.
///
/// Pure and deterministic: identical inputs always yield identical results,
/// and every excerpt is a literal substring of the source document.
#[derive(Debug, Clone, Default)]
pub struct RelevanceExtractor {
    config: AnswerConfig,
}

impl RelevanceExtractor {
    pub fn new(config: AnswerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnswerConfig {
        &self.config
    }

    /// Answer a question from document text.
    ///
    /// Never panics; malformed input degrades to a typed refusal so the
    /// chat layer always has something displayable.
    pub fn answer(&self, document: &str, question: &str) -> AnswerResult {
        let document = document.trim();
        if document.len() < self.config.min_document_len {
            debug!("document below minimum length, refusing");
            return AnswerResult::not_found(NoAnswerReason::EmptyDocument);
        }

        let question = question.trim();
        if question.is_empty() {
            return AnswerResult::empty();
        }

        let segments: Vec<&str> = split_segments(document)
            .into_iter()
            .filter(|s| s.len() >= self.config.min_segment_len)
            .collect();

        let tokens = question_tokens(question, self.config.min_token_len);

        // Vague prompt with no content words: hand back the opening
        // segments instead of failing outright.
        if tokens.is_empty() {
            let excerpts: Vec<Excerpt> = segments
                .iter()
                .take(self.config.fallback_segments)
                .map(|s| Excerpt {
                    text: (*s).to_string(),
                    score: 0.0,
                })
                .collect();
            if excerpts.is_empty() {
                return AnswerResult::not_found(NoAnswerReason::NoMatch);
            }
            debug!("no meaningful tokens, returning opening segments");
            return AnswerResult::found(excerpts);
        }

        let question_lower = question.to_lowercase();
        let mut scored: Vec<(i64, &str)> = Vec::new();

        for &segment in &segments {
            let segment_lower = segment.to_lowercase();
            let mut score = 0i64;
            for token in &tokens {
                let occurrences = segment_lower.matches(token.as_str()).count();
                score += occurrences as i64 * self.config.occurrence_weight;
            }
            if segment_lower.contains(&question_lower) {
                score += self.config.phrase_bonus;
            }
            if score > 0 {
                scored.push((score, segment));
            }
        }

        // Stable sort: equal scores keep document order.
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        if scored.is_empty() {
            debug!("no segment matched any question token");
            return AnswerResult::not_found(NoAnswerReason::NoMatch);
        }

        let excerpts = scored
            .into_iter()
            .take(self.config.max_excerpts)
            .map(|(score, text)| Excerpt {
                text: text.to_string(),
                score: score as f64,
            })
            .collect();

        AnswerResult::found(excerpts)
    }
}
