//! Question tokenization and stop-word filtering.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Question-phrasing words that carry no content.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "what", "is", "are", "the", "how", "why", "when", "where", "which",
        "who", "whose", "does", "do", "did", "can", "could", "would",
        "should", "will", "explain", "define", "describe", "tell", "me",
        "about", "give", "please", "this", "that", "these", "those", "from",
        "with", "your", "mean", "means",
    ]
    .into_iter()
    .collect()
});

/// Extract meaningful tokens from a question.
///
/// Lowercases, splits on whitespace, strips surrounding punctuation, and
/// drops stop-words and tokens shorter than `min_len`. An empty return
/// means the question has no content to match (greeting, vague prompt).
pub fn question_tokens(question: &str, min_len: usize) -> Vec<String> {
    question
        .to_lowercase()
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| w.len() >= min_len && !STOP_WORDS.contains(w))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_words_removed() {
        let tokens = question_tokens("What is artificial intelligence?", 4);
        assert_eq!(tokens, vec!["artificial", "intelligence"]);
    }

    #[test]
    fn test_short_tokens_removed() {
        let tokens = question_tokens("how do AI and ML work together", 4);
        assert_eq!(tokens, vec!["work", "together"]);
    }

    #[test]
    fn test_greeting_yields_nothing() {
        assert!(question_tokens("hi", 4).is_empty());
        assert!(question_tokens("tell me about this", 4).is_empty());
    }

    #[test]
    fn test_punctuation_stripped() {
        let tokens = question_tokens("Define: recursion!", 4);
        assert_eq!(tokens, vec!["recursion"]);
    }
}
