//! Chat reply composition: greeting handling, the upload prompt, and
//! distinct messages for an unreadable document versus a question the
//! document doesn't answer.

use lunar_answer::{AnswerResult, NoAnswerReason, RelevanceExtractor};

use crate::materials::Material;
use crate::types::ChatReply;

const GREETING_WORDS: &[&str] = &["hi", "hello", "hey", "hiya", "howdy"];

/// True when the message is a standalone greeting rather than a question.
pub fn is_greeting(message: &str) -> bool {
    let message = message.trim().to_lowercase();
    let mut words = message
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()));
    match words.next() {
        Some(first) if GREETING_WORDS.contains(&first) => words.count() < 3,
        _ => false,
    }
}

/// Derive a display name from an email address ("sara.ahmad@x" → "Sara").
pub fn name_from_email(email: &str) -> String {
    let Some((user, _)) = email.split_once('@') else {
        return "Student".to_string();
    };
    let first = user
        .split(['.', '_', '-'])
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or("Student");
    let mut chars = first.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => "Student".to_string(),
    }
}

/// Compose a displayable reply for a chat message.
pub fn compose_reply(
    extractor: &RelevanceExtractor,
    material: Option<&Material>,
    message: &str,
    student_name: Option<&str>,
) -> ChatReply {
    if is_greeting(message) {
        let text = match student_name {
            Some(name) => format!("Hello {name}! I'm ready to help you study."),
            None => "Hello! I'm ready to help you study.".to_string(),
        };
        return ChatReply::plain(text);
    }

    let Some(material) = material else {
        return ChatReply::plain("Please upload a document so I can help you study.");
    };

    render_answer(extractor.answer(&material.text, message))
}

fn render_answer(result: AnswerResult) -> ChatReply {
    if result.found {
        let body = result
            .excerpts
            .iter()
            .map(|e| e.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");
        return ChatReply {
            text: format!("Here's what I found in your document:\n\n{body}"),
            excerpts: result.excerpts,
        };
    }

    match result.reason {
        Some(NoAnswerReason::EmptyDocument) => ChatReply::plain(
            "That document doesn't seem to have readable text. Try uploading it again.",
        ),
        Some(NoAnswerReason::NoMatch) => ChatReply::plain(
            "I couldn't find an answer to that in your document. Try asking about a topic it covers.",
        ),
        None => ChatReply::plain("Ask me anything about your document."),
    }
}
