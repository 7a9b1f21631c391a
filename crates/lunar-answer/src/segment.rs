//! Sentence segmentation.
//!
//! Splits document text into sentence-like units on runs of `.`, `!`, `?`.
//! Segments are trimmed slices of the source document, so every excerpt the
//! extractor returns is literally present in the original text.

/// Split text into trimmed sentence segments.
///
/// A run of one or more terminator characters ends a segment; the
/// terminators stay attached to the segment they close. Empty segments are
/// dropped, length filtering is left to the caller.
pub fn split_segments(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_terminator(c) {
            continue;
        }
        // Extend over the whole terminator run ("...", "?!").
        let mut end = i + c.len_utf8();
        while let Some(&(j, next)) = chars.peek() {
            if is_terminator(next) {
                end = j + next.len_utf8();
                chars.next();
            } else {
                break;
            }
        }
        let segment = text[start..end].trim();
        if !segment.is_empty() {
            segments.push(segment);
        }
        start = end;
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        segments.push(tail);
    }
    segments
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}
