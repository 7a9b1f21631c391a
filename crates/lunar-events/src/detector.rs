//! Line-granular event detection pipeline.

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::classify::classify_line;
use crate::patterns::{find_date, find_location, find_time};
use crate::types::{DetectedEvent, EventKind};
use lunar_core::EventConfig;

/// Scans document text for calendar-worthy statements.
///
/// Stateless and deterministic apart from the reference date used for the
/// recency adjustment; use [`EventDetector::detect_at`] to pin it.
#[derive(Debug, Clone, Default)]
pub struct EventDetector {
    config: EventConfig,
}

impl EventDetector {
    pub fn new(config: EventConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EventConfig {
        &self.config
    }

    /// Detect events using the current local date for recency.
    pub fn detect(&self, document: &str, source: Option<&str>) -> Vec<DetectedEvent> {
        self.detect_at(document, source, Local::now().date_naive())
    }

    /// Detect events, comparing event dates against `today`.
    pub fn detect_at(
        &self,
        document: &str,
        source: Option<&str>,
        today: NaiveDate,
    ) -> Vec<DetectedEvent> {
        let mut events: Vec<DetectedEvent> = document
            .lines()
            .filter_map(|line| self.scan_line(line, source, today))
            .collect();

        // Stable sort: equal confidence keeps document order.
        events.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        events.truncate(self.config.max_events);

        debug!("detected {} events", events.len());
        events
    }

    fn scan_line(
        &self,
        line: &str,
        source: Option<&str>,
        today: NaiveDate,
    ) -> Option<DetectedEvent> {
        let line = line.trim();
        if line.is_empty() || line.len() > self.config.max_line_len {
            return None;
        }

        let (token, date) = find_date(line)?;
        // Looked like a date but not a real calendar day (e.g. Feb 30).
        let date = date?;

        let line_lower = line.to_lowercase();
        let (kind, mut confidence) = match classify_line(&line_lower) {
            Some(kind) => (kind, self.config.keyword_confidence),
            None => (EventKind::Reminder, self.config.default_confidence),
        };

        if date < today {
            // Past events are still surfaced, just at lower priority.
            confidence *= self.config.past_penalty;
        }

        let title = self.build_title(line, token.start, token.end, source);
        let time = find_time(line);
        let location = find_location(line);
        let notes = (line.len() < self.config.max_notes_len).then(|| line.to_string());

        Some(DetectedEvent {
            title,
            date: date.format("%Y-%m-%d").to_string(),
            time,
            kind,
            notes,
            location,
            confidence,
        })
    }

    /// Title = line minus the date text, cleaned of leading bullets.
    fn build_title(
        &self,
        line: &str,
        date_start: usize,
        date_end: usize,
        source: Option<&str>,
    ) -> String {
        let without_date = format!("{}{}", &line[..date_start], &line[date_end..]);
        let title = without_date
            .trim()
            .trim_start_matches(|c: char| matches!(c, '-' | ':' | '•' | '*'))
            .trim()
            .to_string();

        if title.len() < 3 {
            return format!("Event from {}", source.unwrap_or("document"));
        }

        if title.chars().count() > self.config.max_title_len {
            let truncated: String = title.chars().take(self.config.max_title_len - 3).collect();
            return format!("{}...", truncated);
        }
        title
    }
}
