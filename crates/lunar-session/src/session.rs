//! Study session orchestrator.

use chrono::{Local, NaiveDate};
use tracing::info;

use lunar_answer::RelevanceExtractor;
use lunar_core::{AnswerConfig, EventConfig, Result};
use lunar_events::EventDetector;

use crate::materials::MaterialLibrary;
use crate::responder;
use crate::types::{ChatReply, EventSuggestion};

/// One student's session: uploaded materials plus the two engines.
///
/// Owns plain state only; callers decide sharing and persistence.
#[derive(Debug, Clone, Default)]
pub struct StudySession {
    library: MaterialLibrary,
    extractor: RelevanceExtractor,
    detector: EventDetector,
    student_name: Option<String>,
}

impl StudySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_configs(answer: AnswerConfig, events: EventConfig) -> Self {
        Self {
            extractor: RelevanceExtractor::new(answer),
            detector: EventDetector::new(events),
            ..Self::default()
        }
    }

    /// Remember the student so greetings can use their name.
    pub fn set_student_email(&mut self, email: &str) {
        self.student_name = Some(responder::name_from_email(email));
    }

    pub fn library(&self) -> &MaterialLibrary {
        &self.library
    }

    pub fn library_mut(&mut self) -> &mut MaterialLibrary {
        &mut self.library
    }

    /// Register an uploaded material (already extracted to plain text).
    pub fn upload(&mut self, name: &str, text: &str) -> Result<u64> {
        self.library.add(name, text)
    }

    /// Answer a chat message against the active material.
    pub fn ask(&self, message: &str) -> ChatReply {
        responder::compose_reply(
            &self.extractor,
            self.library.active(),
            message,
            self.student_name.as_deref(),
        )
    }

    /// Propose calendar events found in one material.
    pub fn suggest_events(&self, material_id: u64) -> Result<Vec<EventSuggestion>> {
        self.suggest_events_at(material_id, Local::now().date_naive())
    }

    /// Same as [`StudySession::suggest_events`] with a pinned reference date.
    pub fn suggest_events_at(
        &self,
        material_id: u64,
        today: NaiveDate,
    ) -> Result<Vec<EventSuggestion>> {
        let material = self
            .library
            .get(material_id)
            .ok_or_else(|| lunar_core::Error::MaterialNotFound(material_id.to_string()))?;

        let events = self
            .detector
            .detect_at(&material.text, Some(&material.name), today);
        info!(
            "suggesting {} events from material {}",
            events.len(),
            material.name
        );
        Ok(events
            .into_iter()
            .map(|event| EventSuggestion {
                event,
                source: Some(material.name.clone()),
            })
            .collect())
    }

    /// Propose events across every uploaded material, best first.
    pub fn suggest_all_events_at(&self, today: NaiveDate) -> Vec<EventSuggestion> {
        let mut suggestions: Vec<EventSuggestion> = self
            .library
            .iter()
            .flat_map(|material| {
                self.detector
                    .detect_at(&material.text, Some(&material.name), today)
                    .into_iter()
                    .map(|event| EventSuggestion {
                        event,
                        source: Some(material.name.clone()),
                    })
            })
            .collect();

        suggestions.sort_by(|a, b| {
            b.event
                .confidence
                .partial_cmp(&a.event.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        suggestions.truncate(self.detector.config().max_events);
        suggestions
    }

    pub fn suggest_all_events(&self) -> Vec<EventSuggestion> {
        self.suggest_all_events_at(Local::now().date_naive())
    }
}
