//! Analytics hook points.
//!
//! The session reports what the learner does through an [`EventSink`]. No
//! backend is assumed; [`LogEvents`] forwards to `tracing` and
//! [`NoopEvents`] drops everything.

use serde::Serialize;
use uuid::Uuid;

/// Something the learner did that an analytics backend may want to count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum QuizEvent {
    /// An option was chosen for the prompt `verb`.
    AnswerClicked { verb: String, correct: bool },
    /// A new round made `verb` the prompt.
    PromptViewed { verb: String },
    /// Speech was requested for `verb`.
    SpeechTriggered { verb: String },
}

impl QuizEvent {
    /// The prompt verb the event is about.
    pub fn verb(&self) -> &str {
        match self {
            QuizEvent::AnswerClicked { verb, .. }
            | QuizEvent::PromptViewed { verb }
            | QuizEvent::SpeechTriggered { verb } => verb,
        }
    }
}

/// Receiver for quiz events. Calls are fire-and-forget.
pub trait EventSink: Send + Sync {
    fn record(&self, event: &QuizEvent);
}

/// Drops every event.
pub struct NoopEvents;

impl EventSink for NoopEvents {
    fn record(&self, _: &QuizEvent) {}
}

/// Emits every event as a structured `tracing` line tagged with a session id.
pub struct LogEvents {
    session_id: Uuid,
}

impl LogEvents {
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }
}

impl Default for LogEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEvents {
    fn record(&self, event: &QuizEvent) {
        let label = event.verb();
        match event {
            QuizEvent::AnswerClicked { correct, .. } => tracing::info!(
                session = %self.session_id,
                category = "Verb",
                action = "Click",
                label,
                value = u8::from(*correct),
                "answer"
            ),
            QuizEvent::PromptViewed { .. } => tracing::debug!(
                session = %self.session_id,
                category = "Verb",
                action = "View",
                label,
                "prompt"
            ),
            QuizEvent::SpeechTriggered { .. } => tracing::debug!(
                session = %self.session_id,
                category = "Verb",
                action = "Speech",
                label,
                "speech"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_serializes_with_action_tag() {
        let event = QuizEvent::AnswerClicked {
            verb: "gehen".into(),
            correct: true,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["action"], "answer_clicked");
        assert_eq!(json["verb"], "gehen");
        assert_eq!(json["correct"], true);
    }

    #[test]
    fn verb_accessor() {
        let event = QuizEvent::SpeechTriggered {
            verb: "sein".into(),
        };
        assert_eq!(event.verb(), "sein");
    }

    #[test]
    fn sinks_are_object_safe() {
        let sinks: Vec<Box<dyn EventSink>> =
            vec![Box::new(NoopEvents), Box::new(LogEvents::new())];
        for sink in &sinks {
            sink.record(&QuizEvent::PromptViewed {
                verb: "gehen".into(),
            });
        }
    }

    #[test]
    fn log_events_has_stable_session() {
        let sink = LogEvents::new();
        let id = sink.session_id();
        sink.record(&QuizEvent::PromptViewed {
            verb: "essen".into(),
        });
        assert_eq!(sink.session_id(), id);
        assert_ne!(LogEvents::new().session_id(), id);
    }
}
