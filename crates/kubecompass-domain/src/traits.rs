//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and
//! infrastructure. Implementations live in other crates.

use crate::{Confidence, RawAnswers, Recommendation, Theme, ThemeError, Tool};
use serde::{Deserialize, Serialize};

/// Trait for reading and persisting the theme preference
///
/// Implemented by the infrastructure layer (kubecompass-cli)
pub trait ThemeStore {
    /// Current theme, or the default when nothing is stored
    fn get(&self) -> Theme;

    /// Persist a theme
    fn set(&mut self, theme: Theme) -> Result<(), ThemeError>;

    /// Flip and persist the theme, returning the new value
    fn toggle(&mut self) -> Result<Theme, ThemeError> {
        let theme = self.get().toggled();
        self.set(theme)?;
        Ok(theme)
    }
}

/// A completed questionnaire, as reported to analytics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionEvent {
    /// Copy of the submitted answers
    pub answers: RawAnswers,
    /// Recommended tool
    pub winner: Tool,
    /// Confidence of the recommendation
    pub confidence: Confidence,
    /// Seconds since the Unix epoch
    pub timestamp: u64,
}

impl CompletionEvent {
    /// Build an event from a recommendation
    pub fn from_recommendation<A>(rec: &Recommendation<A>, timestamp: u64) -> Self
    where
        A: Clone + Into<RawAnswers>,
    {
        Self {
            answers: rec.answers.clone().into(),
            winner: rec.winner,
            confidence: rec.confidence,
            timestamp,
        }
    }
}

/// Thumbs up or down on a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    /// The page helped
    Positive,
    /// The page did not help
    Negative,
}

impl FeedbackKind {
    /// Get the kind as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackKind::Positive => "positive",
            FeedbackKind::Negative => "negative",
        }
    }
}

/// Feedback left on a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEvent {
    /// Positive or negative
    pub kind: FeedbackKind,
    /// Page the feedback refers to
    pub page: String,
    /// Optional detailed text; never empty when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Seconds since the Unix epoch
    pub timestamp: u64,
}

impl FeedbackEvent {
    /// Build a feedback event. Blank detail text is dropped.
    pub fn new(kind: FeedbackKind, page: impl Into<String>, text: Option<&str>, timestamp: u64) -> Self {
        let text = text
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        Self {
            kind,
            page: page.into(),
            text,
            timestamp,
        }
    }
}

/// Fire-and-forget analytics sink
pub trait EventSink {
    /// Record a questionnaire completion
    fn record_completion(&self, event: &CompletionEvent);

    /// Record page feedback
    fn record_feedback(&self, event: &FeedbackEvent);
}

/// Sink that discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record_completion(&self, _event: &CompletionEvent) {}

    fn record_feedback(&self, _event: &FeedbackEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{evaluate, AnswerSet, MultiCluster, RbacNeed, TeamSize, UiNeed};

    #[test]
    fn test_completion_event_copies_result() {
        let answers = AnswerSet::new(TeamSize::Large, UiNeed::Yes, MultiCluster::Some, RbacNeed::Granular);
        let rec = evaluate(&answers);
        let event = CompletionEvent::from_recommendation(&rec, 42);
        assert_eq!(event.answers.validate().unwrap(), answers);
        assert_eq!(event.winner, Tool::ArgoCd);
        assert_eq!(event.confidence, rec.confidence);
        assert_eq!(event.timestamp, 42);
    }

    #[test]
    fn test_feedback_drops_blank_text() {
        let event = FeedbackEvent::new(FeedbackKind::Negative, "/compare", Some("   "), 0);
        assert!(event.text.is_none());

        let event = FeedbackEvent::new(FeedbackKind::Negative, "/compare", Some(" too long "), 0);
        assert_eq!(event.text.as_deref(), Some("too long"));
    }
}
