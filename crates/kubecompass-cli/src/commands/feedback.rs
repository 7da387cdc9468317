//! Feedback command implementation.

use crate::cli::FeedbackArgs;
use crate::error::Result;
use crate::output::Formatter;
use crate::telemetry::current_timestamp;
use kubecompass_domain::{EventSink, FeedbackEvent, FeedbackKind};

/// Execute the feedback command.
///
/// `default_page` is used when no `--page` was given.
pub fn execute_feedback(
    args: FeedbackArgs,
    default_page: &str,
    formatter: &Formatter,
    sink: &dyn EventSink,
) -> Result<()> {
    let kind: FeedbackKind = args.kind.into();
    let page = args.page.unwrap_or_else(|| default_page.to_string());
    let event = FeedbackEvent::new(kind, page, args.message.as_deref(), current_timestamp());
    sink.record_feedback(&event);

    let message = match (kind, &event.text) {
        (_, Some(_)) => "Thank you for your detailed feedback!",
        (FeedbackKind::Positive, None) => "Thank you! Your feedback helps improve KubeCompass.",
        (FeedbackKind::Negative, None) => {
            "Sorry to hear that. Tell us more with --message \"...\""
        }
    };
    println!("{}", formatter.success(message));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::FeedbackArg;
    use crate::config::OutputFormat;
    use kubecompass_domain::CompletionEvent;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<FeedbackEvent>>);

    impl EventSink for Recorder {
        fn record_completion(&self, _event: &CompletionEvent) {}

        fn record_feedback(&self, event: &FeedbackEvent) {
            self.0.borrow_mut().push(event.clone());
        }
    }

    fn formatter() -> Formatter {
        Formatter::new(OutputFormat::Table, false)
    }

    #[test]
    fn test_feedback_is_recorded() {
        let sink = Recorder::default();
        let args = FeedbackArgs {
            kind: FeedbackArg::Negative,
            page: Some("/compare/gitops".to_string()),
            message: Some("Needs a Helm section".to_string()),
        };
        execute_feedback(args, "/wizard", &formatter(), &sink).unwrap();

        let events = sink.0.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, FeedbackKind::Negative);
        assert_eq!(events[0].page, "/compare/gitops");
        assert_eq!(events[0].text.as_deref(), Some("Needs a Helm section"));
    }

    #[test]
    fn test_feedback_uses_default_page() {
        let sink = Recorder::default();
        let args = FeedbackArgs {
            kind: FeedbackArg::Positive,
            page: None,
            message: Some("   ".to_string()),
        };
        execute_feedback(args, "/wizard", &formatter(), &sink).unwrap();

        let events = sink.0.borrow();
        assert_eq!(events[0].page, "/wizard");
        assert_eq!(events[0].text, None);
    }
}
