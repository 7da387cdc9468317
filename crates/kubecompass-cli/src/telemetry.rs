//! Analytics sink that writes events to the tracing log.

use kubecompass_domain::{CompletionEvent, EventSink, FeedbackEvent};
use std::time::{SystemTime, UNIX_EPOCH};

/// Current timestamp in seconds since Unix epoch
pub fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Logs events as structured `tracing` records under the `telemetry` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record_completion(&self, event: &CompletionEvent) {
        let answers = &event.answers;
        tracing::info!(
            target: "telemetry",
            team_size = answers.team_size.as_deref().unwrap_or("-"),
            needs_ui = answers.needs_ui.as_deref().unwrap_or("-"),
            multi_cluster = answers.multi_cluster.as_deref().unwrap_or("-"),
            rbac = answers.rbac.as_deref().unwrap_or("-"),
            winner = event.winner.id(),
            confidence = event.confidence.as_str(),
            timestamp = event.timestamp,
            "Wizard completed"
        );
    }

    fn record_feedback(&self, event: &FeedbackEvent) {
        match &event.text {
            Some(text) => tracing::info!(
                target: "telemetry",
                feedback = event.kind.as_str(),
                page = %event.page,
                text = %text,
                timestamp = event.timestamp,
                "Detailed feedback tracked"
            ),
            None => tracing::info!(
                target: "telemetry",
                feedback = event.kind.as_str(),
                page = %event.page,
                timestamp = event.timestamp,
                "Feedback tracked"
            ),
        }
    }
}

/// Pick the sink for the configured telemetry setting.
pub fn sink_for(enabled: bool) -> Box<dyn EventSink> {
    if enabled {
        Box::new(TracingSink)
    } else {
        Box::new(kubecompass_domain::NullSink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kubecompass_domain::FeedbackKind;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capture(f: impl FnOnce()) -> String {
        let buf = Captured::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buf.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_detailed_feedback_keeps_kind() {
        let event = FeedbackEvent::new(FeedbackKind::Negative, "/compare", Some("Missing Helm"), 0);
        let out = capture(|| TracingSink.record_feedback(&event));
        assert!(out.contains("Detailed feedback tracked"));
        assert!(out.contains("feedback="));
        assert!(out.contains("negative"));
        assert!(out.contains("Missing Helm"));
    }

    #[test]
    fn test_timestamp_is_after_2020() {
        assert!(current_timestamp() > 1_577_836_800);
    }
}
