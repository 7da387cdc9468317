//! Wizard command implementation.

use crate::error::Result;
use crate::output::Formatter;
use crate::telemetry::current_timestamp;
use crate::wizard::{run_wizard, LineSource};
use kubecompass_domain::{evaluate, CompletionEvent, EventSink, Recommendation};

/// Execute the wizard command.
pub fn execute_wizard<S: LineSource>(
    source: &mut S,
    formatter: &Formatter,
    sink: &dyn EventSink,
) -> Result<Recommendation> {
    let answers = run_wizard(source, formatter)?;
    let rec = evaluate(&answers);
    sink.record_completion(&CompletionEvent::from_recommendation(&rec, current_timestamp()));

    println!();
    println!("{}", formatter.format_recommendation(&rec)?);
    Ok(rec)
}
