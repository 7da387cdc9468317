//! Recommend command implementation.

use crate::cli::{AnswerArgs, RecommendArgs};
use crate::error::Result;
use crate::output::Formatter;
use crate::telemetry::current_timestamp;
use kubecompass_domain::{
    evaluate_with_policy, CompletionEvent, EventSink, RawAnswers, Recommendation,
    UnknownAnswerPolicy,
};

/// Execute the recommend command.
pub fn execute_recommend(
    args: RecommendArgs,
    policy: UnknownAnswerPolicy,
    formatter: &Formatter,
    sink: &dyn EventSink,
) -> Result<()> {
    let rec = evaluate_args(&args.answers, policy)?;
    sink.record_completion(&CompletionEvent::from_recommendation(&rec, current_timestamp()));
    println!("{}", formatter.format_recommendation(&rec)?);
    Ok(())
}

/// Evaluate command-line answers. `--lenient` overrides the configured policy.
pub fn evaluate_args(
    args: &AnswerArgs,
    policy: UnknownAnswerPolicy,
) -> Result<Recommendation<RawAnswers>> {
    let policy = if args.lenient {
        UnknownAnswerPolicy::Ignore
    } else {
        policy
    };
    let rec = evaluate_with_policy(&args.to_raw(), policy)?;
    tracing::info!(
        winner = rec.winner.id(),
        confidence = rec.confidence.as_str(),
        argocd = rec.scores.argocd,
        flux = rec.scores.flux,
        "Recommendation computed"
    );
    Ok(rec)
}
