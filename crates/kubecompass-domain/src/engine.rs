//! Recommendation engine
//!
//! Applies four scoring rules in fixed order (team size, UI need,
//! multi-cluster, RBAC). Each rule adds points to one or both tools and
//! appends a reason to the matching reason list. The result is a pure
//! function of the answers.

use crate::answers::{AnswerSet, MultiCluster, RawAnswers, RbacNeed, TeamSize, UiNeed};
use crate::{AnswerError, Confidence, Tool};
use serde::{Deserialize, Serialize};

/// Theoretical maximum per tool used to scale score bars
///
/// The weight table actually caps ArgoCD at 14 and Flux at 6.
pub const MAX_TOOL_SCORE: u32 = 15;

/// Accumulated points per tool
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scores {
    /// ArgoCD points
    pub argocd: u32,
    /// Flux points
    pub flux: u32,
}

impl Scores {
    /// Points for a tool
    pub fn get(&self, tool: Tool) -> u32 {
        match tool {
            Tool::ArgoCd => self.argocd,
            Tool::Flux => self.flux,
        }
    }

    /// Absolute gap between the two scores
    pub fn margin(&self) -> u32 {
        self.argocd.abs_diff(self.flux)
    }

    /// Score as a percentage of [`MAX_TOOL_SCORE`]
    pub fn percent(&self, tool: Tool) -> f64 {
        f64::from(self.get(tool)) / f64::from(MAX_TOOL_SCORE) * 100.0
    }

    fn add(&mut self, tool: Tool, points: u32) {
        match tool {
            Tool::ArgoCd => self.argocd += points,
            Tool::Flux => self.flux += points,
        }
    }
}

/// Reasons supporting each tool, in question order
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reasons {
    /// Reasons for ArgoCD
    pub argocd: Vec<String>,
    /// Reasons for Flux
    pub flux: Vec<String>,
}

impl Reasons {
    /// Reasons for a tool
    pub fn for_tool(&self, tool: Tool) -> &[String] {
        match tool {
            Tool::ArgoCd => &self.argocd,
            Tool::Flux => &self.flux,
        }
    }

    fn push(&mut self, tool: Tool, reason: &str) {
        match tool {
            Tool::ArgoCd => self.argocd.push(reason.to_string()),
            Tool::Flux => self.flux.push(reason.to_string()),
        }
    }
}

/// Outcome of one evaluation
///
/// `A` is the answer record the evaluation started from: a validated
/// [`AnswerSet`] for [`evaluate`], the raw form values for
/// [`evaluate_lenient`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Recommendation<A = AnswerSet> {
    /// Winning tool
    pub winner: Tool,
    /// Confidence tier
    pub confidence: Confidence,
    /// Scores for both tools
    pub scores: Scores,
    /// Reasons for both tools
    pub reasons: Reasons,
    /// The answers that produced this result
    pub answers: A,
}

impl<A> Recommendation<A> {
    /// The tool that did not win
    pub fn runner_up(&self) -> Tool {
        self.winner.other()
    }

    /// Reasons supporting the winner
    pub fn winning_reasons(&self) -> &[String] {
        self.reasons.for_tool(self.winner)
    }
}

/// How unrecognized or missing raw answers are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownAnswerPolicy {
    /// Refuse to evaluate
    #[default]
    Reject,
    /// Evaluate, scoring the offending question as zero for both tools
    Ignore,
}

/// Evaluate a validated answer set
pub fn evaluate(answers: &AnswerSet) -> Recommendation {
    let (scores, reasons) = score(
        Some(answers.team_size),
        Some(answers.needs_ui),
        Some(answers.multi_cluster),
        Some(answers.rbac),
    );
    finish(scores, reasons, *answers)
}

/// Evaluate raw form values, skipping anything that does not parse
///
/// A missing or unrecognized field contributes nothing to either score and
/// adds no reason.
pub fn evaluate_lenient(raw: &RawAnswers) -> Recommendation<RawAnswers> {
    let (scores, reasons) = score(
        raw.team_size.as_deref().and_then(TeamSize::parse),
        raw.needs_ui.as_deref().and_then(UiNeed::parse),
        raw.multi_cluster.as_deref().and_then(MultiCluster::parse),
        raw.rbac.as_deref().and_then(RbacNeed::parse),
    );
    finish(scores, reasons, raw.clone())
}

/// Evaluate raw form values under a policy
///
/// # Errors
/// With [`UnknownAnswerPolicy::Reject`], returns the first invalid field
pub fn evaluate_with_policy(
    raw: &RawAnswers,
    policy: UnknownAnswerPolicy,
) -> Result<Recommendation<RawAnswers>, AnswerError> {
    match policy {
        UnknownAnswerPolicy::Reject => {
            let answers = raw.validate()?;
            let rec = evaluate(&answers);
            Ok(Recommendation {
                winner: rec.winner,
                confidence: rec.confidence,
                scores: rec.scores,
                reasons: rec.reasons,
                answers: answers.into(),
            })
        }
        UnknownAnswerPolicy::Ignore => Ok(evaluate_lenient(raw)),
    }
}

fn finish<A>(scores: Scores, reasons: Reasons, answers: A) -> Recommendation<A> {
    // Flux takes ties
    let winner = if scores.argocd > scores.flux {
        Tool::ArgoCd
    } else {
        Tool::Flux
    };

    Recommendation {
        winner,
        confidence: Confidence::from_margin(scores.margin()),
        scores,
        reasons,
        answers,
    }
}

fn score(
    team_size: Option<TeamSize>,
    needs_ui: Option<UiNeed>,
    multi_cluster: Option<MultiCluster>,
    rbac: Option<RbacNeed>,
) -> (Scores, Reasons) {
    let mut scores = Scores::default();
    let mut reasons = Reasons::default();
    let mut award = |tool: Tool, points: u32, reason: &str| {
        scores.add(tool, points);
        reasons.push(tool, reason);
    };

    match team_size {
        Some(TeamSize::Small) => {
            award(Tool::Flux, 2, "Small team (1-5 people) - Flux is simpler to manage");
        }
        Some(TeamSize::Medium) => {
            award(Tool::ArgoCd, 1, "Medium team (5-20) - ArgoCD scales well");
            award(Tool::Flux, 1, "Medium team (5-20) - Flux works great too");
        }
        Some(TeamSize::Large) => {
            award(
                Tool::ArgoCd,
                3,
                "Large team (20+) - ArgoCD provides better RBAC and UI for collaboration",
            );
        }
        None => {}
    }

    match needs_ui {
        Some(UiNeed::Yes) => {
            award(Tool::ArgoCd, 4, "Web UI required - ArgoCD has rich, feature-complete UI");
        }
        Some(UiNeed::Nice) => {
            award(Tool::ArgoCd, 2, "UI nice to have - ArgoCD provides visualization benefits");
        }
        Some(UiNeed::No) => {
            award(Tool::Flux, 2, "CLI-first workflow - Flux is designed for CLI users");
        }
        None => {}
    }

    match multi_cluster {
        Some(MultiCluster::Critical) => {
            award(
                Tool::ArgoCd,
                4,
                "Multi-cluster critical (5+) - ArgoCD excels at managing many clusters",
            );
        }
        Some(MultiCluster::Some) => {
            award(Tool::ArgoCd, 2, "Multi-cluster (2-4) - ArgoCD makes this straightforward");
        }
        Some(MultiCluster::None) => {
            award(Tool::Flux, 1, "Single cluster - Flux is lightweight and sufficient");
        }
        None => {}
    }

    match rbac {
        Some(RbacNeed::Granular) => {
            award(Tool::ArgoCd, 3, "Granular RBAC needed - ArgoCD provides per-app access control");
        }
        Some(RbacNeed::Basic) => {
            award(Tool::Flux, 1, "Basic RBAC sufficient - Flux namespace-level control works");
        }
        Some(RbacNeed::None) => {
            award(Tool::Flux, 1, "RBAC not critical - Flux simplicity is advantageous");
        }
        None => {}
    }

    (scores, reasons)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_answers() -> impl Strategy<Value = AnswerSet> {
        (
            prop::sample::select(TeamSize::ALL),
            prop::sample::select(UiNeed::ALL),
            prop::sample::select(MultiCluster::ALL),
            prop::sample::select(RbacNeed::ALL),
        )
            .prop_map(|(t, u, m, r)| AnswerSet::new(t, u, m, r))
    }

    proptest! {
        #[test]
        fn evaluation_is_deterministic(a in any_answers()) {
            prop_assert_eq!(evaluate(&a), evaluate(&a));
        }

        #[test]
        fn scores_stay_within_weight_table(a in any_answers()) {
            let rec = evaluate(&a);
            prop_assert!(rec.scores.argocd <= 14);
            prop_assert!(rec.scores.flux <= 6);
            prop_assert!(rec.scores.argocd <= MAX_TOOL_SCORE);
        }

        #[test]
        fn winner_and_confidence_follow_scores(a in any_answers()) {
            let rec = evaluate(&a);
            let expected = if rec.scores.argocd > rec.scores.flux { Tool::ArgoCd } else { Tool::Flux };
            prop_assert_eq!(rec.winner, expected);
            prop_assert_eq!(rec.confidence, Confidence::from_margin(rec.scores.margin()));
        }

        #[test]
        fn reasons_are_bounded_by_question_count(a in any_answers()) {
            let rec = evaluate(&a);
            prop_assert!(rec.reasons.argocd.len() <= 4);
            prop_assert!(rec.reasons.flux.len() <= 4);
            // Every question contributes to at least one tool
            prop_assert!(rec.reasons.argocd.len() + rec.reasons.flux.len() >= 4);
        }
    }
}
