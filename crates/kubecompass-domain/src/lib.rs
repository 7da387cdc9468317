//! KubeCompass Domain Layer
//!
//! This crate contains the decision logic behind the KubeCompass GitOps
//! advisor. It compares ArgoCD and Flux for a team by scoring four
//! categorical answers and produces an immutable recommendation that the
//! rendering and CLI layers consume.
//!
//! ## Key Concepts
//!
//! - **Answer Set**: the four required answers (team size, UI need,
//!   multi-cluster, RBAC)
//! - **Recommendation**: winner, confidence tier, both scores and both
//!   reason lists, derived purely from the answers
//! - **Questionnaire**: the step-by-step flow that collects an Answer Set
//! - **Theme**: the single persisted UI preference, behind [`ThemeStore`]
//!
//! ## Architecture
//!
//! - Pure business logic only, no I/O
//! - Infrastructure (config files, logging sinks, HTML) lives in other crates
//! - Trait definitions for external interactions in [`traits`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod answers;
pub mod confidence;
pub mod engine;
pub mod questionnaire;
pub mod theme;
pub mod tool;
pub mod traits;

// Re-exports for convenience
pub use answers::{AnswerError, AnswerSet, MultiCluster, RawAnswers, RbacNeed, TeamSize, UiNeed};
pub use confidence::Confidence;
pub use engine::{
    evaluate, evaluate_lenient, evaluate_with_policy, Reasons, Recommendation, Scores,
    UnknownAnswerPolicy, MAX_TOOL_SCORE,
};
pub use questionnaire::{Question, QuestionOption, Questionnaire, QuestionnaireError};
pub use theme::{MemoryThemeStore, Theme, ThemeError};
pub use tool::Tool;
pub use traits::{CompletionEvent, EventSink, FeedbackEvent, FeedbackKind, NullSink, ThemeStore};
