//! Answer module - the four categorical inputs to the engine
//!
//! Every answer is a closed enum. Unknown values are rejected when the
//! string form ([`RawAnswers`]) is converted into an [`AnswerSet`], so the
//! scoring rules never see anything outside their weight table.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised at the answer input boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerError {
    /// A question was left unanswered
    #[error("Missing answer for '{0}'")]
    Missing(&'static str),

    /// A question was answered with a value outside its options
    #[error("Unrecognized answer '{value}' for '{question}'")]
    Unrecognized {
        /// Form key of the question
        question: &'static str,
        /// The rejected value
        value: String,
    },
}

macro_rules! answer_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $key:literal {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Form key of the question this answers
            pub const KEY: &'static str = $key;

            /// Every option, in the order the form lists them
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Get the wire name of the answer
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }

            /// Parse an answer from its wire name (case-insensitive)
            pub fn parse(s: &str) -> Option<Self> {
                match s.trim().to_lowercase().as_str() {
                    $($wire => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = AnswerError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s).ok_or_else(|| AnswerError::Unrecognized {
                    question: $key,
                    value: s.to_string(),
                })
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

answer_enum! {
    /// How many people work with the GitOps tooling
    TeamSize, "teamSize" {
        /// 1-5 people
        Small => "small",
        /// 5-20 people
        Medium => "medium",
        /// 20+ people
        Large => "large",
    }
}

answer_enum! {
    /// Whether the team needs a web UI
    UiNeed, "needsUI" {
        /// A web UI is required
        Yes => "yes",
        /// A web UI would be nice to have
        Nice => "nice",
        /// CLI-first workflow, no UI needed
        No => "no",
    }
}

answer_enum! {
    /// How important managing several clusters is
    MultiCluster, "multiCluster" {
        /// 5+ clusters, critical
        Critical => "critical",
        /// 2-4 clusters
        Some => "some",
        /// Single cluster
        None => "none",
    }
}

answer_enum! {
    /// Level of access control the team needs
    RbacNeed, "rbac" {
        /// Per-application access control
        Granular => "granular",
        /// Namespace-level control is enough
        Basic => "basic",
        /// RBAC is not critical
        None => "none",
    }
}

/// A complete, validated set of answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnswerSet {
    /// Team size
    #[serde(rename = "teamSize")]
    pub team_size: TeamSize,
    /// Web UI need
    #[serde(rename = "needsUI")]
    pub needs_ui: UiNeed,
    /// Multi-cluster importance
    #[serde(rename = "multiCluster")]
    pub multi_cluster: MultiCluster,
    /// RBAC requirement
    pub rbac: RbacNeed,
}

impl AnswerSet {
    /// Create a new answer set
    pub fn new(
        team_size: TeamSize,
        needs_ui: UiNeed,
        multi_cluster: MultiCluster,
        rbac: RbacNeed,
    ) -> Self {
        Self {
            team_size,
            needs_ui,
            multi_cluster,
            rbac,
        }
    }

    /// Iterate over every possible answer set (81 combinations)
    pub fn all() -> impl Iterator<Item = AnswerSet> {
        TeamSize::ALL.iter().flat_map(|&team_size| {
            UiNeed::ALL.iter().flat_map(move |&needs_ui| {
                MultiCluster::ALL.iter().flat_map(move |&multi_cluster| {
                    RbacNeed::ALL
                        .iter()
                        .map(move |&rbac| AnswerSet::new(team_size, needs_ui, multi_cluster, rbac))
                })
            })
        })
    }
}

/// Answers as submitted by a form, before validation
///
/// Field names follow the form keys when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAnswers {
    /// Raw `teamSize` value
    #[serde(rename = "teamSize", default, skip_serializing_if = "Option::is_none")]
    pub team_size: Option<String>,
    /// Raw `needsUI` value
    #[serde(rename = "needsUI", default, skip_serializing_if = "Option::is_none")]
    pub needs_ui: Option<String>,
    /// Raw `multiCluster` value
    #[serde(rename = "multiCluster", default, skip_serializing_if = "Option::is_none")]
    pub multi_cluster: Option<String>,
    /// Raw `rbac` value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rbac: Option<String>,
}

impl RawAnswers {
    /// Validate every field and build an [`AnswerSet`]
    ///
    /// # Errors
    /// Returns the first missing or unrecognized field, in question order
    pub fn validate(&self) -> Result<AnswerSet, AnswerError> {
        Ok(AnswerSet {
            team_size: required(self.team_size.as_deref(), TeamSize::KEY)?.parse()?,
            needs_ui: required(self.needs_ui.as_deref(), UiNeed::KEY)?.parse()?,
            multi_cluster: required(self.multi_cluster.as_deref(), MultiCluster::KEY)?.parse()?,
            rbac: required(self.rbac.as_deref(), RbacNeed::KEY)?.parse()?,
        })
    }
}

fn required<'a>(value: Option<&'a str>, key: &'static str) -> Result<&'a str, AnswerError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AnswerError::Missing(key)),
    }
}

impl TryFrom<RawAnswers> for AnswerSet {
    type Error = AnswerError;

    fn try_from(raw: RawAnswers) -> Result<Self, Self::Error> {
        raw.validate()
    }
}

impl From<AnswerSet> for RawAnswers {
    fn from(answers: AnswerSet) -> Self {
        Self {
            team_size: Some(answers.team_size.as_str().to_string()),
            needs_ui: Some(answers.needs_ui.as_str().to_string()),
            multi_cluster: Some(answers.multi_cluster.as_str().to_string()),
            rbac: Some(answers.rbac.as_str().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(team: &str, ui: &str, mc: &str, rbac: &str) -> RawAnswers {
        RawAnswers {
            team_size: Some(team.to_string()),
            needs_ui: Some(ui.to_string()),
            multi_cluster: Some(mc.to_string()),
            rbac: Some(rbac.to_string()),
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(TeamSize::parse("Small"), Some(TeamSize::Small));
        assert_eq!(UiNeed::parse(" NICE "), Some(UiNeed::Nice));
        assert_eq!(MultiCluster::parse("none"), Some(MultiCluster::None));
        assert_eq!(RbacNeed::parse("granular"), Some(RbacNeed::Granular));
        assert_eq!(RbacNeed::parse("admin"), None);
    }

    #[test]
    fn test_validate_complete_answers() {
        let answers = raw("large", "yes", "critical", "granular").validate().unwrap();
        assert_eq!(
            answers,
            AnswerSet::new(TeamSize::Large, UiNeed::Yes, MultiCluster::Critical, RbacNeed::Granular)
        );
    }

    #[test]
    fn test_validate_missing_field() {
        let mut answers = raw("small", "no", "none", "none");
        answers.multi_cluster = None;
        assert_eq!(answers.validate(), Err(AnswerError::Missing("multiCluster")));

        answers.multi_cluster = Some("   ".to_string());
        assert_eq!(answers.validate(), Err(AnswerError::Missing("multiCluster")));
    }

    #[test]
    fn test_validate_rejects_unknown_value() {
        let err = raw("huge", "no", "none", "none").validate().unwrap_err();
        assert_eq!(
            err,
            AnswerError::Unrecognized {
                question: "teamSize",
                value: "huge".to_string()
            }
        );
    }

    #[test]
    fn test_all_combinations() {
        assert_eq!(AnswerSet::all().count(), 81);
    }

    #[test]
    fn test_json_uses_form_keys() {
        let answers = AnswerSet::new(TeamSize::Medium, UiNeed::Nice, MultiCluster::Some, RbacNeed::Basic);
        let json = serde_json::to_value(answers).unwrap();
        assert_eq!(json["teamSize"], "medium");
        assert_eq!(json["needsUI"], "nice");
        assert_eq!(json["multiCluster"], "some");
        assert_eq!(json["rbac"], "basic");
    }

    #[test]
    fn test_raw_conversion_is_lossless() {
        let answers = AnswerSet::new(TeamSize::Small, UiNeed::No, MultiCluster::None, RbacNeed::None);
        let raw: RawAnswers = answers.into();
        assert_eq!(AnswerSet::try_from(raw).unwrap(), answers);
    }
}
