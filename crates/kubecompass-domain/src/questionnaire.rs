//! Questionnaire module - step-by-step collection of an answer set
//!
//! The flow shows one question at a time. Moving forward requires the
//! current question to be answered; moving back is always allowed except
//! from the first question. Submission is blocked until every question has
//! a valid answer.

use crate::answers::{AnswerSet, MultiCluster, RawAnswers, RbacNeed, TeamSize, UiNeed};
use crate::AnswerError;
use thiserror::Error;

/// Message shown when the user tries to continue without answering
pub const UNANSWERED_MESSAGE: &str = "Please select an option to continue";

/// Errors raised while walking the questionnaire
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionnaireError {
    /// The current question has no answer yet
    #[error("{}", UNANSWERED_MESSAGE)]
    Unanswered(Question),

    /// The value is not one of the current question's options
    #[error("'{value}' is not an option for '{}'", .question.key())]
    InvalidOption {
        /// Question being answered
        question: Question,
        /// The rejected value
        value: String,
    },

    /// Already at the last question
    #[error("No further questions; submit the questionnaire")]
    AtEnd,

    /// Building the answer set failed
    #[error(transparent)]
    Answers(#[from] AnswerError),
}

/// One of the four questions, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Question {
    /// Team size
    TeamSize,
    /// Web UI need
    NeedsUi,
    /// Multi-cluster importance
    MultiCluster,
    /// RBAC requirement
    Rbac,
}

/// A selectable answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionOption {
    /// Wire value submitted for this option
    pub value: &'static str,
    /// Label shown to the user
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> QuestionOption {
    QuestionOption { value, label }
}

const TEAM_SIZE_OPTIONS: &[QuestionOption] = &[
    opt("small", "Small (1-5 people)"),
    opt("medium", "Medium (5-20 people)"),
    opt("large", "Large (20+ people)"),
];

const NEEDS_UI_OPTIONS: &[QuestionOption] = &[
    opt("yes", "Yes, a web UI is required"),
    opt("nice", "Nice to have"),
    opt("no", "No, we prefer CLI workflows"),
];

const MULTI_CLUSTER_OPTIONS: &[QuestionOption] = &[
    opt("critical", "Critical (5+ clusters)"),
    opt("some", "Some (2-4 clusters)"),
    opt("none", "Single cluster"),
];

const RBAC_OPTIONS: &[QuestionOption] = &[
    opt("granular", "Granular, per-application access control"),
    opt("basic", "Basic, namespace-level control"),
    opt("none", "Not critical"),
];

impl Question {
    /// All questions in the order they are asked and scored
    pub const ALL: [Question; 4] = [
        Question::TeamSize,
        Question::NeedsUi,
        Question::MultiCluster,
        Question::Rbac,
    ];

    /// Form key
    pub fn key(&self) -> &'static str {
        match self {
            Question::TeamSize => TeamSize::KEY,
            Question::NeedsUi => UiNeed::KEY,
            Question::MultiCluster => MultiCluster::KEY,
            Question::Rbac => RbacNeed::KEY,
        }
    }

    /// Question text
    pub fn prompt(&self) -> &'static str {
        match self {
            Question::TeamSize => "How large is your team?",
            Question::NeedsUi => "Do you need a web UI?",
            Question::MultiCluster => "How many clusters will you manage?",
            Question::Rbac => "What level of access control do you need?",
        }
    }

    /// Selectable options, in display order
    pub fn options(&self) -> &'static [QuestionOption] {
        match self {
            Question::TeamSize => TEAM_SIZE_OPTIONS,
            Question::NeedsUi => NEEDS_UI_OPTIONS,
            Question::MultiCluster => MULTI_CLUSTER_OPTIONS,
            Question::Rbac => RBAC_OPTIONS,
        }
    }

    /// Resolve user input to an option value
    ///
    /// Accepts the wire value or the 1-based option number.
    pub fn resolve(&self, input: &str) -> Option<&'static str> {
        let input = input.trim().to_lowercase();
        let options = self.options();
        if let Ok(n) = input.parse::<usize>() {
            return n.checked_sub(1).and_then(|i| options.get(i)).map(|o| o.value);
        }
        options.iter().find(|o| o.value == input).map(|o| o.value)
    }
}

/// Multi-step questionnaire state
#[derive(Debug, Clone, Default)]
pub struct Questionnaire {
    current: usize,
    answers: [Option<&'static str>; 4],
}

impl Questionnaire {
    /// Start at the first question with nothing answered
    pub fn new() -> Self {
        Self::default()
    }

    /// The question being shown
    pub fn current(&self) -> Question {
        Question::ALL[self.current]
    }

    /// Zero-based index of the current question
    pub fn index(&self) -> usize {
        self.current
    }

    /// Number of questions
    pub fn total(&self) -> usize {
        Question::ALL.len()
    }

    /// Whether the current question is the last one
    pub fn is_last(&self) -> bool {
        self.current + 1 == self.total()
    }

    /// Whether a previous question exists
    pub fn can_go_back(&self) -> bool {
        self.current > 0
    }

    /// Answer recorded for a question, if any
    pub fn answer_for(&self, question: Question) -> Option<&'static str> {
        self.answers[position(question)]
    }

    /// Record an answer for the current question
    ///
    /// # Errors
    /// Returns [`QuestionnaireError::InvalidOption`] if the input is not one
    /// of the current question's options
    pub fn answer(&mut self, input: &str) -> Result<(), QuestionnaireError> {
        let question = self.current();
        let value = question
            .resolve(input)
            .ok_or_else(|| QuestionnaireError::InvalidOption {
                question,
                value: input.trim().to_string(),
            })?;
        self.answers[self.current] = Some(value);
        Ok(())
    }

    /// Advance to the next question
    ///
    /// # Errors
    /// Refuses to move while the current question is unanswered, or past
    /// the last question
    pub fn next(&mut self) -> Result<Question, QuestionnaireError> {
        self.validate_current()?;
        if self.is_last() {
            return Err(QuestionnaireError::AtEnd);
        }
        self.current += 1;
        Ok(self.current())
    }

    /// Go back one question; stays put on the first question
    pub fn previous(&mut self) -> Question {
        if self.can_go_back() {
            self.current -= 1;
        }
        self.current()
    }

    /// Validate and build the answer set
    ///
    /// # Errors
    /// Returns [`QuestionnaireError::Unanswered`] for the current question,
    /// or an answer error for any earlier gap
    pub fn submit(&self) -> Result<AnswerSet, QuestionnaireError> {
        self.validate_current()?;
        Ok(self.raw_answers().validate()?)
    }

    /// Answers collected so far, in form shape
    pub fn raw_answers(&self) -> RawAnswers {
        let get = |q: Question| self.answer_for(q).map(str::to_string);
        RawAnswers {
            team_size: get(Question::TeamSize),
            needs_ui: get(Question::NeedsUi),
            multi_cluster: get(Question::MultiCluster),
            rbac: get(Question::Rbac),
        }
    }

    fn validate_current(&self) -> Result<(), QuestionnaireError> {
        match self.answers[self.current] {
            Some(_) => Ok(()),
            None => Err(QuestionnaireError::Unanswered(self.current())),
        }
    }
}

fn position(question: Question) -> usize {
    match question {
        Question::TeamSize => 0,
        Question::NeedsUi => 1,
        Question::MultiCluster => 2,
        Question::Rbac => 3,
    }
}
