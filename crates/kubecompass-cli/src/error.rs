//! Error types for the CLI application.

use kubecompass_domain::{AnswerError, QuestionnaireError, ThemeError};
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Answer validation error
    #[error("{0}")]
    Answers(#[from] AnswerError),

    /// Questionnaire flow error
    #[error("{0}")]
    Questionnaire(#[from] QuestionnaireError),

    /// Theme store error
    #[error("Theme error: {0}")]
    Theme(#[from] ThemeError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Line editor error
    #[error("Input error: {0}")]
    Readline(String),

    /// The wizard was abandoned before submission
    #[error("Wizard aborted")]
    Aborted,
}
