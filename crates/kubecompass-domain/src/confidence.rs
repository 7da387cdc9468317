//! Confidence tier module

use serde::{Deserialize, Serialize};

/// Margin above which a recommendation is high confidence
pub const HIGH_MARGIN: u32 = 4;

/// Margin above which a recommendation is medium confidence
pub const MEDIUM_MARGIN: u32 = 2;

/// Coarse confidence bucket derived from the absolute score gap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Gap greater than 4
    High,
    /// Gap greater than 2
    Medium,
    /// Gap of 2 or less
    Low,
}

impl Confidence {
    /// Bucket an absolute score margin
    pub fn from_margin(margin: u32) -> Self {
        if margin > HIGH_MARGIN {
            Confidence::High
        } else if margin > MEDIUM_MARGIN {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }

    /// Get the tier name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }

    /// Badge text shown to the user
    pub fn label(&self) -> &'static str {
        match self {
            Confidence::High => "Strong recommendation",
            Confidence::Medium => "Good fit",
            Confidence::Low => "Both tools viable",
        }
    }

    /// CSS class of the confidence badge
    pub fn css_class(&self) -> &'static str {
        match self {
            Confidence::High => "confidence-high",
            Confidence::Medium => "confidence-medium",
            Confidence::Low => "confidence-low",
        }
    }

    /// Whether the decision is close enough to show extra guidance
    pub fn is_close(&self) -> bool {
        matches!(self, Confidence::Low)
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
