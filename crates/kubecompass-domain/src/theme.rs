//! Theme module - the persisted light/dark preference

use crate::traits::ThemeStore;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from a theme store
#[derive(Debug, Error)]
pub enum ThemeError {
    /// Unknown theme name
    #[error("Invalid theme: {0}")]
    Invalid(String),

    /// The backing store could not persist the preference
    #[error("Failed to persist theme: {0}")]
    Persist(String),
}

/// Colour theme. Dark is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark theme
    #[default]
    Dark,
    /// Light theme
    Light,
}

impl Theme {
    /// Get the theme name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Parse a theme from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    /// The opposite theme
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Accessible label of the toggle button
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Dark => "Switch to light mode",
            Theme::Light => "Switch to dark mode",
        }
    }

    /// Icon on the toggle button
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Dark => "☀️",
            Theme::Light => "🌙",
        }
    }

    /// Value of the document `data-theme` attribute; dark sets none
    pub fn data_attribute(&self) -> Option<&'static str> {
        match self {
            Theme::Dark => None,
            Theme::Light => Some("light"),
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ThemeError::Invalid(s.to_string()))
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-memory theme store
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    theme: Option<Theme>,
}

impl MemoryThemeStore {
    /// Create an empty store that reports the default theme
    pub fn new() -> Self {
        Self::default()
    }
}

impl ThemeStore for MemoryThemeStore {
    fn get(&self) -> Theme {
        self.theme.unwrap_or_default()
    }

    fn set(&mut self, theme: Theme) -> Result<(), ThemeError> {
        self.theme = Some(theme);
        Ok(())
    }
}
