//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use kubecompass_domain::{Confidence, Question, Recommendation, Theme, Tool};
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a recommendation.
    pub fn format_recommendation<A: Serialize>(&self, rec: &Recommendation<A>) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(rec)?),
            OutputFormat::Table => Ok(self.format_recommendation_table(rec)),
            OutputFormat::Quiet => Ok(rec.winner.id().to_string()),
        }
    }

    /// Format a recommendation as a score table followed by the reasons.
    fn format_recommendation_table<A>(&self, rec: &Recommendation<A>) -> String {
        let mut out = String::new();

        let headline = format!(
            "{} We recommend: {} ({})",
            rec.winner.icon(),
            rec.winner.display_name(),
            rec.confidence.label()
        );
        out.push_str(&self.colorize(&headline, confidence_color(rec.confidence)));
        out.push('\n');

        let mut builder = Builder::default();
        builder.push_record(["Tool", "Points", "Share", "Rating"]);
        for tool in Tool::ALL {
            let name = if tool == rec.winner {
                format!("{} *", tool.display_name())
            } else {
                tool.display_name().to_string()
            };
            builder.push_record([
                name,
                rec.scores.get(tool).to_string(),
                format!("{:.0}%", rec.scores.percent(tool)),
                tool.rating().to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        out.push_str(&table.to_string());
        out.push('\n');

        for tool in Tool::ALL {
            let reasons = rec.reasons.for_tool(tool);
            if reasons.is_empty() {
                continue;
            }
            out.push_str(&format!("\nWhy {}?\n", tool.display_name()));
            for reason in reasons {
                out.push_str(&format!("  ✓ {}\n", reason));
            }
        }

        if rec.confidence.is_close() {
            out.push('\n');
            out.push_str(&self.warning(&format!(
                "Close decision: {} is also viable for your use case.",
                rec.runner_up().display_name()
            )));
            out.push('\n');
        }

        out
    }

    /// Format a question with numbered options.
    pub fn question(&self, index: usize, total: usize, question: Question) -> String {
        let mut out = self.colorize(
            &format!("[{}/{}] {}", index + 1, total, question.prompt()),
            "cyan",
        );
        out.push('\n');
        for (i, option) in question.options().iter().enumerate() {
            out.push_str(&format!("  {}) {} [{}]\n", i + 1, option.label, option.value));
        }
        out
    }

    /// Format the theme state.
    pub fn theme(&self, theme: Theme) -> String {
        match self.format {
            OutputFormat::Json => serde_json::json!({
                "theme": theme.as_str(),
                "toggle": theme.toggle_label(),
            })
            .to_string(),
            OutputFormat::Quiet => theme.as_str().to_string(),
            OutputFormat::Table => self.info(&format!(
                "Theme: {} {} ({})",
                theme.toggle_icon(),
                theme,
                theme.toggle_label()
            )),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn confidence_color(confidence: Confidence) -> &'static str {
    match confidence {
        Confidence::High => "green",
        Confidence::Medium => "blue",
        Confidence::Low => "yellow",
    }
}
