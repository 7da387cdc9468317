//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use kubecompass_domain::{FeedbackKind, RawAnswers};
use std::path::PathBuf;

/// KubeCompass - Choose between ArgoCD and Flux for your team.
#[derive(Debug, Parser)]
#[command(name = "kubecompass")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "KUBECOMPASS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log at info level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (winner only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score a set of answers and print the recommendation
    Recommend(RecommendArgs),

    /// Answer the questions interactively
    Wizard,

    /// Write the recommendation as HTML
    Render(RenderArgs),

    /// Show or change the colour theme
    Theme(ThemeArgs),

    /// Leave feedback on a page
    Feedback(FeedbackArgs),
}

/// The four answers, as passed on the command line.
#[derive(Debug, Clone, Default, Args)]
pub struct AnswerArgs {
    /// Team size (small, medium, large)
    #[arg(short, long)]
    pub team_size: Option<String>,

    /// Web UI need (yes, nice, no)
    #[arg(short = 'u', long)]
    pub needs_ui: Option<String>,

    /// Multi-cluster importance (critical, some, none)
    #[arg(short, long)]
    pub multi_cluster: Option<String>,

    /// RBAC requirement (granular, basic, none)
    #[arg(short, long)]
    pub rbac: Option<String>,

    /// Score unrecognized or missing answers as zero instead of failing
    #[arg(long)]
    pub lenient: bool,
}

impl AnswerArgs {
    /// Convert to the form representation.
    pub fn to_raw(&self) -> RawAnswers {
        RawAnswers {
            team_size: self.team_size.clone(),
            needs_ui: self.needs_ui.clone(),
            multi_cluster: self.multi_cluster.clone(),
            rbac: self.rbac.clone(),
        }
    }
}

/// Arguments for the recommend command.
#[derive(Debug, Parser)]
pub struct RecommendArgs {
    #[command(flatten)]
    pub answers: AnswerArgs,
}

/// Arguments for the render command.
#[derive(Debug, Parser)]
pub struct RenderArgs {
    #[command(flatten)]
    pub answers: AnswerArgs,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit a complete HTML document instead of the panel fragment
    #[arg(long)]
    pub page: bool,

    /// Prefix for guide and manifest links
    #[arg(long, default_value = "..")]
    pub asset_base: String,
}

/// Arguments for theme management.
#[derive(Debug, Parser)]
pub struct ThemeArgs {
    #[command(subcommand)]
    pub action: ThemeAction,
}

/// Theme actions.
#[derive(Debug, Subcommand)]
pub enum ThemeAction {
    /// Show the current theme
    Show,

    /// Switch between dark and light
    Toggle,

    /// Set the theme explicitly
    Set {
        /// Theme name (dark, light)
        theme: String,
    },
}

/// Arguments for the feedback command.
#[derive(Debug, Parser)]
pub struct FeedbackArgs {
    /// Positive or negative
    #[arg(value_enum)]
    pub kind: FeedbackArg,

    /// Page the feedback refers to (defaults to `telemetry.page`)
    #[arg(short, long)]
    pub page: Option<String>,

    /// Detailed feedback text
    #[arg(short, long)]
    pub message: Option<String>,
}

/// Feedback argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum FeedbackArg {
    /// The page helped
    Positive,
    /// The page did not help
    Negative,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<FeedbackArg> for FeedbackKind {
    fn from(kind: FeedbackArg) -> Self {
        match kind {
            FeedbackArg::Positive => FeedbackKind::Positive,
            FeedbackArg::Negative => FeedbackKind::Negative,
        }
    }
}
