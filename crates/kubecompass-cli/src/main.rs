//! KubeCompass CLI - GitOps tool advisor.

use clap::Parser;
use kubecompass_cli::commands;
use kubecompass_cli::store::ConfigThemeStore;
use kubecompass_cli::telemetry::sink_for;
use kubecompass_cli::wizard::EditorSource;
use kubecompass_cli::{Cli, CliError, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        if matches!(e, CliError::Aborted) {
            std::process::exit(130);
        }
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    // Log to stderr so stdout stays machine-readable
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> kubecompass_cli::Result<()> {
    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let config = Config::load_from(&config_path).unwrap_or_else(|e| {
        tracing::warn!(path = %config_path.display(), "Ignoring unreadable config: {}", e);
        Config::default()
    });

    // Determine output format
    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);
    let sink = sink_for(config.telemetry.enabled);
    let policy = config.engine.unknown_answers;
    let history_size = config.settings.history_size;
    let feedback_page = config.telemetry.page.clone();

    match cli.command {
        None | Some(Command::Wizard) => {
            let mut source = EditorSource::new(history_size)?;
            commands::execute_wizard(&mut source, &formatter, sink.as_ref())?;
        }
        Some(Command::Recommend(args)) => {
            commands::execute_recommend(args, policy, &formatter, sink.as_ref())?;
        }
        Some(Command::Render(args)) => {
            let themes = ConfigThemeStore::new(config, config_path);
            commands::execute_render(args, policy, &themes, &formatter)?;
        }
        Some(Command::Theme(args)) => {
            // Saving rewrites the whole file, so a config that failed to load is fatal here
            let mut themes = ConfigThemeStore::open(config_path)?;
            commands::execute_theme(args, &mut themes, &formatter)?;
        }
        Some(Command::Feedback(args)) => {
            commands::execute_feedback(args, &feedback_page, &formatter, sink.as_ref())?;
        }
    }

    Ok(())
}
