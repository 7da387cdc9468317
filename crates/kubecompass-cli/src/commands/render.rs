//! Render command implementation.

use crate::cli::RenderArgs;
use crate::commands::recommend::evaluate_args;
use crate::error::Result;
use crate::output::Formatter;
use kubecompass_domain::{ThemeStore, UnknownAnswerPolicy};
use kubecompass_render::{HtmlRenderer, RenderOptions};

/// Execute the render command.
pub fn execute_render(
    args: RenderArgs,
    policy: UnknownAnswerPolicy,
    themes: &dyn ThemeStore,
    formatter: &Formatter,
) -> Result<()> {
    let rec = evaluate_args(&args.answers, policy)?;
    let renderer = HtmlRenderer::new(RenderOptions {
        theme: themes.get(),
        asset_base: args.asset_base,
    });

    let html = if args.page {
        renderer.render_page(&rec)
    } else {
        renderer.render_panel(&rec)
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, html)?;
            println!(
                "{}",
                formatter.success(&format!("Wrote {} recommendation to {}", rec.winner, path.display()))
            );
        }
        None => print!("{}", html),
    }

    Ok(())
}
