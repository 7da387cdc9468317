//! Rendering across every answer combination

use kubecompass_domain::{evaluate, evaluate_lenient, AnswerSet, RawAnswers, Tool};
use kubecompass_render::{HtmlRenderer, RenderOptions};

#[test]
fn test_every_panel_names_winner_and_both_bars() {
    let renderer = HtmlRenderer::new(RenderOptions::default());
    for answers in AnswerSet::all() {
        let rec = evaluate(&answers);
        let html = renderer.render_panel(&rec);

        assert!(html.contains(&format!("<h3>Why {}?</h3>", rec.winner.display_name())));
        for tool in Tool::ALL {
            assert!(html.contains(&format!("{} points", rec.scores.get(tool))));
        }
        assert_eq!(html.contains("Close Decision"), rec.confidence.is_close());
    }
}

#[test]
fn test_lenient_result_renders() {
    let raw = RawAnswers {
        needs_ui: Some("yes".to_string()),
        ..Default::default()
    };
    let html = HtmlRenderer::new(RenderOptions::default()).render_page(&evaluate_lenient(&raw));
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("We recommend: <strong>ArgoCD</strong>"));
    assert!(html.contains("4 points"));
}
