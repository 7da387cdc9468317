//! HTML renderer for recommendation results.
//!
//! The panel markup matches the site stylesheet class names
//! (`recommendation-*`, `confidence-*`, `score-bar*`).

use kubecompass_domain::{Recommendation, Theme, Tool};

/// Rendering options
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Active theme; only affects [`HtmlRenderer::render_page`]
    pub theme: Theme,
    /// Prefix for guide and manifest links (site root relative to the page)
    pub asset_base: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            asset_base: "..".to_string(),
        }
    }
}

/// Escape text for HTML element and attribute content
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Renders recommendation results as HTML
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    /// Create a renderer
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render the results panel fragment
    pub fn render_panel<A>(&self, rec: &Recommendation<A>) -> String {
        let winner = rec.winner;
        let name = winner.display_name();
        let mut html = String::with_capacity(4096);

        html.push_str("<div class=\"recommendation-result\">\n");

        // Header
        html.push_str("<div class=\"recommendation-header\">\n");
        html.push_str(&format!(
            "<h2>{} We recommend: <strong>{}</strong></h2>\n",
            winner.icon(),
            name
        ));
        html.push_str(&format!(
            "<div class=\"confidence-badge {}\">{}</div>\n",
            rec.confidence.css_class(),
            rec.confidence.label()
        ));
        html.push_str(&format!(
            "<p class=\"recommendation-score\">KubeCompass Score: <strong>{}</strong></p>\n",
            winner.rating()
        ));
        html.push_str("</div>\n");

        // Reasons for the winner
        html.push_str("<div class=\"recommendation-reasons\">\n");
        html.push_str(&format!("<h3>Why {}?</h3>\n<ul>\n", name));
        for reason in rec.winning_reasons() {
            html.push_str(&format!("<li>✅ {}</li>\n", escape_html(reason)));
        }
        html.push_str("</ul>\n</div>\n");

        // Score bars
        html.push_str("<div class=\"recommendation-comparison\">\n");
        html.push_str("<h3>Score Breakdown</h3>\n<div class=\"score-bars\">\n");
        for tool in Tool::ALL {
            html.push_str(&format!(
                "<div class=\"score-bar\">\n<span class=\"score-label\">{}</span>\n<div class=\"score-bar-fill\" style=\"width: {}%\">{} points</div>\n</div>\n",
                tool.display_name(),
                rec.scores.percent(tool),
                rec.scores.get(tool)
            ));
        }
        html.push_str("</div>\n</div>\n");

        if rec.confidence.is_close() {
            html.push_str(CLOSE_DECISION);
        }

        // Next steps
        let base = escape_html(self.options.asset_base.trim_end_matches('/'));
        let other = winner.other();
        html.push_str("<div class=\"recommendation-actions\">\n<h3>Next Steps</h3>\n");
        html.push_str("<div class=\"action-buttons\">\n");
        html.push_str(&format!(
            "<a href=\"{}/{}\" class=\"btn btn-primary\">📖 Read {} Implementation Guide</a>\n",
            base,
            winner.guide_path(),
            name
        ));
        html.push_str(&format!(
            "<a href=\"{}/{}\" class=\"btn btn-secondary\">📁 Get {} YAML</a>\n",
            base,
            winner.manifest_path(),
            name
        ));
        html.push_str(&format!(
            "<a href=\"#{}\" class=\"btn btn-ghost\">Compare with {}</a>\n",
            other.id(),
            other.display_name()
        ));
        html.push_str("</div>\n</div>\n");

        html.push_str("<div class=\"recommendation-footer\">\n");
        html.push_str("<button class=\"btn btn-ghost\" onclick=\"location.reload()\">🔄 Start Over</button>\n");
        html.push_str("</div>\n");

        html.push_str("</div>\n");
        html
    }

    /// Render a complete standalone document around the panel
    pub fn render_page<A>(&self, rec: &Recommendation<A>) -> String {
        let theme = self.options.theme;
        let mut html = String::with_capacity(8192);

        html.push_str("<!DOCTYPE html>\n");
        match theme.data_attribute() {
            Some(attr) => html.push_str(&format!("<html lang=\"en\" data-theme=\"{}\">\n", attr)),
            None => html.push_str("<html lang=\"en\">\n"),
        }
        html.push_str("<head>\n<meta charset=\"UTF-8\">\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
        html.push_str(&format!(
            "<title>KubeCompass: {} recommended</title>\n",
            rec.winner.display_name()
        ));
        html.push_str("<style>\n");
        html.push_str(INLINE_CSS);
        html.push_str("</style>\n</head>\n<body>\n");
        html.push_str(&format!(
            "<button id=\"themeToggle\" aria-label=\"{label}\" title=\"{label}\">{}</button>\n",
            theme.toggle_icon(),
            label = theme.toggle_label()
        ));
        html.push_str("<div id=\"wizardResults\">\n<div id=\"recommendationContent\">\n");
        html.push_str(&self.render_panel(rec));
        html.push_str("</div>\n</div>\n</body>\n</html>\n");
        html
    }
}

const CLOSE_DECISION: &str = "<div class=\"recommendation-note\">
<h3>⚖️ Close Decision</h3>
<p>Both tools are viable for your use case. Consider these additional factors:</p>
<ul>
<li>Team's preference for UI vs CLI workflows</li>
<li>Existing GitOps experience in the team</li>
<li>Future multi-cluster plans</li>
</ul>
<p><a href=\"#comparison\">Review detailed comparison →</a></p>
</div>
";

const INLINE_CSS: &str = r#"
:root { --bg: #1a202c; --fg: #e2e8f0; --panel: #2d3748; }
[data-theme="light"] { --bg: #ffffff; --fg: #1a202c; --panel: #f7fafc; }
body { background: var(--bg); color: var(--fg); font-family: system-ui, sans-serif; max-width: 56rem; margin: 2rem auto; padding: 0 1rem; }
.recommendation-header { text-align: center; margin-bottom: 2rem; padding-bottom: 2rem; border-bottom: 2px solid #e2e8f0; }
.confidence-badge { display: inline-block; padding: 0.5rem 1rem; border-radius: 20px; font-weight: 600; text-transform: uppercase; color: white; }
.confidence-high { background: linear-gradient(135deg, #48bb78, #38a169); }
.confidence-medium { background: linear-gradient(135deg, #4299e1, #3182ce); }
.confidence-low { background: linear-gradient(135deg, #ed8936, #dd6b20); }
.recommendation-reasons ul { list-style: none; padding: 0; }
.recommendation-reasons li { padding: 0.75rem; margin-bottom: 0.5rem; border-left: 4px solid #48bb78; background: var(--panel); }
.recommendation-comparison { margin-bottom: 2rem; padding: 1.5rem; background: var(--panel); border-radius: 12px; }
.score-bars { display: flex; flex-direction: column; gap: 1rem; }
.score-bar { display: flex; align-items: center; gap: 1rem; }
.score-label { min-width: 80px; font-weight: 600; }
.score-bar-fill { background: linear-gradient(135deg, #667eea, #764ba2); color: white; padding: 0.5rem 1rem; border-radius: 8px; text-align: right; white-space: nowrap; }
.recommendation-note { margin-bottom: 2rem; padding: 1.5rem; border-left: 4px solid #ed8936; background: var(--panel); }
.action-buttons { display: flex; flex-direction: column; gap: 1rem; }
.recommendation-footer { text-align: center; padding-top: 2rem; border-top: 1px solid #e2e8f0; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use kubecompass_domain::{evaluate, AnswerSet, MultiCluster, RbacNeed, TeamSize, UiNeed};

    fn renderer() -> HtmlRenderer {
        HtmlRenderer::new(RenderOptions::default())
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<a href='x'>&\"</a>"), "&lt;a href=&#39;x&#39;&gt;&amp;&quot;&lt;/a&gt;");
    }

    #[test]
    fn test_flux_panel() {
        let rec = evaluate(&AnswerSet::new(TeamSize::Small, UiNeed::No, MultiCluster::None, RbacNeed::None));
        let html = renderer().render_panel(&rec);

        assert!(html.contains("✅ We recommend: <strong>Flux</strong>"));
        assert!(html.contains("confidence-badge confidence-high\">Strong recommendation"));
        assert!(html.contains("<strong>4.0/5</strong>"));
        assert!(html.contains("<h3>Why Flux?</h3>"));
        assert_eq!(html.matches("<li>✅ ").count(), 4);
        assert!(html.contains("style=\"width: 40%\">6 points"));
        assert!(html.contains("style=\"width: 0%\">0 points"));
        assert!(html.contains("href=\"../docs/FLUX_GUIDE.md\""));
        assert!(html.contains("Compare with ArgoCD"));
        assert!(!html.contains("Close Decision"));
    }

    #[test]
    fn test_close_decision_only_when_low() {
        let low = evaluate(&AnswerSet::new(TeamSize::Medium, UiNeed::Nice, MultiCluster::None, RbacNeed::Basic));
        assert!(renderer().render_panel(&low).contains("Close Decision"));

        let medium = evaluate(&AnswerSet::new(TeamSize::Medium, UiNeed::No, MultiCluster::None, RbacNeed::None));
        assert!(!renderer().render_panel(&medium).contains("Close Decision"));
    }

    #[test]
    fn test_asset_base_trailing_slash() {
        let rec = evaluate(&AnswerSet::new(TeamSize::Large, UiNeed::Yes, MultiCluster::Critical, RbacNeed::Granular));
        let html = HtmlRenderer::new(RenderOptions {
            asset_base: "https://example.com/".to_string(),
            ..Default::default()
        })
        .render_panel(&rec);
        assert!(html.contains("href=\"https://example.com/docs/ARGOCD_GUIDE.md\""));
        assert!(html.contains("href=\"https://example.com/manifests/gitops/argocd.yaml\""));
    }

    #[test]
    fn test_page_theme_attribute() {
        let rec = evaluate(&AnswerSet::new(TeamSize::Large, UiNeed::Yes, MultiCluster::Critical, RbacNeed::Granular));

        let dark = renderer().render_page(&rec);
        assert!(dark.contains("<html lang=\"en\">"));
        assert!(dark.contains("Switch to light mode"));

        let light = HtmlRenderer::new(RenderOptions {
            theme: Theme::Light,
            ..Default::default()
        })
        .render_page(&rec);
        assert!(light.contains("<html lang=\"en\" data-theme=\"light\">"));
        assert!(light.contains("Switch to dark mode"));
        assert!(light.contains("recommendation-result"));
    }
}
