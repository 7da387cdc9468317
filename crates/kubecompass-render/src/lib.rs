//! KubeCompass Render
//!
//! Turns a [`Recommendation`](kubecompass_domain::Recommendation) into the
//! HTML results panel shown after the decision wizard, or into a complete
//! standalone page.
//!
//! # Examples
//!
//! ```
//! use kubecompass_domain::{evaluate, AnswerSet, MultiCluster, RbacNeed, TeamSize, UiNeed};
//! use kubecompass_render::{HtmlRenderer, RenderOptions};
//!
//! let answers = AnswerSet::new(TeamSize::Small, UiNeed::No, MultiCluster::None, RbacNeed::None);
//! let html = HtmlRenderer::new(RenderOptions::default()).render_panel(&evaluate(&answers));
//! assert!(html.contains("We recommend: <strong>Flux</strong>"));
//! ```

#![warn(missing_docs)]

mod html;

pub use html::{escape_html, HtmlRenderer, RenderOptions};
