//! Tool module - the two GitOps candidates being compared

use serde::{Deserialize, Serialize};

/// Candidate GitOps tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// ArgoCD (Tool A)
    #[serde(rename = "argocd")]
    ArgoCd,
    /// Flux (Tool B)
    Flux,
}

impl Tool {
    /// Both tools, Tool A first
    pub const ALL: [Tool; 2] = [Tool::ArgoCd, Tool::Flux];

    /// Stable identifier
    pub fn id(&self) -> &'static str {
        match self {
            Tool::ArgoCd => "argocd",
            Tool::Flux => "flux",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Tool::ArgoCd => "ArgoCD",
            Tool::Flux => "Flux",
        }
    }

    /// The other candidate
    pub fn other(&self) -> Tool {
        match self {
            Tool::ArgoCd => Tool::Flux,
            Tool::Flux => Tool::ArgoCd,
        }
    }

    /// Published KubeCompass rating
    pub fn rating(&self) -> &'static str {
        match self {
            Tool::ArgoCd => "4.2/5",
            Tool::Flux => "4.0/5",
        }
    }

    /// Banner icon shown when this tool wins
    pub fn icon(&self) -> &'static str {
        match self {
            Tool::ArgoCd => "🏆",
            Tool::Flux => "✅",
        }
    }

    /// Implementation guide, relative to the site root
    pub fn guide_path(&self) -> &'static str {
        match self {
            Tool::ArgoCd => "docs/ARGOCD_GUIDE.md",
            Tool::Flux => "docs/FLUX_GUIDE.md",
        }
    }

    /// Example manifest, relative to the site root
    pub fn manifest_path(&self) -> &'static str {
        match self {
            Tool::ArgoCd => "manifests/gitops/argocd.yaml",
            Tool::Flux => "manifests/gitops/flux.yaml",
        }
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
