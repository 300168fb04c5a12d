//! Preview component state.

use std::fmt;

use serde::{Deserialize, Serialize};
use sitegen_bundle::Bundle;

/// The three mutually exclusive views of a bundle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewTab {
    /// Rendered document in a sandboxed frame
    #[default]
    Preview,
    /// Markup source
    Html,
    /// Stylesheet source
    Css,
}

impl PreviewTab {
    /// All tabs in display order.
    pub const ALL: [PreviewTab; 3] = [PreviewTab::Preview, PreviewTab::Html, PreviewTab::Css];

    /// Identifier used on the wire and in markup.
    pub fn as_str(self) -> &'static str {
        match self {
            PreviewTab::Preview => "preview",
            PreviewTab::Html => "html",
            PreviewTab::Css => "css",
        }
    }

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            PreviewTab::Preview => "Preview",
            PreviewTab::Html => "HTML",
            PreviewTab::Css => "CSS",
        }
    }
}

impl fmt::Display for PreviewTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bundle together with the tab currently shown for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewPane {
    bundle: Bundle,
    tab: PreviewTab,
}

impl PreviewPane {
    /// Show a bundle, starting on the rendered preview.
    pub fn new(bundle: Bundle) -> Self {
        Self {
            bundle,
            tab: PreviewTab::default(),
        }
    }

    pub fn bundle(&self) -> &Bundle {
        &self.bundle
    }

    pub fn tab(&self) -> PreviewTab {
        self.tab
    }

    /// Switch the visible view. The bundle is untouched.
    pub fn select(&mut self, tab: PreviewTab) {
        self.tab = tab;
    }

    /// Replace the bundle, keeping the selected tab.
    pub fn replace_bundle(&mut self, bundle: Bundle) {
        self.bundle = bundle;
    }
}
