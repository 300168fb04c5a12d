//! Generator page state.

use std::fmt::Display;

use sitegen_bundle::Bundle;

use crate::preview::{PreviewPane, PreviewTab};

/// Message shown to the user when a generation call fails.
pub const GENERATION_FAILED_ALERT: &str =
    "Generation failed. Please ensure the backend is running.";

/// Submit button label while idle.
pub const IDLE_LABEL: &str = "Generate Website";

/// Submit button label while a request is outstanding.
pub const BUSY_LABEL: &str = "Generating...";

/// A generation call the page wants issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Prompt text as typed, not trimmed
    pub prompt: String,
}

/// What happened when a generation call finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The new bundle is now shown
    Stored,
    /// The call failed; show this alert. Prior state is unchanged.
    Failed { alert: String },
}

/// State of the generator page for one page view.
#[derive(Debug, Clone, Default)]
pub struct GeneratorPage {
    prompt: String,
    loading: bool,
    preview: Option<PreviewPane>,
}

impl GeneratorPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Whether a generation call is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The preview component, present once a bundle has been stored.
    pub fn preview(&self) -> Option<&PreviewPane> {
        self.preview.as_ref()
    }

    pub fn bundle(&self) -> Option<&Bundle> {
        self.preview.as_ref().map(PreviewPane::bundle)
    }

    pub fn button_label(&self) -> &'static str {
        if self.loading {
            BUSY_LABEL
        } else {
            IDLE_LABEL
        }
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    /// Handle a press of the submit control.
    ///
    /// Returns the call to issue, or `None` when the prompt is blank or a
    /// call is already outstanding. On `Some`, the page is loading until
    /// [`finish`](Self::finish) is called.
    pub fn submit(&mut self) -> Option<Submission> {
        if self.loading {
            tracing::debug!("Ignoring submit while a generation is outstanding");
            return None;
        }
        if self.prompt.trim().is_empty() {
            return None;
        }

        self.loading = true;
        Some(Submission {
            prompt: self.prompt.clone(),
        })
    }

    /// Record the outcome of the outstanding generation call.
    pub fn finish<E: Display>(&mut self, outcome: Result<Bundle, E>) -> Completion {
        self.loading = false;

        match outcome {
            Ok(bundle) => {
                match self.preview.as_mut() {
                    Some(pane) => pane.replace_bundle(bundle),
                    None => self.preview = Some(PreviewPane::new(bundle)),
                }
                Completion::Stored
            }
            Err(e) => {
                tracing::error!("Generation failed: {}", e);
                Completion::Failed {
                    alert: GENERATION_FAILED_ALERT.to_string(),
                }
            }
        }
    }

    /// Switch the preview tab.
    ///
    /// Returns `false` when there is no preview to switch.
    pub fn select_tab(&mut self, tab: PreviewTab) -> bool {
        match self.preview.as_mut() {
            Some(pane) => {
                pane.select(tab);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hi_bundle() -> Bundle {
        Bundle::new("<h1>Hi</h1>", "h1{color:red}", "")
    }

    #[test]
    fn blank_prompt_is_not_submitted() {
        let mut page = GeneratorPage::new();

        for prompt in ["", "   ", "\n\t  \n"] {
            page.set_prompt(prompt);
            assert_eq!(page.submit(), None);
            assert!(!page.is_loading());
        }
    }

    #[test]
    fn submit_sends_untrimmed_prompt_and_sets_loading() {
        let mut page = GeneratorPage::new();
        page.set_prompt("  Create a portfolio site\n");

        let submission = page.submit().unwrap();

        assert_eq!(submission.prompt, "  Create a portfolio site\n");
        assert!(page.is_loading());
        assert_eq!(page.button_label(), BUSY_LABEL);
    }

    #[test]
    fn second_submit_while_loading_is_ignored() {
        let mut page = GeneratorPage::new();
        page.set_prompt("Create a portfolio site");

        assert!(page.submit().is_some());
        assert_eq!(page.submit(), None);
    }

    #[test]
    fn success_stores_bundle_and_clears_loading() {
        let mut page = GeneratorPage::new();
        page.set_prompt("Create a portfolio site");
        page.submit();

        let completion = page.finish::<String>(Ok(hi_bundle()));

        assert_eq!(completion, Completion::Stored);
        assert!(!page.is_loading());
        assert_eq!(page.button_label(), IDLE_LABEL);
        assert_eq!(page.bundle(), Some(&hi_bundle()));
        assert_eq!(page.preview().unwrap().tab(), PreviewTab::Preview);
    }

    #[test]
    fn failure_alerts_and_keeps_prior_bundle() {
        let mut page = GeneratorPage::new();
        page.set_prompt("first");
        page.submit();
        page.finish::<String>(Ok(hi_bundle()));
        page.select_tab(PreviewTab::Css);

        page.set_prompt("second");
        page.submit();
        let completion = page.finish(Err("connection refused"));

        assert_eq!(
            completion,
            Completion::Failed {
                alert: GENERATION_FAILED_ALERT.to_string()
            }
        );
        assert!(!page.is_loading());
        assert_eq!(page.bundle(), Some(&hi_bundle()));
        assert_eq!(page.preview().unwrap().tab(), PreviewTab::Css);
    }

    #[test]
    fn failure_without_prior_bundle_stores_nothing() {
        let mut page = GeneratorPage::new();
        page.set_prompt("x");
        page.submit();

        page.finish(Err("HTTP 500"));

        assert!(page.bundle().is_none());
    }

    #[test]
    fn new_bundle_keeps_selected_tab() {
        let mut page = GeneratorPage::new();
        page.set_prompt("x");
        page.submit();
        page.finish::<String>(Ok(hi_bundle()));
        page.select_tab(PreviewTab::Html);

        page.submit();
        page.finish::<String>(Ok(Bundle::new("<p>new</p>", "", "")));

        assert_eq!(page.preview().unwrap().tab(), PreviewTab::Html);
        assert_eq!(page.bundle().unwrap().html_code, "<p>new</p>");
    }

    #[test]
    fn tab_switch_without_preview_is_rejected() {
        let mut page = GeneratorPage::new();
        assert!(!page.select_tab(PreviewTab::Html));
    }
}
