//! The generated-code bundle.

use serde::{Deserialize, Deserializer, Serialize};

/// Markup, styles and script produced by one generation call.
///
/// Each field is an opaque blob and may be empty. Bundles have no identity;
/// a new one replaces the old one wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bundle {
    /// HTML markup
    #[serde(default, deserialize_with = "nullable")]
    pub html_code: String,

    /// CSS styles
    #[serde(default, deserialize_with = "nullable")]
    pub css_code: String,

    /// JavaScript source
    #[serde(default, deserialize_with = "nullable")]
    pub js_code: String,
}

impl Bundle {
    /// Create a bundle from its three parts.
    pub fn new(
        html_code: impl Into<String>,
        css_code: impl Into<String>,
        js_code: impl Into<String>,
    ) -> Self {
        Self {
            html_code: html_code.into(),
            css_code: css_code.into(),
            js_code: js_code.into(),
        }
    }

    /// The document rendered inside the preview frame.
    ///
    /// Markup first, then one style block and one script block, with no
    /// rewriting of any part.
    pub fn preview_document(&self) -> String {
        let mut doc = String::with_capacity(
            self.html_code.len() + self.css_code.len() + self.js_code.len() + 32,
        );
        doc.push_str(&self.html_code);
        doc.push_str("<style>");
        doc.push_str(&self.css_code);
        doc.push_str("</style>");
        doc.push_str("<script>");
        doc.push_str(&self.js_code);
        doc.push_str("</script>");
        doc
    }
}

/// Read a JSON `null` as an empty string.
fn nullable<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
