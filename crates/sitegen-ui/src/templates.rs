//! Template engine for rendering the application shell and generator page.

use minijinja::{context, Environment};
use serde::Serialize;

use crate::page::GeneratorPage;
use crate::preview::{PreviewPane, PreviewTab};

/// Site title shown in the navbar, page heading and document title.
pub const SITE_TITLE: &str = "AI Website Generator";

const PROMPT_PLACEHOLDER: &str = "Describe your website... (e.g., 'Create a portfolio website for a photographer with a dark theme')";

/// Errors that can occur while rendering.
#[derive(Debug, thiserror::Error)]
#[error("Failed to render {template}: {source}")]
pub struct RenderError {
    template: &'static str,
    source: minijinja::Error,
}

/// A navigation link.
#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    /// Display title
    pub title: String,
    /// URL path
    pub path: String,
    /// Whether this is the active page
    pub active: bool,
}

#[derive(Debug, Serialize)]
struct TabView {
    id: &'static str,
    label: &'static str,
    active: bool,
}

#[derive(Debug, Serialize)]
struct PreviewView<'a> {
    active: &'static str,
    tabs: Vec<TabView>,
    document: String,
    html_code: &'a str,
    css_code: &'a str,
}

impl<'a> PreviewView<'a> {
    fn new(pane: &'a PreviewPane) -> Self {
        let bundle = pane.bundle();
        let tabs = PreviewTab::ALL
            .into_iter()
            .map(|tab| TabView {
                id: tab.as_str(),
                label: tab.label(),
                active: tab == pane.tab(),
            })
            .collect();

        Self {
            active: pane.tab().as_str(),
            tabs,
            document: bundle.preview_document(),
            html_code: &bundle.html_code,
            css_code: &bundle.css_code,
        }
    }
}

/// Template engine using minijinja.
///
/// Templates are named `*.html`, so every interpolation is HTML-escaped.
/// Generated markup therefore only ever reaches the browser as text or as
/// the escaped `srcdoc` of the sandboxed preview frame.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        for (name, source) in [
            ("shell.html", SHELL_TEMPLATE),
            ("navbar.html", NAVBAR_TEMPLATE),
            ("generator.html", GENERATOR_TEMPLATE),
            ("preview.html", PREVIEW_TEMPLATE),
        ] {
            env.add_template_owned(name.to_string(), source.to_string())
                .expect("Failed to add built-in template");
        }

        Self { env }
    }

    /// Render the full HTML document: shell, navbar and generator page.
    pub fn render_document(&self, page: &GeneratorPage) -> Result<String, RenderError> {
        self.render("shell.html", page)
    }

    /// Render only the generator page, the region replaced on every update.
    pub fn render_app(&self, page: &GeneratorPage) -> Result<String, RenderError> {
        self.render("generator.html", page)
    }

    fn render(&self, template: &'static str, page: &GeneratorPage) -> Result<String, RenderError> {
        let nav = vec![NavItem {
            title: "Generator".to_string(),
            path: "/".to_string(),
            active: true,
        }];
        let preview = page.preview().map(PreviewView::new);

        self.env
            .get_template(template)
            .and_then(|tmpl| {
                tmpl.render(context! {
                    site_title => SITE_TITLE,
                    nav => nav,
                    prompt => page.prompt(),
                    placeholder => PROMPT_PLACEHOLDER,
                    loading => page.is_loading(),
                    button_label => page.button_label(),
                    preview => preview,
                })
            })
            .map_err(|source| RenderError { template, source })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const SHELL_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ site_title }}</title>
  <link rel="stylesheet" href="/assets/app.css">
</head>
<body>
  {% include "navbar.html" %}
  <main id="app" class="container">
    {% include "generator.html" %}
  </main>
  <script src="/assets/app.js"></script>
</body>
</html>"##;

const NAVBAR_TEMPLATE: &str = r##"<nav class="navbar">
  <div class="container navbar-inner">
    <a href="/" class="nav-logo">{{ site_title }}</a>
    <div class="nav-links">
    {% for item in nav %}
      <a href="{{ item.path }}" class="nav-link{% if item.active %} active{% endif %}">{{ item.title }}</a>
    {% endfor %}
    </div>
  </div>
</nav>"##;

const GENERATOR_TEMPLATE: &str = r##"<section class="generator">
  <h1 class="page-title">{{ site_title }}</h1>
  <textarea class="prompt" rows="4" data-prompt placeholder="{{ placeholder }}">{{ prompt }}</textarea>
  <button type="button" class="generate-btn" data-action="generate"{% if loading %} disabled aria-busy="true"{% endif %}>{{ button_label }}</button>
  {% if preview %}{% include "preview.html" %}{% endif %}
</section>"##;

const PREVIEW_TEMPLATE: &str = r##"<div class="code-preview" data-active-tab="{{ preview.active }}">
  <div class="tabs" role="tablist">
  {% for tab in preview.tabs %}
    <button type="button" role="tab" class="tab{% if tab.active %} active{% endif %}" data-action="select-tab" data-tab="{{ tab.id }}" aria-selected="{{ tab.active }}">{{ tab.label }}</button>
  {% endfor %}
  </div>
  <div class="tab-panel">
  {% if preview.active == "preview" %}
    <iframe title="Website Preview" class="preview-frame" sandbox="allow-scripts allow-forms allow-modals allow-popups" srcdoc="{{ preview.document }}"></iframe>
  {% elif preview.active == "html" %}
    <pre class="source" data-language="html"><code>{{ preview.html_code }}</code></pre>
  {% else %}
    <pre class="source" data-language="css"><code>{{ preview.css_code }}</code></pre>
  {% endif %}
  </div>
</div>"##;
