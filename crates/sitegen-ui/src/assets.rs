//! Stylesheet and client script for the generator page.

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the page stylesheet.
    pub fn generate_css() -> String {
        DEFAULT_CSS.to_string()
    }

    /// Generate the client script that connects the page to its session.
    pub fn generate_js() -> String {
        DEFAULT_JS.to_string()
    }

    /// The stylesheet to serve, minified when requested.
    ///
    /// Falls back to the unminified source if minification fails.
    pub fn stylesheet(minify: bool) -> String {
        let css = Self::generate_css();
        if !minify {
            return css;
        }

        match Self::minify_css(&css) {
            Ok(minified) => minified,
            Err(e) => {
                tracing::warn!("Serving unminified stylesheet: {}", e);
                css
            }
        }
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

const DEFAULT_CSS: &str = r#"/* sitegen - generator page */

:root {
  --background: #f9fafb;
  --foreground: #111827;
  --navbar: #1f2937;
  --navbar-foreground: #ffffff;
  --muted-foreground: #d1d5db;
  --primary: #2563eb;
  --primary-hover: #1d4ed8;
  --primary-disabled: #60a5fa;
  --tab-active: #dbeafe;
  --border: #d1d5db;
  --code-background: #1e1e1e;
  --code-foreground: #d4d4d4;
  --radius: 0.5rem;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: system-ui, -apple-system, sans-serif;
  background: var(--background);
  color: var(--foreground);
  line-height: 1.5;
  min-height: 100vh;
}

.container {
  max-width: 1200px;
  margin: 0 auto;
}

/* Navbar */
.navbar {
  background: var(--navbar);
  color: var(--navbar-foreground);
  padding: 1rem;
}

.navbar-inner {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.nav-logo {
  font-size: 1.25rem;
  font-weight: 700;
  color: inherit;
  text-decoration: none;
}

.nav-links {
  display: flex;
  gap: 1rem;
}

.nav-link {
  color: inherit;
  text-decoration: none;
}

.nav-link:hover {
  color: var(--muted-foreground);
}

/* Generator */
.generator {
  padding: 1.5rem;
}

.page-title {
  font-size: 1.875rem;
  font-weight: 700;
  margin-bottom: 1.5rem;
}

.prompt {
  display: block;
  width: 100%;
  padding: 1rem;
  margin-bottom: 1rem;
  font: inherit;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  resize: vertical;
}

.generate-btn {
  background: var(--primary);
  color: #ffffff;
  font: inherit;
  padding: 0.75rem 1.5rem;
  border: none;
  border-radius: var(--radius);
  cursor: pointer;
  transition: background 0.15s;
}

.generate-btn:hover {
  background: var(--primary-hover);
}

.generate-btn:disabled {
  background: var(--primary-disabled);
  cursor: progress;
}

/* Preview */
.code-preview {
  margin-top: 2rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  overflow: hidden;
}

.tabs {
  display: flex;
  border-bottom: 1px solid var(--border);
}

.tab {
  padding: 0.5rem 1rem;
  font: inherit;
  background: none;
  border: none;
  cursor: pointer;
}

.tab.active {
  background: var(--tab-active);
}

.tab-panel {
  padding: 1rem;
}

.preview-frame {
  display: block;
  width: 100%;
  height: 24rem;
  border: 1px solid var(--border);
  background: #ffffff;
}

.source {
  height: 400px;
  overflow: auto;
  padding: 1rem;
  background: var(--code-background);
  color: var(--code-foreground);
  font-family: ui-monospace, monospace;
  font-size: 0.875rem;
  white-space: pre;
}
"#;

const DEFAULT_JS: &str = r#"// sitegen - generator page client
(function() {
  'use strict';

  const app = document.getElementById('app');
  if (!app) return;

  const scheme = location.protocol === 'https:' ? 'wss://' : 'ws://';
  const ws = new WebSocket(scheme + location.host + '/__session');

  function send(msg) {
    if (ws.readyState === WebSocket.OPEN) {
      ws.send(JSON.stringify(msg));
    }
  }

  function promptInput() {
    return app.querySelector('[data-prompt]');
  }

  app.addEventListener('click', function(event) {
    const target = event.target.closest('[data-action]');
    if (!target || target.disabled) return;

    switch (target.dataset.action) {
      case 'generate': {
        const input = promptInput();
        send({ type: 'submit', prompt: input ? input.value : '' });
        break;
      }
      case 'select-tab':
        send({ type: 'select_tab', tab: target.dataset.tab });
        break;
    }
  });

  ws.onmessage = function(event) {
    const msg = JSON.parse(event.data);

    switch (msg.type) {
      case 'render': {
        // Keep whatever the user typed while the server was busy.
        const input = promptInput();
        const typed = input ? input.value : null;
        app.innerHTML = msg.html;
        const next = promptInput();
        if (next && typed !== null) next.value = typed;
        break;
      }
      case 'alert':
        console.error('[sitegen]', msg.message);
        alert(msg.message);
        break;
      case 'connected':
        console.log('[sitegen] Session started');
        break;
    }
  };

  ws.onclose = function() {
    console.log('[sitegen] Disconnected');
    const button = app.querySelector('[data-action="generate"]');
    if (button) button.disabled = true;
  };

  ws.onerror = function(e) {
    console.error('[sitegen] WebSocket error:', e);
  };
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_css() {
        let css = AssetPipeline::generate_css();
        assert!(css.contains(":root"));
        assert!(css.contains(".generate-btn:disabled"));
        assert!(css.contains(".preview-frame"));
    }

    #[test]
    fn generates_js() {
        let js = AssetPipeline::generate_js();
        assert!(js.contains("/__session"));
        assert!(js.contains("'select_tab'"));
        assert!(js.contains("alert(msg.message)"));
    }

    #[test]
    fn minifies_css() {
        let css = r#"
.button {
    background-color: blue;
    padding: 10px;
}
        "#;

        let minified = AssetPipeline::minify_css(css).unwrap();

        assert!(!minified.contains('\n'));
        assert!(minified.contains(".button"));
    }

    #[test]
    fn serves_minified_stylesheet() {
        let minified = AssetPipeline::stylesheet(true);
        let full = AssetPipeline::stylesheet(false);

        assert!(minified.len() < full.len());
        assert!(minified.contains(".generate-btn"));
    }
}
