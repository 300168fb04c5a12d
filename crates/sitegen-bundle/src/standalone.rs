//! Standalone documents and on-disk export.

use std::fs;
use std::path::{Path, PathBuf};

use crate::bundle::Bundle;

/// Errors that can occur while exporting a bundle.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result of an export.
#[derive(Debug)]
pub struct ExportSummary {
    /// Directory the files were written to
    pub output_dir: PathBuf,

    /// Files written, in write order
    pub files: Vec<PathBuf>,
}

/// Combine the three parts into one self-contained HTML document.
///
/// Styles go right before `</head>` when the markup has a head, otherwise
/// in front of the markup. The script goes right before the last `</body>`,
/// otherwise at the end. Empty parts produce no block. Tag matching ignores
/// ASCII case.
pub fn combine_standalone(html: &str, css: &str, js: &str) -> String {
    let style_block = if css.is_empty() {
        String::new()
    } else {
        format!("\n<style>\n{}\n</style>", css)
    };
    let script_block = if js.is_empty() {
        String::new()
    } else {
        format!("\n<script>\n{}\n</script>", js)
    };

    // Both tags are located in the markup alone; the styles may contain either.
    let head_at = find_tag(html, "</head>", false);
    let body_at = find_tag(html, "</body>", true);
    let inserted = style_block.len() + 1;

    let mut combined = match head_at {
        Some(at) => {
            let mut out = String::with_capacity(html.len() + style_block.len() + 1);
            out.push_str(&html[..at]);
            out.push_str(&style_block);
            out.push('\n');
            out.push_str(&html[at..]);
            out
        }
        None => format!("{}\n{}", style_block, html),
    };

    let body_at = body_at.map(|at| match head_at {
        Some(head) if at < head => at,
        _ => at + inserted,
    });

    match body_at {
        Some(at) => {
            let tail = combined.split_off(at);
            combined.push_str(&script_block);
            combined.push('\n');
            combined.push_str(&tail);
        }
        None => combined.push_str(&script_block),
    }

    combined
}

/// Byte offset of `tag` in `haystack`, ignoring ASCII case.
fn find_tag(haystack: &str, tag: &str, last: bool) -> Option<usize> {
    // ASCII lowercasing keeps byte offsets stable.
    let lowered = haystack.to_ascii_lowercase();
    if last {
        lowered.rfind(tag)
    } else {
        lowered.find(tag)
    }
}

/// Write a bundle to `output_dir`.
///
/// Produces `index.html`, `style.css` and `script.js` holding the raw parts,
/// plus `preview.html` with the combined standalone document.
pub fn export_bundle(bundle: &Bundle, output_dir: &Path) -> Result<ExportSummary, ExportError> {
    fs::create_dir_all(output_dir).map_err(|source| ExportError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let preview = combine_standalone(&bundle.html_code, &bundle.css_code, &bundle.js_code);
    let outputs = [
        ("index.html", bundle.html_code.as_str()),
        ("style.css", bundle.css_code.as_str()),
        ("script.js", bundle.js_code.as_str()),
        ("preview.html", preview.as_str()),
    ];

    let mut files = Vec::with_capacity(outputs.len());
    for (name, contents) in outputs {
        let path = output_dir.join(name);
        fs::write(&path, contents).map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!("Wrote {}", path.display());
        files.push(path);
    }

    Ok(ExportSummary {
        output_dir: output_dir.to_path_buf(),
        files,
    })
}
