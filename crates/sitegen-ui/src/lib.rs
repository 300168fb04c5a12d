//! Generator page state, preview tabs and page rendering.
//!
//! UI state lives in plain structs ([`GeneratorPage`], [`PreviewPane`]) that
//! are rendered to HTML by the [`TemplateEngine`]. Nothing here performs I/O;
//! the server session drives these types and ships the markup to the browser.

pub mod assets;
pub mod page;
pub mod preview;
pub mod templates;

pub use assets::AssetPipeline;
pub use page::{Completion, GeneratorPage, Submission, GENERATION_FAILED_ALERT};
pub use preview::{PreviewPane, PreviewTab};
pub use templates::{RenderError, TemplateEngine};
