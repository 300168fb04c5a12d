//! Generated-code bundle model.
//!
//! This crate holds the three-part markup/styles/script bundle returned by the
//! generation service, the JSON wire types used to request and decode it, and
//! the helpers that compose a bundle into a single HTML document.

pub mod bundle;
pub mod standalone;
pub mod wire;

pub use bundle::Bundle;
pub use standalone::{combine_standalone, export_bundle, ExportError, ExportSummary};
pub use wire::{decode_response, DecodeError, GenerateRequest, GenerateResponse};
