//! Report renderer port
//!
//! Turns a compiled [`ReportDocument`] into the bytes of a document file.

use coach_domain::ReportDocument;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while rendering a report. Rendering is all-or-nothing:
/// on error no bytes are produced.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Unrenderable character {ch:?} in {field}")]
    UnrenderableCharacter { ch: char, field: String },

    #[error("Failed to load image {path}: {reason}")]
    Image { path: PathBuf, reason: String },

    #[error("Document error: {0}")]
    Document(String),
}

/// Renders a report document to an in-memory file
pub trait ReportRenderer: Send + Sync {
    /// MIME type of the produced bytes
    fn mime_type(&self) -> &'static str;

    /// Render the whole document
    fn render(&self, document: &ReportDocument) -> Result<Vec<u8>, RenderError>;
}
