//! Document export: story + draft → PDF or DOCX attachment.
//!
//! `document` builds the format-agnostic model, `pdf` and `docx` emit bytes,
//! `export` validates requests and runs the emitters off the async runtime.

pub mod document;
pub mod docx;
pub mod export;
pub mod handlers;
pub mod pdf;

use thiserror::Error;

pub use export::{export_document, ExportFormat, ExportRequest, RenderedFile};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("DOCX generation failed: {0}")]
    Docx(String),

    #[error("render task failed: {0}")]
    Join(String),
}
