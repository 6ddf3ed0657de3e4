//! Export service: validates a request, renders on the blocking pool and
//! packages the result as a downloadable file.

use std::fmt;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::story::{Story, WritingStyle};
use crate::render::docx::render_docx;
use crate::render::document::{file_stem, DocumentModel};
use crate::render::pdf::render_pdf;
use crate::render::RenderError;

pub const MISSING_STORY_OR_DRAFT: &str = "Missing story or draft";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Docx,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
        }
    }

    pub fn media_type(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Pdf => f.write_str("PDF"),
            ExportFormat::Docx => f.write_str("DOCX"),
        }
    }
}

/// Request body shared by both export endpoints. `style` falls back to the
/// story's selected style when omitted.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ExportRequest {
    pub story: Option<Story>,
    pub draft: Option<String>,
    pub style: Option<WritingStyle>,
}

/// A validated export: the document model plus the file stem it will be saved under.
#[derive(Debug)]
pub struct ValidExport {
    pub model: DocumentModel,
    pub file_stem: String,
}

impl ExportRequest {
    /// Rejects requests without a story or with a missing/empty draft.
    pub fn validate(self) -> Result<ValidExport, AppError> {
        let (story, draft) = match (self.story, self.draft) {
            (Some(story), Some(draft)) if !draft.is_empty() => (story, draft),
            _ => return Err(AppError::Validation(MISSING_STORY_OR_DRAFT.to_string())),
        };
        let style = self.style.unwrap_or(story.selected_style);

        Ok(ValidExport {
            model: DocumentModel::build(&story, &draft, style),
            file_stem: file_stem(&story),
        })
    }
}

/// A fully rendered document, ready to be sent as an attachment.
#[derive(Debug, Clone)]
pub struct RenderedFile {
    pub bytes: Bytes,
    pub format: ExportFormat,
    pub filename: String,
}

impl RenderedFile {
    pub fn content_disposition(&self) -> String {
        format!(
            "attachment; filename=\"{}\"",
            urlencoding::encode(&self.filename)
        )
    }
}

impl IntoResponse for RenderedFile {
    fn into_response(self) -> Response {
        let disposition = self.content_disposition();
        (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, self.format.media_type().to_string()),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            self.bytes,
        )
            .into_response()
    }
}

/// Validates and renders an export request.
///
/// Rendering is CPU-bound and runs inside `spawn_blocking`. Nothing is returned
/// unless the whole byte stream was assembled.
pub async fn export_document(
    format: ExportFormat,
    request: ExportRequest,
) -> Result<RenderedFile, AppError> {
    let ValidExport { model, file_stem } = request.validate()?;
    let filename = format!("{file_stem}.{}", format.extension());

    let bytes = tokio::task::spawn_blocking(move || render(format, &model))
        .await
        .map_err(|e| AppError::Render {
            format,
            source: RenderError::Join(e.to_string()),
        })?
        .map_err(|source| AppError::Render { format, source })?;

    info!(%format, filename = %filename, bytes = bytes.len(), "Export rendered");

    Ok(RenderedFile {
        bytes: Bytes::from(bytes),
        format,
        filename,
    })
}

fn render(format: ExportFormat, model: &DocumentModel) -> Result<Vec<u8>, RenderError> {
    match format {
        ExportFormat::Pdf => {
            let rendered = render_pdf(model)?;
            info!(pages = rendered.page_count, "PDF laid out");
            Ok(rendered.bytes)
        }
        ExportFormat::Docx => render_docx(model),
    }
}
