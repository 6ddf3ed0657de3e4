use axum::{extract::rejection::JsonRejection, Json};

use crate::errors::AppError;
use crate::render::{export_document, ExportFormat, ExportRequest, RenderedFile};

/// POST /api/export/pdf
pub async fn handle_export_pdf(
    body: Result<Json<ExportRequest>, JsonRejection>,
) -> Result<RenderedFile, AppError> {
    let Json(request) = body?;
    export_document(ExportFormat::Pdf, request).await
}

/// POST /api/export/docx
pub async fn handle_export_docx(
    body: Result<Json<ExportRequest>, JsonRejection>,
) -> Result<RenderedFile, AppError> {
    let Json(request) = body?;
    export_document(ExportFormat::Docx, request).await
}
