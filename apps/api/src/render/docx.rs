//! DOCX emitter. Page breaks are left to the consuming word processor.
//!
//! `docx_blocks` plans the paragraph sequence as plain data; `render_docx` maps
//! each planned block onto `docx-rs` paragraphs and packs the container in memory.

use std::io::Cursor;

use docx_rs::{Docx, LineSpacing, Paragraph, Run, RunFonts, Style, StyleType};

use crate::render::document::DocumentModel;
use crate::render::RenderError;

const BODY_FONT: &str = "Times New Roman";
/// Sizes are in half-points: 24 = 12pt.
const BODY_SIZE: usize = 24;
const STYLE_LABEL_SIZE: usize = 22;
/// Trailing spacing in twentieths of a point.
const BODY_SPACING_AFTER: u32 = 200;
const STYLE_LABEL_SPACING_AFTER: u32 = 300;

const TITLE_STYLE: &str = "Title";
const SUBTITLE_STYLE: &str = "Heading3";

/// One planned paragraph of the output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocxBlock<'a> {
    Title(&'a str),
    Subtitle(&'a str),
    StyleLabel(&'a str),
    Body(&'a str),
}

/// Title, optional subtitle, italic style label, then one block per paragraph.
pub fn docx_blocks(model: &DocumentModel) -> Vec<DocxBlock<'_>> {
    let mut blocks = Vec::with_capacity(model.paragraphs.len() + 3);
    blocks.push(DocxBlock::Title(&model.title));
    if let Some(subtitle) = &model.subtitle {
        blocks.push(DocxBlock::Subtitle(subtitle));
    }
    blocks.push(DocxBlock::StyleLabel(&model.style_label));
    blocks.extend(model.paragraphs.iter().map(|p| DocxBlock::Body(p)));
    blocks
}

fn to_paragraph(block: &DocxBlock<'_>) -> Paragraph {
    match block {
        DocxBlock::Title(text) => Paragraph::new()
            .add_run(Run::new().add_text(*text))
            .style(TITLE_STYLE),
        DocxBlock::Subtitle(text) => Paragraph::new()
            .add_run(Run::new().add_text(*text))
            .style(SUBTITLE_STYLE),
        DocxBlock::StyleLabel(text) => Paragraph::new()
            .add_run(Run::new().add_text(*text).italic().size(STYLE_LABEL_SIZE))
            .line_spacing(LineSpacing::new().after(STYLE_LABEL_SPACING_AFTER)),
        DocxBlock::Body(text) => Paragraph::new()
            .add_run(
                Run::new()
                    .add_text(*text)
                    .fonts(RunFonts::new().ascii(BODY_FONT).hi_ansi(BODY_FONT))
                    .size(BODY_SIZE),
            )
            .line_spacing(LineSpacing::new().after(BODY_SPACING_AFTER)),
    }
}

fn build_docx(model: &DocumentModel) -> Docx {
    let mut docx = Docx::new()
        .add_style(
            Style::new(TITLE_STYLE, StyleType::Paragraph)
                .name("Title")
                .size(56)
                .bold(),
        )
        .add_style(
            Style::new(SUBTITLE_STYLE, StyleType::Paragraph)
                .name("Heading 3")
                .size(28)
                .bold(),
        );

    for block in docx_blocks(model) {
        docx = docx.add_paragraph(to_paragraph(&block));
    }
    docx
}

/// Renders the document model into a complete DOCX byte stream.
pub fn render_docx(model: &DocumentModel) -> Result<Vec<u8>, RenderError> {
    let mut buffer = Cursor::new(Vec::new());
    build_docx(model)
        .build()
        .pack(&mut buffer)
        .map_err(|e| RenderError::Docx(e.to_string()))?;
    Ok(buffer.into_inner())
}
