//! PDF emitter: document model → wrapped lines → pages → `pdf-writer` byte stream.
//!
//! Title, subtitle and style label are placed as single unwrapped lines. The body is
//! wrapped as one blob at `PDF_WRAP_WIDTH` characters, so paragraph breaks collapse
//! into ordinary word spacing on this path.
//!
//! Object layout: 1 = catalog, 2 = page tree, 3 = info, 4 = Times-Roman, 5 = Times-Bold,
//! then a (page, content stream) pair per page.

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

use crate::layout::{
    paginate, wrap_text, BlockKind, DrawBlock, FontRole, PageGeometry, RenderedPage,
    PDF_WRAP_WIDTH,
};
use crate::render::document::DocumentModel;
use crate::render::RenderError;

const REGULAR_FONT: Name<'static> = Name(b"F1");
const BOLD_FONT: Name<'static> = Name(b"F2");

/// A finished PDF plus the number of pages it contains.
#[derive(Debug)]
pub struct RenderedPdf {
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

/// Builds the ordered draw blocks for a document.
pub fn draw_blocks(model: &DocumentModel) -> Vec<DrawBlock> {
    let mut blocks = vec![DrawBlock::single(BlockKind::Title, model.title.as_str())];
    if let Some(subtitle) = &model.subtitle {
        blocks.push(DrawBlock::single(BlockKind::Subtitle, subtitle.as_str()));
    }
    blocks.push(DrawBlock::single(
        BlockKind::StyleLabel,
        model.style_label.as_str(),
    ));

    let body = model.paragraphs.join(" ");
    blocks.push(DrawBlock {
        kind: BlockKind::Body,
        lines: wrap_text(&body, PDF_WRAP_WIDTH),
    });
    blocks
}

/// Lays out a document on A4 pages.
pub fn layout_pdf(model: &DocumentModel) -> Vec<RenderedPage> {
    paginate(&draw_blocks(model), &PageGeometry::a4())
}

/// Renders the document model into a complete PDF byte stream.
pub fn render_pdf(model: &DocumentModel) -> Result<RenderedPdf, RenderError> {
    let pages = layout_pdf(model);
    let bytes = write_pdf(&model.title, &pages, &PageGeometry::a4())?;
    Ok(RenderedPdf {
        bytes,
        page_count: pages.len(),
    })
}

/// Serializes laid-out pages. The whole file is assembled in memory.
pub(crate) fn write_pdf(
    title: &str,
    pages: &[RenderedPage],
    geometry: &PageGeometry,
) -> Result<Vec<u8>, RenderError> {
    if pages.is_empty() {
        return Err(RenderError::Pdf("no pages to write".to_string()));
    }
    if !(geometry.width > 0.0 && geometry.height > 2.0 * geometry.margin) {
        return Err(RenderError::Pdf(format!(
            "invalid page geometry {}x{} with margin {}",
            geometry.width, geometry.height, geometry.margin
        )));
    }

    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let info_id = Ref::new(3);
    let regular_id = Ref::new(4);
    let bold_id = Ref::new(5);

    let page_ids: Vec<Ref> = (0..pages.len())
        .map(|i| Ref::new(6 + 2 * i as i32))
        .collect();
    let content_ids: Vec<Ref> = (0..pages.len())
        .map(|i| Ref::new(7 + 2 * i as i32))
        .collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id)
        .kids(page_ids.iter().copied())
        .count(pages.len() as i32);
    pdf.document_info(info_id).title(TextStr(title));

    pdf.type1_font(regular_id)
        .base_font(Name(b"Times-Roman"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));
    pdf.type1_font(bold_id)
        .base_font(Name(b"Times-Bold"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    for (i, page) in pages.iter().enumerate() {
        let mut writer = pdf.page(page_ids[i]);
        writer
            .media_box(Rect::new(0.0, 0.0, geometry.width, geometry.height))
            .parent(page_tree_id)
            .contents(content_ids[i]);
        writer
            .resources()
            .fonts()
            .pair(REGULAR_FONT, regular_id)
            .pair(BOLD_FONT, bold_id);
        writer.finish();

        let content = page_content(page);
        pdf.stream(content_ids[i], &content);
    }

    Ok(pdf.finish())
}

fn page_content(page: &RenderedPage) -> Vec<u8> {
    let mut content = Content::new();
    for run in &page.runs {
        let font = match run.font {
            FontRole::Regular => REGULAR_FONT,
            FontRole::Bold => BOLD_FONT,
        };
        let text = encode_win_ansi(&run.text);
        content
            .begin_text()
            .set_font(font, run.size)
            .set_fill_rgb(run.color.r, run.color.g, run.color.b)
            .next_line(run.x, run.y)
            .show(Str(&text))
            .end_text();
    }
    content.finish()
}

/// Encodes text for the standard Type1 faces under WinAnsiEncoding.
///
/// Latin-1 maps one-to-one; common typographic punctuation maps to its WinAnsi
/// slot; anything else becomes `?`.
pub(crate) fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' => c as u8,
            '\u{A0}'..='\u{FF}' => c as u32 as u8,
            '\u{20AC}' => 0x80,
            '\u{2026}' => 0x85,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::story::{Story, WritingStyle};

    fn model(draft: &str) -> DocumentModel {
        let mut story = Story::default();
        story.customization.title = "My Life".to_string();
        DocumentModel::build(&story, draft, WritingStyle::Simple)
    }

    fn long_draft(paragraphs: usize) -> String {
        (0..paragraphs)
            .map(|i| format!("Paragraph {i} remembers the orchard behind the house and the long summer evenings spent there."))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    #[test]
    fn test_draw_blocks_order_and_kinds() {
        let blocks = draw_blocks(&model("Para one.\n\nPara two."));
        let kinds: Vec<BlockKind> = blocks.iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Title,
                BlockKind::Subtitle,
                BlockKind::StyleLabel,
                BlockKind::Body
            ]
        );
        assert_eq!(blocks[0].lines, vec!["My Life"]);
        assert_eq!(blocks[2].lines, vec!["Writing style: simple"]);
        assert_eq!(blocks[3].lines, vec!["Para one. Para two."]);
    }

    #[test]
    fn test_header_lines_are_not_wrapped() {
        let mut m = model("Body");
        m.title = "word ".repeat(30).trim().to_string();
        let blocks = draw_blocks(&m);
        assert_eq!(blocks[0].lines.len(), 1);
    }

    #[test]
    fn test_draw_blocks_skip_missing_subtitle() {
        let mut m = model("Body");
        m.subtitle = None;
        let blocks = draw_blocks(&m);
        assert!(blocks.iter().all(|b| b.kind != BlockKind::Subtitle));
    }

    #[test]
    fn test_body_lines_respect_wrap_width() {
        let blocks = draw_blocks(&model(&long_draft(5)));
        let body = &blocks[3];
        assert!(body.lines.len() > 1);
        assert!(body.lines.iter().all(|l| l.chars().count() <= PDF_WRAP_WIDTH));
    }

    #[test]
    fn test_render_pdf_produces_pdf_bytes() {
        let rendered = render_pdf(&model("Para one.\n\nPara two.")).unwrap();
        assert!(rendered.bytes.starts_with(b"%PDF-"));
        assert_eq!(rendered.page_count, 1);

        let haystack = String::from_utf8_lossy(&rendered.bytes);
        assert!(haystack.contains("Times-Roman"));
        assert!(haystack.contains("Times-Bold"));
        assert!(haystack.contains("(Para one. Para two.)"));
    }

    #[test]
    fn test_long_draft_paginates_and_keeps_every_line() {
        let m = model(&long_draft(60));
        let blocks = draw_blocks(&m);
        let expected_lines: usize = blocks.iter().map(|b| b.lines.len()).sum();

        let pages = layout_pdf(&m);
        let drawn: usize = pages.iter().map(|p| p.runs.len()).sum();
        assert!(pages.len() > 1);
        assert_eq!(drawn, expected_lines);

        let rendered = render_pdf(&m).unwrap();
        assert_eq!(rendered.page_count, pages.len());
    }

    #[test]
    fn test_write_pdf_rejects_empty_page_list() {
        let result = write_pdf("x", &[], &PageGeometry::a4());
        assert!(matches!(result, Err(RenderError::Pdf(_))));
    }

    #[test]
    fn test_write_pdf_rejects_degenerate_geometry() {
        let pages = layout_pdf(&model("Body"));
        let geometry = PageGeometry {
            width: 100.0,
            height: 80.0,
            margin: 50.0,
        };
        assert!(write_pdf("x", &pages, &geometry).is_err());
    }

    #[test]
    fn test_win_ansi_encoding() {
        assert_eq!(encode_win_ansi("Abc"), b"Abc".to_vec());
        assert_eq!(encode_win_ansi("café"), vec![b'c', b'a', b'f', 0xE9]);
        assert_eq!(encode_win_ansi("\u{201C}hi\u{201D}"), vec![0x93, b'h', b'i', 0x94]);
        assert_eq!(encode_win_ansi("日本"), b"??".to_vec());
    }
}
