//! Single-pass paginator for the PDF path.
//!
//! A vertical cursor starts at `page_height - margin` and moves down by
//! `font_size + line_gap` after each drawn line. Before a line is drawn, a
//! cursor at or below the bottom margin opens a new page and resets to the top.
//! Pages are closed in creation order and never revisited: no backtracking, no
//! widow/orphan control, no re-flow.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Geometry and styling constants
// ────────────────────────────────────────────────────────────────────────────

/// Page size and uniform margin, in PDF points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl PageGeometry {
    /// A4 portrait with 50pt margins on every side.
    pub const fn a4() -> Self {
        Self {
            width: 595.28,
            height: 841.89,
            margin: 50.0,
        }
    }

    /// Cursor position for the first line on a fresh page.
    pub fn top(&self) -> f32 {
        self.height - self.margin
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontRole {
    /// Body face (Times-Roman).
    Regular,
    /// Title face (Times-Bold).
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// Dark gray used for every run.
pub const TEXT_COLOR: Rgb = Rgb {
    r: 0.2,
    g: 0.2,
    b: 0.2,
};

/// The kinds of content the paginator places, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    Title,
    Subtitle,
    StyleLabel,
    Body,
}

impl BlockKind {
    pub fn font_size(&self) -> f32 {
        match self {
            BlockKind::Title => 22.0,
            BlockKind::Subtitle => 14.0,
            BlockKind::StyleLabel => 10.0,
            BlockKind::Body => 12.0,
        }
    }

    pub fn line_gap(&self) -> f32 {
        match self {
            BlockKind::Title => 10.0,
            BlockKind::Subtitle => 12.0,
            BlockKind::StyleLabel => 10.0,
            BlockKind::Body => 6.0,
        }
    }

    pub fn font_role(&self) -> FontRole {
        match self {
            BlockKind::Title => FontRole::Bold,
            _ => FontRole::Regular,
        }
    }

    /// Distance the cursor travels after one line of this kind.
    pub fn advance(&self) -> f32 {
        self.font_size() + self.line_gap()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Input / output types
// ────────────────────────────────────────────────────────────────────────────

/// A block of already-wrapped lines sharing one kind.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawBlock {
    pub kind: BlockKind,
    pub lines: Vec<String>,
}

impl DrawBlock {
    /// A block drawn as exactly one line, without wrapping.
    pub fn single(kind: BlockKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            lines: vec![text.into()],
        }
    }
}

/// One positioned piece of text. `(x, y)` is the baseline origin in PDF space
/// (origin at the bottom-left corner).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub font: FontRole,
    pub size: f32,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedPage {
    /// 1-based page number, in emission order.
    pub number: usize,
    pub runs: Vec<TextRun>,
}

impl RenderedPage {
    fn new(number: usize) -> Self {
        Self {
            number,
            runs: Vec::new(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pagination
// ────────────────────────────────────────────────────────────────────────────

/// Places every line of every block onto pages.
///
/// Always returns at least one page; page 1 exists before the first line is drawn.
pub fn paginate(blocks: &[DrawBlock], geometry: &PageGeometry) -> Vec<RenderedPage> {
    let mut pages = vec![RenderedPage::new(1)];
    let mut cursor_y = geometry.top();

    for block in blocks {
        let size = block.kind.font_size();
        let font = block.kind.font_role();

        for line in &block.lines {
            if cursor_y <= geometry.margin {
                pages.push(RenderedPage::new(pages.len() + 1));
                cursor_y = geometry.top();
            }

            if let Some(page) = pages.last_mut() {
                page.runs.push(TextRun {
                    text: line.clone(),
                    x: geometry.margin,
                    y: cursor_y,
                    font,
                    size,
                    color: TEXT_COLOR,
                });
            }

            cursor_y -= block.kind.advance();
        }
    }

    pages
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
