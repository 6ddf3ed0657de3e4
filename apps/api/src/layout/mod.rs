// Layout: character-budget line wrapping and single-pass pagination for the PDF path.
// Pure and synchronous; callers run it inside tokio::task::spawn_blocking.

pub mod paginator;
pub mod wrap;

pub use paginator::{paginate, BlockKind, DrawBlock, FontRole, PageGeometry, RenderedPage};
pub use wrap::{wrap_text, PDF_WRAP_WIDTH};
