//! Format-agnostic document model shared by the PDF and DOCX emitters.

use serde::Serialize;

use crate::models::story::{Story, WritingStyle};

/// Title, optional subtitle, style label and body paragraphs, derived once per export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentModel {
    pub title: String,
    pub subtitle: Option<String>,
    pub style_label: String,
    pub paragraphs: Vec<String>,
}

impl DocumentModel {
    pub fn build(story: &Story, draft: &str, style: WritingStyle) -> Self {
        let subtitle = &story.customization.subtitle;
        Self {
            title: story.display_title().to_string(),
            subtitle: (!subtitle.is_empty()).then(|| subtitle.clone()),
            style_label: format!("Writing style: {style}"),
            paragraphs: split_paragraphs(draft),
        }
    }
}

/// Splits a draft on runs of two or more `\n`, trims each chunk and drops
/// chunks that are empty after trimming. Order is preserved.
pub fn split_paragraphs(draft: &str) -> Vec<String> {
    let bytes = draft.as_bytes();
    let mut chunks: Vec<&str> = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'\n' {
            i += 1;
            continue;
        }
        let run_start = i;
        while i < bytes.len() && bytes[i] == b'\n' {
            i += 1;
        }
        if i - run_start >= 2 {
            chunks.push(&draft[start..run_start]);
            start = i;
        }
    }
    chunks.push(&draft[start..]);

    chunks
        .into_iter()
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(str::to_string)
        .collect()
}

/// File stem for an export: the customization title (or "autobiography"),
/// lowercased, with each whitespace run collapsed into a single hyphen.
///
/// Unlike the document title, the fallback never uses the author's name.
pub fn file_stem(story: &Story) -> String {
    let title = if story.customization.title.is_empty() {
        "autobiography"
    } else {
        story.customization.title.as_str()
    };
    sanitize_title(title)
}

pub(crate) fn sanitize_title(title: &str) -> String {
    let lowered = title.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut in_whitespace = false;

    for c in lowered.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('-');
            }
            in_whitespace = true;
        } else {
            out.push(c);
            in_whitespace = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_empty_draft() {
        assert!(split_paragraphs("").is_empty());
    }

    #[test]
    fn test_split_on_two_or_more_newlines() {
        assert_eq!(split_paragraphs("A\n\nB\n\n\nC"), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_single_newline_does_not_split() {
        assert_eq!(
            split_paragraphs("line one\nline two\n\nnext"),
            vec!["line one\nline two", "next"]
        );
    }

    #[test]
    fn test_chunks_are_trimmed_and_blank_chunks_dropped() {
        assert_eq!(
            split_paragraphs("\n\n  First  \n\n   \n\n\tSecond\n\n\n\n"),
            vec!["First", "Second"]
        );
    }

    #[test]
    fn test_newlines_separated_by_spaces_do_not_split() {
        // Only consecutive newline characters count as a paragraph break.
        assert_eq!(split_paragraphs("A\n \nB"), vec!["A\n \nB"]);
    }

    #[test]
    fn test_multibyte_text_survives_split() {
        assert_eq!(
            split_paragraphs("Café au lait\n\nNaïve façade"),
            vec!["Café au lait", "Naïve façade"]
        );
    }

    #[test]
    fn test_build_model_uses_story_metadata() {
        let mut story = Story::default();
        story.customization.title = "My Life".to_string();
        let model = DocumentModel::build(&story, "Para one.\n\nPara two.", WritingStyle::Simple);

        assert_eq!(model.title, "My Life");
        assert_eq!(model.subtitle.as_deref(), Some("A journey of growth"));
        assert_eq!(model.style_label, "Writing style: simple");
        assert_eq!(model.paragraphs, vec!["Para one.", "Para two."]);
    }

    #[test]
    fn test_build_model_omits_empty_subtitle() {
        let mut story = Story::default();
        story.customization.subtitle.clear();
        let model = DocumentModel::build(&story, "Body", WritingStyle::Poetic);
        assert!(model.subtitle.is_none());
    }

    #[test]
    fn test_sanitize_collapses_whitespace_runs() {
        assert_eq!(sanitize_title("My Life"), "my-life");
        assert_eq!(sanitize_title("A  Long\t\nStory"), "a-long-story");
        assert_eq!(sanitize_title(" Padded "), "-padded-");
    }

    #[test]
    fn test_file_stem_falls_back_to_autobiography() {
        let mut story = Story::default();
        story.customization.title.clear();
        story.personal.full_name = "Ada Lovelace".to_string();
        assert_eq!(file_stem(&story), "autobiography");
    }
}
